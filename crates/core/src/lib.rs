//! authorgen core library.
//!
//! This crate turns a repository's commit authorship into the Go source of
//! the application's contributor list: history query adapters, line parsing,
//! alias normalization, canonical folding and source rendering.

pub mod authors;
pub mod config;
pub mod errors;
pub mod generator;
pub mod history;
pub mod identity;
pub mod render;

// Re-exports for convenience.
pub use config::{GeneratorConfig, HistoryBackend};
pub use generator::AuthorListGenerator;
pub use identity::AliasTable;
