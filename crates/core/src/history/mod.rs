//! Authorship history query and parsing.

pub mod client;
pub mod parser;

pub use client::{AuthorHistory, Git2History, GitCliHistory};
pub use parser::*;
