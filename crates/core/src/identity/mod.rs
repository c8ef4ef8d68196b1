//! Author name normalization.
//!
//! Historical nicknames and misspellings are rewritten to one canonical
//! display name through an [`AliasTable`]. The table starts from the
//! built-in [`BUILTIN_ALIASES`] and may be extended from a TOML alias file.

pub mod alias_file;
pub mod aliases;

pub use alias_file::AliasFile;
pub use aliases::{AliasTable, BUILTIN_ALIASES};
