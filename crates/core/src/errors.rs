//! Error types for the authorgen core library.
//!
//! Each subsystem has its own error type derived with `thiserror`, and a
//! top-level [`CoreError`] enum unifies them all for callers that want a
//! single error type.

use thiserror::Error;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Unified error type for the entire core library.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Alias(#[from] AliasError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

// ---------------------------------------------------------------------------
// History errors
// ---------------------------------------------------------------------------

/// The authorship history could not be read.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// The `git` binary was not found on `$PATH`.
    #[error("git binary not found: {0}")]
    BinaryNotFound(String),

    /// The path does not exist or is not inside a git repository.
    #[error("git repository not found at '{0}'")]
    RepositoryNotFound(String),

    /// A `git` command exited with a non-zero status.
    #[error("git command failed (exit {exit_code}): {stderr}")]
    CommandFailed { exit_code: i32, stderr: String },

    /// A `git2` library error.
    #[error("git2 error: {0}")]
    Git2Error(#[from] git2::Error),

    /// Generic I/O wrapper.
    #[error("history I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Parse errors
// ---------------------------------------------------------------------------

/// Errors from parsing history output into author records.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A non-blank line without the name/email delimiter.
    #[error("malformed history line {line_number}: {line:?}")]
    MalformedLine { line_number: usize, line: String },
}

// ---------------------------------------------------------------------------
// Alias errors
// ---------------------------------------------------------------------------

/// Errors from loading or validating the alias table.
#[derive(Debug, Error)]
pub enum AliasError {
    /// The alias file could not be loaded.
    #[error("alias file error at '{path}': {detail}")]
    FileError { path: String, detail: String },

    /// TOML parse error when reading the alias file.
    #[error("alias file parse error: {0}")]
    ParseError(String),

    /// An alias points at a name that is itself an alias.
    #[error("alias '{alias}' maps to '{target}', which is itself an alias")]
    Chained { alias: String, target: String },

    /// Generic I/O error.
    #[error("alias I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors from configuration validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config value is invalid.
    #[error("invalid configuration value for '{field}': {detail}")]
    InvalidValue { field: String, detail: String },
}
