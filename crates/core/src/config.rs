//! Generator configuration.
//!
//! Every field defaults to the behaviour of a bare `authorgen` run: read the
//! repository containing the current directory with the `git` CLI, use only
//! the built-in aliases and emit `package gui`.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::{ConfigError, CoreError};
use crate::history::{AuthorHistory, Git2History, GitCliHistory};
use crate::identity::{AliasFile, AliasTable};
use crate::render::DEFAULT_PACKAGE;

/// Go keywords, which cannot be used as a package name.
const GO_KEYWORDS: &[&str] = &[
    "break", "case", "chan", "const", "continue", "default", "defer", "else",
    "fallthrough", "for", "func", "go", "goto", "if", "import", "interface", "map",
    "package", "range", "return", "select", "struct", "switch", "type", "var",
];

/// Which implementation reads the commit history.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HistoryBackend {
    /// Run `git log` as a child process.
    #[default]
    Cli,
    /// Walk the commit graph in-process with libgit2.
    Git2,
}

impl FromStr for HistoryBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "cli" => Ok(Self::Cli),
            "git2" => Ok(Self::Git2),
            other => Err(ConfigError::InvalidValue {
                field: "backend".into(),
                detail: format!("unknown history backend '{}', expected 'cli' or 'git2'", other),
            }),
        }
    }
}

impl fmt::Display for HistoryBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cli => f.write_str("cli"),
            Self::Git2 => f.write_str("git2"),
        }
    }
}

/// Settings for one generator run.
///
/// Missing fields take their [`Default`] values when deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Directory inside the repository whose history is read.
    pub repo_path: PathBuf,

    /// Go package clause of the generated file.
    pub package: String,

    /// Optional TOML alias file extending the built-in aliases.
    pub alias_file: Option<PathBuf>,

    /// History implementation.
    pub backend: HistoryBackend,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            repo_path: PathBuf::from("."),
            package: DEFAULT_PACKAGE.to_string(),
            alias_file: None,
            backend: HistoryBackend::default(),
        }
    }
}

impl GeneratorConfig {
    /// Validate the configuration for obvious errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.repo_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "repo_path".into(),
                detail: "repository path must not be empty".into(),
            });
        }
        if !is_go_package_name(&self.package) {
            return Err(ConfigError::InvalidValue {
                field: "package".into(),
                detail: format!("'{}' is not a valid Go package name", self.package),
            });
        }
        Ok(())
    }

    /// The built-in alias table, extended by the alias file when one is set.
    pub fn alias_table(&self) -> Result<AliasTable, CoreError> {
        let table = AliasTable::builtin();
        match &self.alias_file {
            Some(path) => {
                let extra = AliasFile::load(path)?;
                info!(path = %path.display(), count = extra.len(), "applying alias file");
                Ok(table.extend(extra)?)
            }
            None => Ok(table),
        }
    }

    /// The history adapter selected by `backend`.
    pub fn history(&self) -> Box<dyn AuthorHistory> {
        history_for(self.backend, &self.repo_path)
    }
}

fn history_for(backend: HistoryBackend, repo_path: &Path) -> Box<dyn AuthorHistory> {
    match backend {
        HistoryBackend::Cli => Box::new(GitCliHistory::new(repo_path)),
        HistoryBackend::Git2 => Box::new(Git2History::new(repo_path)),
    }
}

fn is_go_package_name(name: &str) -> bool {
    let mut chars = name.chars();
    let first_ok = match chars.next() {
        Some(c) => c.is_alphabetic() || c == '_',
        None => return false,
    };
    first_ok
        && name != "_"
        && chars.all(|c| c.is_alphanumeric() || c == '_')
        && !GO_KEYWORDS.contains(&name)
}
