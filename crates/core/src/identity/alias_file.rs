//! TOML alias file reader.
//!
//! The alias file format:
//!
//! ```toml
//! [aliases]
//! "old nick" = "Canonical Name"
//! jdoe = "John Doe"
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::errors::AliasError;

/// Wrapper around the TOML alias file structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AliasFileData {
    /// The `[aliases]` table mapping alias -> canonical name.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

/// Loader for alias files.
pub struct AliasFile;

impl AliasFile {
    /// Load the alias file from disk and return its alias map.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<BTreeMap<String, String>, AliasError> {
        let path = path.as_ref();
        info!(path = %path.display(), "loading alias file");

        if !path.exists() {
            return Err(AliasError::FileError {
                path: path.display().to_string(),
                detail: "file not found".into(),
            });
        }

        let contents = std::fs::read_to_string(path)?;
        let data: AliasFileData =
            toml::from_str(&contents).map_err(|e| AliasError::ParseError(e.to_string()))?;

        debug!(count = data.aliases.len(), "loaded aliases");
        Ok(data.aliases)
    }
}
