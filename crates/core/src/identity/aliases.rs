//! The alias table mapping name variants to canonical author names.

use std::collections::HashMap;

use tracing::debug;

use crate::errors::AliasError;

/// Known name variants and the canonical name each one stands for.
pub const BUILTIN_ALIASES: &[(&str, &str)] = &[
    ("brl", "Bruce Leidl"),
    ("Fab Torchz", "Fan Jiang"),
    ("Fab Torchz J", "Fan Jiang"),
    ("fanjiang", "Fan Jiang"),
    ("Fan Jiang Torchz", "Fan Jiang"),
    ("Pedro Enrique Palau", "Pedro Palau"),
    ("Reinaldo de Souza Jr", "Reinaldo de Souza Junior"),
    ("sacurio", "Sandy Acurio"),
    ("Sandy", "Sandy Acurio"),
    ("cnaranjo", "Cristian Naranjo"),
    ("ivanjijon", "Ivan Jijon"),
    ("mvelasco", "Mauro Velasco"),
];

/// Exact-match, case-sensitive mapping from alias to canonical name.
///
/// No canonical name is itself an alias, so [`AliasTable::canonicalize`] is
/// idempotent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AliasTable {
    entries: HashMap<String, String>,
}

impl AliasTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        Self {
            entries: BUILTIN_ALIASES
                .iter()
                .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
                .collect(),
        }
    }

    /// An empty table; every name is its own canonical form.
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Build a table from arbitrary pairs, rejecting chained aliases.
    pub fn from_pairs<I, A, C>(pairs: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        let table = Self {
            entries: pairs
                .into_iter()
                .map(|(alias, canonical)| (alias.into(), canonical.into()))
                .collect(),
        };
        table.validate()?;
        Ok(table)
    }

    /// Add `extra` on top of this table. Entries in `extra` replace existing
    /// entries with the same alias. The merged table is re-validated.
    pub fn extend<I, A, C>(mut self, extra: I) -> Result<Self, AliasError>
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        for (alias, canonical) in extra {
            self.entries.insert(alias.into(), canonical.into());
        }
        self.validate()?;
        debug!(count = self.entries.len(), "extended alias table");
        Ok(self)
    }

    /// Map `name` to its canonical form.
    pub fn canonicalize<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries.get(name).map(String::as_str).unwrap_or(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Reject any alias whose target is also an alias.
    fn validate(&self) -> Result<(), AliasError> {
        let mut aliases: Vec<&String> = self.entries.keys().collect();
        aliases.sort();
        for alias in aliases {
            let target = &self.entries[alias];
            if self.entries.contains_key(target) {
                return Err(AliasError::Chained {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        Ok(())
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        Self::builtin()
    }
}
