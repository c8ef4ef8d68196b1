//! Canonical author map: seeding, folding and sorting.

use std::collections::HashMap;

use tracing::debug;

use crate::history::RawAuthorRecord;
use crate::identity::AliasTable;

/// Name that is always listed, with no email, even when absent from history.
pub const SEED_AUTHOR: &str = "Adam Langley";

/// Canonical author name -> email (possibly empty).
///
/// Folding is last-write-wins: when two records share a canonical name the
/// later record's email is kept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalAuthorMap {
    entries: HashMap<String, String>,
}

impl CanonicalAuthorMap {
    /// A map holding only the seed entry.
    pub fn seeded() -> Self {
        let mut entries = HashMap::new();
        entries.insert(SEED_AUTHOR.to_string(), String::new());
        Self { entries }
    }

    /// Fold `records`, in order, into a freshly seeded map.
    pub fn from_records<'r, I>(records: I, aliases: &AliasTable) -> Self
    where
        I: IntoIterator<Item = &'r RawAuthorRecord>,
    {
        let mut map = Self::seeded();
        for record in records {
            map.insert(record, aliases);
        }
        debug!(count = map.len(), "folded canonical authors");
        map
    }

    /// Normalize one record's name and store its email, replacing any email
    /// already stored for that canonical name.
    pub fn insert(&mut self, record: &RawAuthorRecord, aliases: &AliasTable) {
        let canonical = aliases.canonicalize(&record.name);
        if canonical != record.name {
            debug!(alias = %record.name, canonical, "applied alias");
        }
        self.entries.insert(canonical.to_string(), record.email.clone());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All (name, email) pairs, ascending by name then email.
    pub fn into_sorted(self) -> Vec<(String, String)> {
        let mut pairs: Vec<(String, String)> = self.entries.into_iter().collect();
        pairs.sort();
        pairs
    }
}

impl Default for CanonicalAuthorMap {
    fn default() -> Self {
        Self::seeded()
    }
}
