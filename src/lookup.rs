//! Lookup tables mapping raw codes to canonical names.

use std::collections::HashMap;

/// A unique-key mapping from raw code to canonical name.
///
/// Keys are exact strings; there is no fuzzy matching. A code absent from
/// the table has no canonical value, and what happens then is decided by the
/// [`crate::normalize::MissingCodePolicy`] of the normalizer using the table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LookupTable {
    entries: HashMap<String, String>,
}

impl LookupTable {
    /// Create an empty lookup table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a code → name entry, replacing any previous entry for `code`.
    pub fn insert(&mut self, code: impl Into<String>, name: impl Into<String>) {
        self.entries.insert(code.into(), name.into());
    }

    /// Canonical name for `code`, if the table has one.
    pub fn get(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Returns `true` if the table has an entry for `code`.
    pub fn contains_code(&self, code: &str) -> bool {
        self.entries.contains_key(code)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<C: Into<String>, N: Into<String>> FromIterator<(C, N)> for LookupTable {
    fn from_iter<I: IntoIterator<Item = (C, N)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(c, n)| (c.into(), n.into()))
            .collect();
        Self { entries }
    }
}
