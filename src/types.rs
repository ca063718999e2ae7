//! Core data model types for reconciliation.
//!
//! This crate compares two in-memory [`Dataset`]s of raw (platform, node)
//! rows by first projecting each row to a [`CanonicalPair`].

use serde::Serialize;

/// A single raw input row: a platform code and a node code as they appear in
/// the source inventory, before normalization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// Raw platform identifier.
    pub platform_code: String,
    /// Raw node identifier.
    pub node_code: String,
}

impl Record {
    /// Create a new record.
    pub fn new(platform_code: impl Into<String>, node_code: impl Into<String>) -> Self {
        Self {
            platform_code: platform_code.into(),
            node_code: node_code.into(),
        }
    }
}

/// A normalized (platform, node) pair, the unit compared across datasets.
///
/// Equality and hashing are structural. Ordering is platform first, then
/// node, which is the order difference reports are rendered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct CanonicalPair {
    /// Canonical platform name.
    pub platform: String,
    /// Canonical node name.
    pub node: String,
}

impl CanonicalPair {
    /// Create a new canonical pair.
    pub fn new(platform: impl Into<String>, node: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            node: node.into(),
        }
    }
}

/// In-memory tabular inventory.
///
/// Rows are stored in input order; duplicates are allowed here and collapsed
/// only when pair-sets are formed during reconciliation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    /// Ordered row storage.
    pub records: Vec<Record>,
}

impl Dataset {
    /// Create a dataset from records.
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    /// Create a dataset from parallel platform/node column vectors.
    ///
    /// # Panics
    ///
    /// Panics if the two columns have different lengths.
    pub fn from_columns(platform_codes: Vec<String>, node_codes: Vec<String>) -> Self {
        assert!(
            platform_codes.len() == node_codes.len(),
            "platform column length {} does not match node column length {}",
            platform_codes.len(),
            node_codes.len()
        );
        let records = platform_codes
            .into_iter()
            .zip(node_codes)
            .map(|(p, n)| Record::new(p, n))
            .collect();
        Self { records }
    }

    /// Number of rows in the dataset.
    pub fn row_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the dataset has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Project every row to a [`CanonicalPair`] with the identity mapping,
    /// i.e. treat the raw fields as already canonical.
    ///
    /// This is how the second dataset enters reconciliation.
    pub fn as_canonical(&self) -> Vec<CanonicalPair> {
        self.records
            .iter()
            .map(|r| CanonicalPair::new(r.platform_code.clone(), r.node_code.clone()))
            .collect()
    }
}
