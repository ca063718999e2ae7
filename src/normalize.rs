//! Normalization of raw records into canonical pairs.
//!
//! The [`Normalizer`] holds the two lookup tables as explicit configuration;
//! there is no process-wide table state. Dataset 2 does not go through a
//! normalizer at all — it uses [`crate::types::Dataset::as_canonical`].

use crate::error::{ReconcileError, ReconcileResult};
use crate::lookup::LookupTable;
use crate::types::{CanonicalPair, Dataset, Record};

/// What to do when a raw code has no entry in its lookup table.
///
/// The policy is an explicit choice: the default fails fast, so a run never
/// produces a partial report from incompletely mapped input. `Sentinel`
/// substitutes a caller-chosen canonical name and proceeds, for callers that
/// prefer unmapped codes to surface in the difference reports as a visible
/// value rather than abort the run.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MissingCodePolicy {
    /// Fail with [`ReconcileError::MissingMapping`] on the first unmapped code.
    #[default]
    Fail,
    /// Substitute this canonical name for any unmapped code and continue.
    Sentinel(String),
}

/// Maps raw records to canonical pairs through two lookup tables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalizer {
    platform_map: LookupTable,
    node_map: LookupTable,
    policy: MissingCodePolicy,
}

impl Normalizer {
    /// Create a normalizer with the default [`MissingCodePolicy::Fail`].
    pub fn new(platform_map: LookupTable, node_map: LookupTable) -> Self {
        Self {
            platform_map,
            node_map,
            policy: MissingCodePolicy::default(),
        }
    }

    /// Replace the missing-code policy.
    pub fn with_policy(mut self, policy: MissingCodePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Normalize one record. `row` is the 1-based row number used in errors.
    pub fn canonicalize(&self, record: &Record, row: usize) -> ReconcileResult<CanonicalPair> {
        let platform = self.resolve(&self.platform_map, "platform", &record.platform_code, row)?;
        let node = self.resolve(&self.node_map, "node", &record.node_code, row)?;
        Ok(CanonicalPair::new(platform, node))
    }

    /// Normalize every row of a dataset, in input order, in one pass.
    ///
    /// Under [`MissingCodePolicy::Fail`] the first unmapped code aborts the
    /// whole pass; no partial output is returned.
    pub fn canonicalize_dataset(&self, dataset: &Dataset) -> ReconcileResult<Vec<CanonicalPair>> {
        dataset
            .records
            .iter()
            .enumerate()
            .map(|(idx, record)| self.canonicalize(record, idx + 1))
            .collect()
    }

    fn resolve(
        &self,
        table: &LookupTable,
        column: &str,
        code: &str,
        row: usize,
    ) -> ReconcileResult<String> {
        match table.get(code) {
            Some(name) => Ok(name.to_owned()),
            None => match &self.policy {
                MissingCodePolicy::Fail => Err(ReconcileError::MissingMapping {
                    column: column.to_owned(),
                    code: code.to_owned(),
                    row,
                }),
                MissingCodePolicy::Sentinel(name) => Ok(name.clone()),
            },
        }
    }
}
