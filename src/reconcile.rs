//! Two-way set difference over canonical pairs.

use std::collections::{BTreeSet, HashSet};

use crate::types::CanonicalPair;

/// Result of reconciling two pair sequences.
///
/// Both sides are deduplicated sets; they are stored as `BTreeSet` so
/// iteration (and therefore rendering) is ordered by platform, then node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Pairs present in the second dataset but absent from the first.
    pub missing_in_first: BTreeSet<CanonicalPair>,
    /// Pairs present in the first dataset but absent from the second.
    pub missing_in_second: BTreeSet<CanonicalPair>,
}

impl Reconciliation {
    /// Returns `true` if the two datasets had identical pair-sets.
    pub fn is_in_sync(&self) -> bool {
        self.missing_in_first.is_empty() && self.missing_in_second.is_empty()
    }
}

/// Compute both set differences between two canonical pair sequences.
///
/// Multiplicity never matters: a pair appearing in both inputs (any number of
/// times) appears in neither difference, and duplicated missing pairs are
/// collapsed.
pub fn reconcile(first: &[CanonicalPair], second: &[CanonicalPair]) -> Reconciliation {
    let first_set: HashSet<&CanonicalPair> = first.iter().collect();
    let second_set: HashSet<&CanonicalPair> = second.iter().collect();

    let missing_in_first = second_set
        .difference(&first_set)
        .map(|&p| p.clone())
        .collect();
    let missing_in_second = first_set
        .difference(&second_set)
        .map(|&p| p.clone())
        .collect();

    Reconciliation {
        missing_in_first,
        missing_in_second,
    }
}
