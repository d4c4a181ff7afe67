//! Set comparison of two network lists.
//!
//! Networks are identified by their literal token text only. `10.0.0.0/24`
//! and `10.0.0.7/24` cover the same range but count as different entries.

use crate::models::{ComparisonResult, NetworkLiteral};
use std::collections::BTreeSet;

/// Compare two network lists by their original strings.
///
/// The input lists are neither de-duplicated nor re-validated: `total_first`
/// and `total_second` are the raw list lengths, while the derived sets are
/// built from distinct strings.
pub fn compare_network_sets<A, B>(first: &[A], second: &[B]) -> ComparisonResult
where
    A: NetworkLiteral,
    B: NetworkLiteral,
{
    let set1: BTreeSet<&str> = first.iter().map(|n| n.original()).collect();
    let set2: BTreeSet<&str> = second.iter().map(|n| n.original()).collect();

    // BTreeSet iteration is already in lexicographic order.
    let common: Vec<String> = set1.intersection(&set2).map(|s| s.to_string()).collect();
    let only_in_first: Vec<String> = set1.difference(&set2).map(|s| s.to_string()).collect();
    let only_in_second: Vec<String> = set2.difference(&set1).map(|s| s.to_string()).collect();

    log::debug!(
        "compare_network_sets() common={} only_first={} only_second={}",
        common.len(),
        only_in_first.len(),
        only_in_second.len()
    );

    ComparisonResult {
        identical: set1.len() == set2.len() && common.len() == set1.len(),
        common,
        only_in_first,
        only_in_second,
        total_first: first.len(),
        total_second: second.len(),
    }
}
