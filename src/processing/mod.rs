//! Network extraction and analysis logic.
//!
//! This module contains the pipeline stages, leaves first:
//! - [`extract`] - Candidate token scanning
//! - [`parse`] - Validation into parsed networks
//! - [`sort`] - Canonical ordering
//! - [`overlap`] - Pairwise overlap detection
//! - [`compare`] - Set comparison by literal text

mod compare;
mod extract;
mod overlap;
mod parse;
mod sort;

// Re-export public functions
pub use compare::compare_network_sets;
pub use extract::extract_candidates;
pub use overlap::{
    address_match_in_prefix, find_overlapping_pairs, log_overlapping_pairs, networks_overlap,
};
pub use parse::partition_candidates;
pub use sort::{network_order, sort_networks};
