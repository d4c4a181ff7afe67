//! Result records returned by the public entry points.

use super::ParsedNetwork;
use serde::Serialize;

/// Two overlapping networks, by their original text, in sorted order.
pub type OverlapPair = (String, String);

/// Outcome of scanning one block of text.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CheckResult {
    /// Accepted networks, sorted by address bytes then prefix length.
    pub valid_networks: Vec<ParsedNetwork>,
    /// Candidate tokens that failed validation, in input order.
    pub invalid_strings: Vec<String>,
    /// Every overlapping pair from the sorted list.
    pub overlapping_pairs: Vec<OverlapPair>,
}

/// Set comparison of two network lists by literal token text.
#[derive(Serialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub identical: bool,
    pub common: Vec<String>,
    pub only_in_first: Vec<String>,
    pub only_in_second: Vec<String>,
    /// Length of the first input list, duplicates included.
    pub total_first: usize,
    /// Length of the second input list, duplicates included.
    pub total_second: usize,
}

/// Anything that carries the original token text of a network.
pub trait NetworkLiteral {
    fn original(&self) -> &str;
}

impl NetworkLiteral for ParsedNetwork {
    fn original(&self) -> &str {
        &self.original
    }
}

impl NetworkLiteral for String {
    fn original(&self) -> &str {
        self
    }
}

impl NetworkLiteral for &str {
    fn original(&self) -> &str {
        self
    }
}
