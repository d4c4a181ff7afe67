//! Extract IPv4 addresses and CIDR blocks from free text, find overlapping
//! networks and compare two network lists.
//!
//! Both entry points are pure and infallible: malformed tokens end up in
//! [`CheckResult::invalid_strings`] instead of aborting the scan. IPv6 is not
//! supported; only dotted-quad shapes are extracted.

pub mod cli;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

pub use error::MalformedToken;
pub use models::{CheckResult, ComparisonResult, NetworkLiteral, OverlapPair, ParsedNetwork};

/// Scan `text` for IPv4 addresses/CIDRs, validate and sort them, and report
/// every overlapping pair.
///
/// # Examples
/// ```
/// let result = ip_overlap_check::extract_and_check_ips("10.0.0.0/24, 10.0.0.5, 999.1.1.1");
/// assert_eq!(result.valid_networks.len(), 2);
/// assert_eq!(result.invalid_strings, vec!["999.1.1.1"]);
/// assert_eq!(result.overlapping_pairs.len(), 1);
/// ```
pub fn extract_and_check_ips(text: &str) -> CheckResult {
    let candidates = processing::extract_candidates(text);
    if candidates.is_empty() {
        return CheckResult::default();
    }

    let (mut valid_networks, invalid_strings) = processing::partition_candidates(&candidates);
    processing::sort_networks(&mut valid_networks);
    let overlapping_pairs = processing::find_overlapping_pairs(&valid_networks);

    CheckResult {
        valid_networks,
        invalid_strings,
        overlapping_pairs,
    }
}

/// Compare two already parsed network lists by their original token text.
pub fn compare_ip_sets<A, B>(first: &[A], second: &[B]) -> ComparisonResult
where
    A: NetworkLiteral,
    B: NetworkLiteral,
{
    processing::compare_network_sets(first, second)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_and_check_scenario() {
        let result = extract_and_check_ips("10.0.0.0/24, 10.0.0.5, 999.1.1.1");
        let originals: Vec<&str> = result
            .valid_networks
            .iter()
            .map(|n| n.original.as_str())
            .collect();
        assert_eq!(originals, vec!["10.0.0.0/24", "10.0.0.5"]);
        assert_eq!(result.valid_networks[1].prefix_length, 32);
        assert_eq!(result.invalid_strings, vec!["999.1.1.1"]);
        assert_eq!(
            result.overlapping_pairs,
            vec![("10.0.0.0/24".to_string(), "10.0.0.5".to_string())]
        );
    }

    #[test]
    fn test_extract_and_check_empty() {
        assert_eq!(extract_and_check_ips(""), CheckResult::default());
        assert_eq!(extract_and_check_ips("   \n  "), CheckResult::default());
    }

    #[test]
    fn test_prefix_zero_and_out_of_range() {
        let result = extract_and_check_ips("10.0.0.0/0 10.0.0.0/32 10.0.0.0/33");
        assert_eq!(result.invalid_strings, vec!["10.0.0.0/33"]);
        assert_eq!(
            result.overlapping_pairs,
            vec![("10.0.0.0/0".to_string(), "10.0.0.0/32".to_string())]
        );
    }

    #[test]
    fn test_compare_ip_sets_scenario() {
        let first = extract_and_check_ips("10.0.0.0/24").valid_networks;
        let second = extract_and_check_ips("10.0.0.0/24 10.0.1.0/24").valid_networks;
        let result = compare_ip_sets(&first, &second);
        assert_eq!(result.common, vec!["10.0.0.0/24"]);
        assert!(result.only_in_first.is_empty());
        assert_eq!(result.only_in_second, vec!["10.0.1.0/24"]);
        assert!(!result.identical);
    }
}
