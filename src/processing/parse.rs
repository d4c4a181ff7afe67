//! Validation of candidate tokens into parsed networks.

use crate::models::ParsedNetwork;

/// Split candidate tokens into parsed networks and rejected tokens.
///
/// Both outputs keep the input order. A rejected token never stops the scan.
pub fn partition_candidates(candidates: &[&str]) -> (Vec<ParsedNetwork>, Vec<String>) {
    let mut valid = Vec::new();
    let mut invalid = Vec::new();

    for candidate in candidates {
        match ParsedNetwork::parse(candidate) {
            Ok(network) => valid.push(network),
            Err(e) => {
                log::trace!("Rejected token {candidate}: {e}");
                invalid.push(candidate.to_string());
            }
        }
    }

    log::debug!(
        "partition_candidates() valid={} invalid={}",
        valid.len(),
        invalid.len()
    );
    (valid, invalid)
}
