//! Candidate token extraction from free-form text.

use regex::Regex;
use std::sync::OnceLock;

/// Regex for dotted-quad shapes with an optional `/prefix`.
///
/// No range checking happens here: `999.999.999.999` is still a candidate.
static CANDIDATE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_candidate_regex() -> &'static Regex {
    CANDIDATE_REGEX.get_or_init(|| {
        // ASCII word boundaries: an address glued to non-ASCII text is still found.
        Regex::new(
            r"(?-u:\b)[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}\.[0-9]{1,3}(?:/[0-9]{1,2})?(?-u:\b)",
        )
        .expect("Invalid Regex")
    })
}

/// Scan `text` for IPv4 address and CIDR candidates, in order of appearance.
///
/// Empty or whitespace-only text yields no candidates.
pub fn extract_candidates(text: &str) -> Vec<&str> {
    if text.trim().is_empty() {
        return Vec::new();
    }
    let candidates: Vec<&str> = get_candidate_regex()
        .find_iter(text)
        .map(|m| m.as_str())
        .collect();
    log::debug!("extract_candidates() found {} candidates", candidates.len());
    candidates
}
