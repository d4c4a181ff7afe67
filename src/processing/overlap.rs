//! Overlapping network detection.
//!
//! Finds every pair of parsed networks whose address ranges intersect.
//! The scan is an exhaustive `O(n²)` pass over the sorted list. Inputs are
//! pasted by hand and stay in the hundreds, so this is the accepted ceiling;
//! an interval index would only pay off for machine-sized inventories.

use crate::models::{OverlapPair, ParsedNetwork};

/// Check whether two addresses agree on their first `prefix_length` bits.
///
/// Whole bytes are compared for equality, then the one partial byte (if any)
/// is compared under a mask keeping only its leading bits.
pub fn address_match_in_prefix(addr1: &[u8], addr2: &[u8], prefix_length: u8) -> bool {
    let full_bytes = (prefix_length / 8) as usize;
    let remaining_bits = prefix_length % 8;

    if addr1.len() < full_bytes || addr2.len() < full_bytes {
        return false;
    }
    if addr1[..full_bytes] != addr2[..full_bytes] {
        return false;
    }

    if remaining_bits > 0 && full_bytes < addr1.len() && full_bytes < addr2.len() {
        let mask = (0xFFu16 << (8 - remaining_bits)) as u8;
        if addr1[full_bytes] & mask != addr2[full_bytes] & mask {
            return false;
        }
    }

    true
}

/// Check whether two networks overlap.
///
/// They overlap when the more specific one falls inside the less specific
/// one, i.e. when both addresses match on the shorter of the two prefixes.
/// A `/0` network overlaps everything.
pub fn networks_overlap(a: &ParsedNetwork, b: &ParsedNetwork) -> bool {
    let common_prefix = a.prefix_length.min(b.prefix_length);
    address_match_in_prefix(&a.address, &b.address, common_prefix)
}

/// Find all overlapping pairs in `networks`.
///
/// Pairs are reported as `(networks[i], networks[j])` with `i < j`, in scan
/// order: `i` ascending, then `j` ascending.
pub fn find_overlapping_pairs(networks: &[ParsedNetwork]) -> Vec<OverlapPair> {
    let mut pairs = Vec::new();

    for (i, a) in networks.iter().enumerate() {
        for b in &networks[i + 1..] {
            if networks_overlap(a, b) {
                pairs.push((a.original.clone(), b.original.clone()));
            }
        }
    }

    log::debug!(
        "find_overlapping_pairs() checked {} networks, {} overlaps",
        networks.len(),
        pairs.len()
    );
    pairs
}

/// Log overlapping pairs as warnings.
pub fn log_overlapping_pairs(pairs: &[OverlapPair]) {
    if pairs.is_empty() {
        log::info!("No overlapping networks found.");
        return;
    }

    log::warn!("Found {} overlapping network pair(s):", pairs.len());
    for (first, second) in pairs {
        log::warn!("  {first} overlaps {second}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::sort_networks;

    fn net(token: &str) -> ParsedNetwork {
        ParsedNetwork::parse(token).unwrap()
    }

    #[test]
    fn test_address_match_full_bytes() {
        assert!(address_match_in_prefix(&[10, 1, 2, 3], &[10, 1, 9, 9], 16));
        assert!(!address_match_in_prefix(&[10, 1, 2, 3], &[10, 2, 2, 3], 16));
        assert!(address_match_in_prefix(&[10, 1, 2, 3], &[10, 1, 2, 3], 32));
        assert!(!address_match_in_prefix(&[10, 1, 2, 3], &[10, 1, 2, 4], 32));
    }

    #[test]
    fn test_address_match_partial_byte() {
        // /20: third octet compared on its top 4 bits
        assert!(address_match_in_prefix(&[10, 0, 16, 0], &[10, 0, 31, 255], 20));
        assert!(!address_match_in_prefix(&[10, 0, 16, 0], &[10, 0, 32, 0], 20));
        // /1: only the top bit of the first octet
        assert!(address_match_in_prefix(&[0, 0, 0, 0], &[127, 255, 255, 255], 1));
        assert!(!address_match_in_prefix(&[0, 0, 0, 0], &[128, 0, 0, 0], 1));
    }

    #[test]
    fn test_prefix_zero_matches_everything() {
        let any = net("10.0.0.0/0");
        assert!(networks_overlap(&any, &net("10.0.0.0/32")));
        assert!(networks_overlap(&any, &net("255.255.255.255")));
        assert!(networks_overlap(&any, &net("0.0.0.0/0")));
    }

    #[test]
    fn test_overlap_subnet_and_supernet() {
        assert!(networks_overlap(&net("10.0.0.0/24"), &net("10.0.0.5")));
        assert!(networks_overlap(&net("10.0.0.0/8"), &net("10.200.0.0/16")));
        assert!(!networks_overlap(&net("10.0.0.0/24"), &net("10.0.1.0/24")));
        assert!(!networks_overlap(&net("192.168.0.0/25"), &net("192.168.0.128/25")));
    }

    #[test]
    fn test_overlap_same_address_longer_prefix() {
        let base = net("172.16.4.0/22");
        for len in 22..=32 {
            let other = net(&format!("172.16.4.0/{len}"));
            assert!(networks_overlap(&base, &other), "/22 vs /{len}");
        }
    }

    #[test]
    fn test_overlap_host_bits_unmasked() {
        // Host bits beyond the shorter prefix are ignored.
        assert!(networks_overlap(&net("10.0.0.77/24"), &net("10.0.0.200/30")));
    }

    #[test]
    fn test_overlap_symmetric() {
        let tokens = [
            "0.0.0.0/0",
            "10.0.0.0/8",
            "10.0.0.0/24",
            "10.0.1.0/24",
            "10.0.0.5",
            "10.0.0.128/25",
            "192.168.1.1/31",
            "192.168.1.0",
            "128.0.0.0/1",
        ];
        for a in tokens.iter().map(|t| net(t)) {
            for b in tokens.iter().map(|t| net(t)) {
                assert_eq!(networks_overlap(&a, &b), networks_overlap(&b, &a), "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_overlap_matches_mask_arithmetic() {
        let tokens = [
            "10.0.0.0/8",
            "10.0.0.0/13",
            "10.7.255.0/24",
            "10.8.0.0/13",
            "10.0.0.1",
            "11.0.0.0/7",
            "0.0.0.0/0",
        ];
        for a in tokens.iter().map(|t| net(t)) {
            for b in tokens.iter().map(|t| net(t)) {
                let common = a.prefix_length.min(b.prefix_length);
                let mask = crate::models::cidr_mask(common);
                let expected = u32::from_be_bytes(a.address) & mask
                    == u32::from_be_bytes(b.address) & mask;
                assert_eq!(networks_overlap(&a, &b), expected, "{a} / {b}");
            }
        }
    }

    #[test]
    fn test_find_overlapping_pairs_scan_order() {
        let mut networks = vec![
            net("10.0.0.5"),
            net("192.168.0.0/16"),
            net("10.0.0.0/24"),
            net("10.0.0.0/8"),
            net("192.168.10.0/24"),
        ];
        sort_networks(&mut networks);
        let pairs = find_overlapping_pairs(&networks);
        let expected: Vec<OverlapPair> = vec![
            ("10.0.0.0/8".into(), "10.0.0.0/24".into()),
            ("10.0.0.0/8".into(), "10.0.0.5".into()),
            ("10.0.0.0/24".into(), "10.0.0.5".into()),
            ("192.168.0.0/16".into(), "192.168.10.0/24".into()),
        ];
        assert_eq!(pairs, expected);
    }

    #[test]
    fn test_find_overlapping_pairs_small_inputs() {
        assert!(find_overlapping_pairs(&[]).is_empty());
        assert!(find_overlapping_pairs(&[net("10.0.0.0/8")]).is_empty());
    }

    #[test]
    fn test_duplicates_overlap() {
        let pairs = find_overlapping_pairs(&[net("1.2.3.4"), net("1.2.3.4")]);
        assert_eq!(pairs, vec![("1.2.3.4".to_string(), "1.2.3.4".to_string())]);
    }
}
