//! Canonical ordering of parsed networks.

use crate::models::ParsedNetwork;
use std::cmp::Ordering;

/// Order by address bytes (big-endian), then by prefix length.
///
/// A network sorts directly before its more specific subnets.
pub fn network_order(a: &ParsedNetwork, b: &ParsedNetwork) -> Ordering {
    a.address
        .cmp(&b.address)
        .then_with(|| a.prefix_length.cmp(&b.prefix_length))
}

/// Sort networks in place. Stable, so full ties keep their input order.
pub fn sort_networks(networks: &mut [ParsedNetwork]) {
    networks.sort_by(network_order);
}
