//! Domain models for the IP overlap checker.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`ParsedNetwork`] - a validated IPv4 address or CIDR block
//! - [`CheckResult`] and [`ComparisonResult`] - entry point results
//! - [`NetworkLiteral`] - anything exposing an original token string

mod network;
mod report;

// Re-export public types
pub use network::{cidr_mask, parse_dotted_quad, ParsedNetwork, ADDRESS_BYTES, MAX_LENGTH};
pub use report::{CheckResult, ComparisonResult, NetworkLiteral, OverlapPair};
