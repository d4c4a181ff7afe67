//! Error types for token parsing.

use thiserror::Error;

/// Why a candidate token could not be turned into a [`crate::models::ParsedNetwork`].
///
/// Never escapes the public entry points: a rejected token is routed into
/// `invalid_strings` and scanning carries on.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedToken {
    #[error("Invalid address: {0}")]
    Address(String),

    #[error("Invalid octet '{octet}' in address {address}")]
    Octet { address: String, octet: String },

    #[error("Invalid prefix length: {0}")]
    Prefix(String),

    #[error("Prefix length {0} is out of range (0-32)")]
    PrefixOutOfRange(u32),
}
