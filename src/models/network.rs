//! Parsed IPv4 network records.
//!
//! Provides [`ParsedNetwork`] along with a self-contained dotted-quad parser.
//! Only IPv4 is modelled: the address is always exactly four bytes.

use crate::error::MalformedToken;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::net::Ipv4Addr;

/// Maximum prefix length for an IPv4 network (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Number of bytes in an IPv4 address.
pub const ADDRESS_BYTES: usize = 4;

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths above [`MAX_LENGTH`] are clamped.
///
/// # Examples
/// ```
/// use ip_overlap_check::models::cidr_mask;
/// assert_eq!(cidr_mask(24), 0xFFFFFF00);
/// assert_eq!(cidr_mask(0), 0);
/// ```
pub fn cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Parse a dotted-quad IPv4 address into its four bytes.
///
/// Every octet must be 1-3 decimal digits with a value in `0..=255`.
/// Leading zeros are read as decimal (`010` is 10).
pub fn parse_dotted_quad(addr: &str) -> Result<[u8; ADDRESS_BYTES], MalformedToken> {
    let parts: Vec<&str> = addr.split('.').collect();
    if parts.len() != ADDRESS_BYTES {
        return Err(MalformedToken::Address(addr.to_string()));
    }

    let mut bytes = [0u8; ADDRESS_BYTES];
    for (byte, part) in bytes.iter_mut().zip(parts) {
        *byte = parse_decimal(part, 3)
            .and_then(|value| u8::try_from(value).ok())
            .ok_or_else(|| MalformedToken::Octet {
                address: addr.to_string(),
                octet: part.to_string(),
            })?;
    }
    Ok(bytes)
}

/// Parse an unsigned base-10 integer of at most `max_digits` ASCII digits.
fn parse_decimal(s: &str, max_digits: usize) -> Option<u32> {
    if s.is_empty() || s.len() > max_digits || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// An IPv4 address or CIDR block accepted from the input text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParsedNetwork {
    /// The token exactly as it appeared in the input.
    pub original: String,
    /// Address bytes in network (big-endian) order. Host bits are not masked.
    pub address: [u8; ADDRESS_BYTES],
    /// Prefix length (0-32). Bare addresses get 32.
    pub prefix_length: u8,
    /// True if the token was written with a `/prefix`.
    pub is_cidr: bool,
}

impl ParsedNetwork {
    /// Parse a token such as `10.0.0.0/24` or `192.168.1.7`.
    pub fn parse(token: &str) -> Result<ParsedNetwork, MalformedToken> {
        match token.split_once('/') {
            Some((addr, prefix)) => {
                let address = parse_dotted_quad(addr)?;
                let prefix_length = parse_decimal(prefix, 10)
                    .ok_or_else(|| MalformedToken::Prefix(prefix.to_string()))?;
                if prefix_length > MAX_LENGTH as u32 {
                    return Err(MalformedToken::PrefixOutOfRange(prefix_length));
                }
                Ok(ParsedNetwork {
                    original: token.to_string(),
                    address,
                    prefix_length: prefix_length as u8,
                    is_cidr: true,
                })
            }
            None => Ok(ParsedNetwork {
                original: token.to_string(),
                address: parse_dotted_quad(token)?,
                prefix_length: MAX_LENGTH,
                is_cidr: false,
            }),
        }
    }

    /// The address as a std [`Ipv4Addr`].
    pub fn to_ipv4_addr(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.address)
    }

    /// The address with host bits cleared, as u32.
    pub fn network_bits(&self) -> u32 {
        u32::from_be_bytes(self.address) & cidr_mask(self.prefix_length)
    }

    /// Check whether this network and `other` share any address.
    pub fn overlaps(&self, other: &ParsedNetwork) -> bool {
        crate::processing::networks_overlap(self, other)
    }
}

impl fmt::Display for ParsedNetwork {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.original)
    }
}

impl Serialize for ParsedNetwork {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ParsedNetwork", 4)?;
        state.serialize_field("original", &self.original)?;
        state.serialize_field("address", &self.to_ipv4_addr().to_string())?;
        state.serialize_field("prefixLength", &self.prefix_length)?;
        state.serialize_field("isCidr", &self.is_cidr)?;
        state.end()
    }
}
