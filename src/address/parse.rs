use std::fmt;
use std::str::FromStr;

use memchr::memchr_iter;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::AddressError;

/// A plain four-byte IPv4 address, most significant octet first.
///
/// Deliberately not `std::net::Ipv4Addr`: the core needs nothing beyond
/// equality, ordering and formatting, so it carries no networking
/// dependency.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Address([u8; 4]);

impl Ipv4Address {
    pub const fn new(octets: [u8; 4]) -> Self {
        Self(octets)
    }

    pub const fn octets(&self) -> [u8; 4] {
        self.0
    }
}

impl fmt::Display for Ipv4Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d] = self.0;
        write!(f, "{a}.{b}.{c}.{d}")
    }
}

impl FromStr for Ipv4Address {
    type Err = AddressError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let parts = split_dotted(input);
        if parts.len() != 4 {
            return Err(AddressError::ComponentCount {
                input: input.to_string(),
                found: parts.len(),
            });
        }

        let mut octets = [0u8; 4];
        for (slot, part) in octets.iter_mut().zip(parts.iter()) {
            *slot = parse_octet(part).ok_or_else(|| AddressError::InvalidOctet {
                input: input.to_string(),
                octet: part.to_string(),
            })?;
        }

        Ok(Self(octets))
    }
}

impl From<Ipv4Address> for String {
    fn from(address: Ipv4Address) -> Self {
        address.to_string()
    }
}

impl TryFrom<String> for Ipv4Address {
    type Error = AddressError;

    fn try_from(input: String) -> Result<Self, Self::Error> {
        input.parse()
    }
}

fn parse_octet(part: &str) -> Option<u8> {
    // reject signs and other non-digit forms u8::from_str would accept
    if part.is_empty() || !part.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

/// Splits a dotted string into its components, empty components
/// included, so callers can reject wrong component counts themselves.
pub(crate) fn split_dotted(input: &str) -> SmallVec<[&str; 4]> {
    let mut parts = SmallVec::new();
    let mut start = 0usize;
    for dot in memchr_iter(b'.', input.as_bytes()) {
        parts.push(&input[start..dot]);
        start = dot + 1;
    }
    parts.push(&input[start..]);
    parts
}
