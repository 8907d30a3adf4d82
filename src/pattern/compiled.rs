use std::fmt;

use serde::{Deserialize, Serialize};

use crate::address::{AddressResult, Ipv4Address, split_dotted};

use super::error::{PatternError, PatternResult};
use super::generator::Addresses;
use super::octet_set::OctetSet;
use super::parser::ExprParser;

/// A compiled four-octet IPv4 pattern.
///
/// Compilation splits the pattern on `.`, runs each component through
/// the octet-expression parser and folds the resulting intervals into a
/// 256-bit membership set per position. The compiled value is immutable
/// and safe to share across threads; matching an address is four bit
/// tests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ipv4Pattern {
    source: String,
    octets: [OctetSet; 4],
}

impl Ipv4Pattern {
    #[tracing::instrument(level = "trace", fields(pattern = %pattern))]
    pub fn compile(pattern: &str) -> PatternResult<Self> {
        let parts = split_dotted(pattern);
        if parts.len() != 4 {
            return Err(PatternError::ComponentCount {
                pattern: pattern.to_string(),
                found: parts.len(),
            });
        }

        let mut octets = [OctetSet::EMPTY; 4];
        for (slot, part) in octets.iter_mut().zip(parts.iter()) {
            let intervals =
                ExprParser::new(part)
                    .parse()
                    .map_err(|source| PatternError::InvalidOctet {
                        octet: part.to_string(),
                        source,
                    })?;
            *slot = OctetSet::from_intervals(&intervals);
        }

        Ok(Self {
            source: pattern.to_string(),
            octets,
        })
    }

    /// The pattern text this value was compiled from.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Tests a literal dotted-decimal address against the pattern.
    pub fn matches(&self, address: &str) -> AddressResult<bool> {
        let address: Ipv4Address = address.parse()?;
        Ok(self.matches_address(address))
    }

    pub fn matches_address(&self, address: Ipv4Address) -> bool {
        self.octets
            .iter()
            .zip(address.octets())
            .all(|(set, octet)| set.contains(octet))
    }

    /// Lazily enumerates every matching address, least significant
    /// octet advancing first.
    pub fn addresses(&self) -> Addresses<'_> {
        Addresses::new(&self.octets)
    }

    /// Total number of addresses the pattern accepts.
    pub fn address_count(&self) -> u64 {
        self.octets
            .iter()
            .map(|set| set.len() as u64)
            .product()
    }
}

impl fmt::Display for Ipv4Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl From<Ipv4Pattern> for String {
    fn from(pattern: Ipv4Pattern) -> Self {
        pattern.source
    }
}

impl TryFrom<String> for Ipv4Pattern {
    type Error = PatternError;

    fn try_from(pattern: String) -> Result<Self, Self::Error> {
        Self::compile(&pattern)
    }
}
