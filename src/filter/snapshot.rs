use hashbrown::HashMap as FastHashMap;

use crate::address::{AddressResult, Ipv4Address};
use crate::pattern::Ipv4Pattern;

use super::{RuleId, RuleMatch};

/// Immutable classification snapshot built when a filter is sealed.
///
/// Rules keep their insertion order; classification returns the first
/// rule whose pattern accepts the address. Reads take no locks, so a
/// snapshot can be shared freely across threads.
#[derive(Debug)]
pub struct FilterSnapshot {
    rules: Vec<SealedRule>,
    by_name: FastHashMap<Box<str>, RuleId>,
}

#[derive(Debug)]
struct SealedRule {
    name: Box<str>,
    pattern: Ipv4Pattern,
}

impl FilterSnapshot {
    pub(super) fn from_rules(rules: &[(String, Ipv4Pattern)]) -> Self {
        let mut sealed = Vec::with_capacity(rules.len());
        let mut by_name = FastHashMap::with_capacity(rules.len());
        for (id, (name, pattern)) in rules.iter().enumerate() {
            let name: Box<str> = name.as_str().into();
            by_name.insert(name.clone(), id as RuleId);
            sealed.push(SealedRule {
                name,
                pattern: pattern.clone(),
            });
        }
        Self {
            rules: sealed,
            by_name,
        }
    }

    /// First rule matching `address`, in insertion order.
    #[tracing::instrument(level = "trace", skip(self), fields(address = %address))]
    pub fn classify(&self, address: Ipv4Address) -> Option<RuleMatch> {
        self.rules
            .iter()
            .enumerate()
            .find(|(_, rule)| rule.pattern.matches_address(address))
            .map(|(id, rule)| (id as RuleId, rule.name.to_string()))
    }

    pub fn classify_str(&self, address: &str) -> AddressResult<Option<RuleMatch>> {
        let address: Ipv4Address = address.parse()?;
        Ok(self.classify(address))
    }

    pub fn rule_id(&self, name: &str) -> Option<RuleId> {
        self.by_name.get(name).copied()
    }

    pub fn pattern(&self, id: RuleId) -> Option<&Ipv4Pattern> {
        self.rules.get(id as usize).map(|rule| &rule.pattern)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}
