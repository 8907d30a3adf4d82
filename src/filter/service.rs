use std::sync::{Arc, OnceLock};

use hashbrown::HashMap as FastHashMap;
use parking_lot::RwLock;

use crate::pattern::Ipv4Pattern;

use super::errors::{FilterError, FilterResult};
use super::snapshot::FilterSnapshot;
use super::{RuleId, RuleMatch};

#[derive(Debug, Default)]
struct FilterState {
    rules: Vec<(String, Ipv4Pattern)>,
    names: FastHashMap<Box<str>, RuleId>,
    readonly: OnceLock<Arc<FilterSnapshot>>,
}

/// Named-rule address classifier with a build-then-seal lifecycle.
///
/// Rules are added while the filter is mutable; `seal` freezes them
/// into an immutable [`FilterSnapshot`]. Classification is only
/// available after sealing, and additions are rejected from then on.
#[derive(Debug, Default)]
pub struct AddressFilter {
    inner: RwLock<FilterState>,
}

impl AddressFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&self, name: &str, pattern: &str) -> FilterResult<RuleId> {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            return Err(FilterError::AddWhileSealed {
                name: name.to_string(),
            });
        }

        add_rule(&mut guard, name, pattern)
    }

    pub fn add_bulk<I>(&self, entries: I) -> FilterResult<Vec<RuleId>>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut guard = self.inner.write();

        if guard.readonly.get().is_some() {
            let entries: Vec<(String, String)> = entries.into_iter().collect();
            return Err(FilterError::BulkAddWhileSealed {
                count: entries.len(),
            });
        }

        entries
            .into_iter()
            .map(|(name, pattern)| add_rule(&mut guard, &name, &pattern))
            .collect()
    }

    pub fn seal(&self) {
        let mut guard = self.inner.write();

        let snapshot = FilterSnapshot::from_rules(&guard.rules);
        guard.rules = Vec::new();
        guard.names = FastHashMap::new();
        let _ = guard.readonly.set(Arc::new(snapshot));
    }

    pub fn classify(&self, address: &str) -> FilterResult<Option<RuleMatch>> {
        let guard = self.inner.read();

        match guard.readonly.get() {
            Some(snapshot) => Ok(snapshot.classify_str(address)?),
            None => Err(FilterError::ClassifyWhileMutable),
        }
    }

    pub fn snapshot(&self) -> FilterResult<Arc<FilterSnapshot>> {
        let guard = self.inner.read();

        guard
            .readonly
            .get()
            .cloned()
            .ok_or(FilterError::SnapshotUnavailable)
    }
}

fn add_rule(state: &mut FilterState, name: &str, pattern: &str) -> FilterResult<RuleId> {
    if state.names.contains_key(name) {
        return Err(FilterError::DuplicateRule {
            name: name.to_string(),
        });
    }

    let compiled = Ipv4Pattern::compile(pattern)?;
    let id = RuleId::try_from(state.rules.len()).map_err(|_| FilterError::CapacityExhausted)?;
    state.names.insert(name.into(), id);
    state.rules.push((name.to_string(), compiled));
    Ok(id)
}
