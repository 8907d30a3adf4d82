mod errors;
mod service;
mod snapshot;

pub use errors::{FilterError, FilterResult};
pub use service::AddressFilter;
pub use snapshot::FilterSnapshot;

pub type RuleId = u16;

/// A classification hit: the matching rule's id and name.
pub type RuleMatch = (RuleId, String);
