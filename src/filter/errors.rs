use thiserror::Error;

use crate::address::AddressError;
use crate::pattern::PatternError;

#[derive(Debug, Error)]
pub enum FilterError {
    #[error("filter is sealed; cannot add rule '{name}'")]
    AddWhileSealed { name: String },
    #[error("filter is sealed; cannot add {count} rules in bulk")]
    BulkAddWhileSealed { count: usize },
    #[error("filter already contains a rule named '{name}'")]
    DuplicateRule { name: String },
    #[error("filter holds the maximum number of rules")]
    CapacityExhausted,
    #[error("filter is not sealed; cannot classify addresses")]
    ClassifyWhileMutable,
    #[error("filter is not sealed; readonly snapshot is unavailable")]
    SnapshotUnavailable,
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Address(#[from] AddressError),
}

pub type FilterResult<T> = Result<T, FilterError>;
