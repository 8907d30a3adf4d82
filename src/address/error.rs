use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("address '{input}' must have exactly four octets, found {found}")]
    ComponentCount { input: String, found: usize },
    #[error("address '{input}' contains invalid octet '{octet}'")]
    InvalidOctet { input: String, octet: String },
}

pub type AddressResult<T> = Result<T, AddressError>;
