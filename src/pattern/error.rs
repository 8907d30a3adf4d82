use thiserror::Error;

use super::token::TokenKind;

/// Syntax errors raised while parsing a single octet expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExprError {
    #[error("expected {expected} token, found {found}")]
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    #[error("numeric value '{literal}' is not a valid octet")]
    InvalidNumber { literal: String },
    #[error("octet expression must contain at least one range")]
    EmptyExpression,
}

/// Errors raised while compiling a full four-octet pattern.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatternError {
    #[error("pattern '{pattern}' must have exactly four octet components, found {found}")]
    ComponentCount { pattern: String, found: usize },
    #[error("invalid octet expression '{octet}': {source}")]
    InvalidOctet {
        octet: String,
        #[source]
        source: ExprError,
    },
}

pub type ExprResult<T> = Result<T, ExprError>;
pub type PatternResult<T> = Result<T, PatternError>;
