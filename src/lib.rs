mod address;
mod filter;
mod pattern;

pub use address::{AddressError, AddressResult, Ipv4Address};
pub use filter::{AddressFilter, FilterError, FilterResult, FilterSnapshot, RuleId, RuleMatch};
pub use pattern::{
    Addresses, ExprError, ExprParser, ExprResult, Interval, IntervalList, Ipv4Pattern, Lexer,
    OctetSet, PatternError, PatternResult, Token, TokenKind,
};
