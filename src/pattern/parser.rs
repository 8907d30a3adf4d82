use smallvec::SmallVec;

use super::error::{ExprError, ExprResult};
use super::lexer::Lexer;
use super::token::{Token, TokenKind};

/// An inclusive range of byte values produced by one expression term.
///
/// `low > high` is legal and denotes a range with no members; the octet
/// set builder simply sets no bits for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub low: u8,
    pub high: u8,
}

impl Interval {
    /// The wildcard sentinel covering every byte value.
    pub const FULL: Interval = Interval { low: 0, high: 255 };

    pub const fn new(low: u8, high: u8) -> Self {
        Self { low, high }
    }

    pub const fn single(value: u8) -> Self {
        Self {
            low: value,
            high: value,
        }
    }

    pub const fn is_full(&self) -> bool {
        self.low == 0 && self.high == 255
    }
}

pub type IntervalList = SmallVec<[Interval; 4]>;

/// Recursive-descent parser for one octet expression.
///
/// Grammar:
///
/// ```text
/// expr := term (',' term)*
/// term := '*' | NUMBER | NUMBER '-' NUMBER
/// ```
///
/// The parser keeps two lookahead tokens (`curr`, `peek`) and aborts on
/// the first failure. Every failure is pushed onto an accumulating
/// diagnostic list; the returned `Err` is the final failure state and
/// the full list stays available through [`ExprParser::diagnostics`].
/// One parser instance serves exactly one parse.
#[derive(Debug)]
pub struct ExprParser<'a> {
    lexer: Lexer<'a>,
    curr: Token<'a>,
    peek: Token<'a>,
    diagnostics: Vec<ExprError>,
}

impl<'a> ExprParser<'a> {
    pub fn new(input: &'a str) -> Self {
        let mut lexer = Lexer::new(input);
        let curr = lexer.next_token();
        let peek = lexer.next_token();
        Self {
            lexer,
            curr,
            peek,
            diagnostics: Vec::new(),
        }
    }

    pub fn diagnostics(&self) -> &[ExprError] {
        &self.diagnostics
    }

    pub fn parse(&mut self) -> ExprResult<IntervalList> {
        let intervals = self.parse_expr()?;
        if intervals.is_empty() {
            let err = ExprError::EmptyExpression;
            self.diagnostics.push(err.clone());
            return Err(err);
        }
        Ok(intervals)
    }

    fn parse_expr(&mut self) -> ExprResult<IntervalList> {
        let mut intervals = IntervalList::new();
        while self.curr.kind != TokenKind::Eof {
            intervals.push(self.parse_term()?);
            if self.peek.kind != TokenKind::Eof {
                self.expect_curr(TokenKind::Comma)?;
            }
        }
        Ok(intervals)
    }

    fn parse_term(&mut self) -> ExprResult<Interval> {
        if self.curr.kind == TokenKind::Asterisk {
            self.advance();
            return Ok(Interval::FULL);
        }

        let Some(low) = self.parse_number() else {
            return Err(self.invalid_number());
        };

        if self.curr.kind != TokenKind::Dash {
            return Ok(Interval::single(low));
        }

        self.advance();
        let Some(high) = self.parse_number() else {
            return Err(self.invalid_number());
        };

        // start > end is allowed; it compiles to an empty range
        Ok(Interval::new(low, high))
    }

    /// Reads the current token as a numeric octet value.
    ///
    /// Returns `None` without consuming on failure so the caller can
    /// report the offending literal; a wrong token kind additionally
    /// records an `UnexpectedToken` diagnostic.
    fn parse_number(&mut self) -> Option<u8> {
        if self.curr.kind != TokenKind::Number {
            self.unexpected(TokenKind::Number);
            return None;
        }

        let value = self.curr.literal.parse::<u8>().ok()?;
        self.advance();
        Some(value)
    }

    fn expect_curr(&mut self, expected: TokenKind) -> ExprResult<()> {
        if self.curr.kind != expected {
            return Err(self.unexpected(expected));
        }
        self.advance();
        Ok(())
    }

    fn unexpected(&mut self, expected: TokenKind) -> ExprError {
        let err = ExprError::UnexpectedToken {
            expected,
            found: self.curr.kind,
        };
        self.diagnostics.push(err.clone());
        err
    }

    fn invalid_number(&mut self) -> ExprError {
        let err = ExprError::InvalidNumber {
            literal: self.curr.literal.to_string(),
        };
        self.diagnostics.push(err.clone());
        err
    }

    fn advance(&mut self) {
        self.curr = self.peek;
        self.peek = self.lexer.next_token();
    }
}
