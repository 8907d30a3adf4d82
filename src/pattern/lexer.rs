use super::token::{Token, TokenKind};

/// Scans one octet expression into tokens, one per call.
///
/// Literal spaces before a token are skipped; no other whitespace class
/// is recognized. Once the input is exhausted every further call
/// returns `Eof`.
#[derive(Debug)]
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    pub fn next_token(&mut self) -> Token<'a> {
        self.skip_spaces();

        let Some(&byte) = self.input.as_bytes().get(self.pos) else {
            return Token::eof();
        };

        match byte {
            b'-' => self.single(TokenKind::Dash),
            b'*' => self.single(TokenKind::Asterisk),
            b',' => self.single(TokenKind::Comma),
            b'0'..=b'9' => self.read_number(),
            _ => self.read_illegal(),
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token<'a> {
        let start = self.pos;
        self.pos += 1;
        Token::new(kind, &self.input[start..self.pos])
    }

    fn read_number(&mut self) -> Token<'a> {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_digit() {
            self.pos += 1;
        }
        Token::new(TokenKind::Number, &self.input[start..self.pos])
    }

    fn read_illegal(&mut self) -> Token<'a> {
        let start = self.pos;
        // advance over the whole character, which may be multi-byte
        let width = self.input[start..]
            .chars()
            .next()
            .map_or(1, char::len_utf8);
        self.pos += width;
        Token::new(TokenKind::Illegal, &self.input[start..self.pos])
    }

    fn skip_spaces(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos] == b' ' {
            self.pos += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(input: &str) -> Vec<(TokenKind, String)> {
        let mut lexer = Lexer::new(input);
        let mut out = Vec::new();
        loop {
            let token = lexer.next_token();
            let done = token.kind == TokenKind::Eof;
            out.push((token.kind, token.literal.to_string()));
            if done {
                break;
            }
        }
        out
    }

    #[test]
    fn scans_all_token_kinds() {
        let tokens = collect("1-5,10,*");
        let expected = vec![
            (TokenKind::Number, "1".to_string()),
            (TokenKind::Dash, "-".to_string()),
            (TokenKind::Number, "5".to_string()),
            (TokenKind::Comma, ",".to_string()),
            (TokenKind::Number, "10".to_string()),
            (TokenKind::Comma, ",".to_string()),
            (TokenKind::Asterisk, "*".to_string()),
            (TokenKind::Eof, String::new()),
        ];
        assert_eq!(tokens, expected);
    }

    #[test]
    fn keeps_digit_runs_verbatim() {
        let mut lexer = Lexer::new("007");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.literal, "007");
    }

    #[test]
    fn digit_runs_are_not_range_checked() {
        let mut lexer = Lexer::new("999");
        let token = lexer.next_token();
        assert_eq!(token.kind, TokenKind::Number);
        assert_eq!(token.literal, "999");
    }

    #[test]
    fn skips_literal_spaces_only() {
        let tokens = collect(" 1 , 2 ");
        assert_eq!(
            tokens,
            vec![
                (TokenKind::Number, "1".to_string()),
                (TokenKind::Comma, ",".to_string()),
                (TokenKind::Number, "2".to_string()),
                (TokenKind::Eof, String::new()),
            ]
        );
    }

    #[test]
    fn tabs_are_illegal() {
        let mut lexer = Lexer::new("\t");
        assert_eq!(lexer.next_token().kind, TokenKind::Illegal);
    }

    #[test]
    fn unknown_characters_become_illegal_tokens() {
        let mut lexer = Lexer::new("a.");
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Illegal);
        assert_eq!(first.literal, "a");
        let second = lexer.next_token();
        assert_eq!(second.kind, TokenKind::Illegal);
        assert_eq!(second.literal, ".");
    }

    #[test]
    fn multibyte_characters_do_not_split() {
        let mut lexer = Lexer::new("é1");
        let first = lexer.next_token();
        assert_eq!(first.kind, TokenKind::Illegal);
        assert_eq!(first.literal, "é");
        assert_eq!(lexer.next_token().literal, "1");
    }

    #[test]
    fn eof_is_idempotent() {
        let mut lexer = Lexer::new("5");
        assert_eq!(lexer.next_token().kind, TokenKind::Number);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
        assert_eq!(lexer.next_token().kind, TokenKind::Eof);
    }
}
