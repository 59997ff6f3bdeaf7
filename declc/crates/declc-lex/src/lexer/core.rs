//! `Lexer` struct, whitespace skipping, and the `next_token` dispatch.

use declc_util::{Handler, Span, Symbol};

use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

pub struct Lexer<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) handler: &'a mut Handler,
    pub(super) token_start: usize,
    current: Token,
}

impl<'a> Lexer<'a> {
    /// Primes `current` with the first token, mirroring `init_stream`.
    pub fn new(source: &'a str, handler: &'a mut Handler) -> Self {
        let mut lexer = Lexer {
            cursor: Cursor::new(source),
            handler,
            token_start: 0,
            current: Token::eof(0),
        };
        lexer.bump();
        lexer
    }

    pub fn current(&self) -> &Token {
        &self.current
    }

    /// Scans and installs the next token as `current`.
    pub fn bump(&mut self) {
        self.current = self.scan_token();
    }

    pub fn is_token(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    pub fn is_token_char(&self, c: u8) -> bool {
        self.current.kind == TokenKind::from_char(c)
    }

    pub fn is_token_name(&self, name: Symbol) -> bool {
        self.current.kind == TokenKind::IDENT && self.current.name_value() == Some(name)
    }

    /// Advances past `current` if it matches `kind`.
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.is_token(kind) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Like [`Self::match_token`] but fatal on a miss.
    pub fn expect_token(&mut self, kind: TokenKind) {
        if !self.match_token(kind) {
            self.handler.fatal_syntax_error(format!(
                "expected token: {}, got {}",
                kind.name(),
                self.current.kind.name()
            ));
        }
    }

    pub fn is_keyword(&self, name: Symbol) -> bool {
        self.is_token(TokenKind::KEYWORD) && self.current.name_value() == Some(name)
    }

    pub fn match_keyword(&mut self, name: Symbol) -> bool {
        if self.is_keyword(name) {
            self.bump();
            true
        } else {
            false
        }
    }

    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Lets a caller building on top of the token stream (the parser)
    /// report the same kind of unrecoverable error `expect_token` does,
    /// without reaching into `handler` directly.
    pub fn fatal_syntax_error(&self, message: impl std::fmt::Display) -> ! {
        self.handler.fatal_syntax_error(message)
    }

    fn skip_whitespace(&mut self) {
        loop {
            match self.cursor.current() {
                b' ' | b'\t' | b'\n' | b'\r' | 0x0B => self.cursor.advance(),
                _ => break,
            }
        }
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();
        self.token_start = self.cursor.position();

        if self.cursor.is_at_end() {
            return Token::eof(self.token_start);
        }

        match self.cursor.current() {
            b'\'' => self.lex_char(),
            b'"' => self.lex_str(),
            b'.' => self.lex_float(),
            b'0'..=b'9' => self.lex_number(),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => self.lex_identifier(),
            b'<' => self.lex_less(),
            b'>' => self.lex_greater(),
            b':' => self.lex_one(b':', b'=', TokenKind::COLON_ASSIGN),
            b'^' => self.lex_one(b'^', b'=', TokenKind::XOR_ASSIGN),
            b'*' => self.lex_one(b'*', b'=', TokenKind::MUL_ASSIGN),
            b'/' => self.lex_one(b'/', b'=', TokenKind::DIV_ASSIGN),
            b'%' => self.lex_one(b'%', b'=', TokenKind::MOD_ASSIGN),
            b'=' => self.lex_one(b'=', b'=', TokenKind::EQ),
            b'+' => self.lex_two(b'+', b'=', TokenKind::ADD_ASSIGN, b'+', TokenKind::INC),
            b'-' => self.lex_two(b'-', b'=', TokenKind::SUB_ASSIGN, b'-', TokenKind::DEC),
            b'&' => self.lex_two(b'&', b'=', TokenKind::AND_ASSIGN, b'&', TokenKind::AND),
            b'|' => self.lex_two(b'|', b'=', TokenKind::OR_ASSIGN, b'|', TokenKind::OR),
            c => {
                self.cursor.advance();
                Token::punct(self.span(), TokenKind::from_char(c))
            }
        }
    }

    pub(super) fn span(&self) -> Span {
        Span::new(self.token_start, self.cursor.position())
    }

    pub(super) fn report_error(&mut self, message: impl Into<String>) {
        let span = self.span();
        self.handler.syntax_error(message, span);
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.is_token(TokenKind::EOF) {
            None
        } else {
            let token = self.current.clone();
            self.bump();
            Some(token)
        }
    }
}
