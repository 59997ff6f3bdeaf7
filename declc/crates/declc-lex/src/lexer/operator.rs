//! Punctuation and compound-assignment disambiguation.
//!
//! Two shapes cover every multi-character operator: a single optional
//! `=`-suffix (`lex_one`, mirroring the original `CASE1` macro) and an
//! `=`-suffix with a doubled-character alternative (`lex_two`, mirroring
//! `CASE2`). `<` and `>` get their own methods since each carries a third,
//! shifted form (`<<`, `<<=`) on top of the doubled and `=`-suffixed ones.

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// `c0` alone, or `c0 c1` as `compound`.
    pub(super) fn lex_one(&mut self, c0: u8, c1: u8, compound: TokenKind) -> Token {
        debug_assert_eq!(self.cursor.current(), c0);
        self.cursor.advance();
        let kind = if self.cursor.current() == c1 {
            self.cursor.advance();
            compound
        } else {
            TokenKind::from_char(c0)
        };
        Token::punct(self.span(), kind)
    }

    /// `c0` alone, `c0 c1` as `assign`, or `c0 c2` as `doubled`.
    pub(super) fn lex_two(
        &mut self,
        c0: u8,
        c1: u8,
        assign: TokenKind,
        c2: u8,
        doubled: TokenKind,
    ) -> Token {
        debug_assert_eq!(self.cursor.current(), c0);
        self.cursor.advance();
        let kind = if self.cursor.current() == c1 {
            self.cursor.advance();
            assign
        } else if self.cursor.current() == c2 {
            self.cursor.advance();
            doubled
        } else {
            TokenKind::from_char(c0)
        };
        Token::punct(self.span(), kind)
    }

    /// `<`, `<=`, `<<`, `<<=`.
    pub(super) fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.current() == b'<' {
            self.cursor.advance();
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                TokenKind::LSHIFT_ASSIGN
            } else {
                TokenKind::LSHIFT
            }
        } else if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::LTEQ
        } else {
            TokenKind::from_char(b'<')
        };
        Token::punct(self.span(), kind)
    }

    /// `>`, `>=`, `>>`, `>>=`.
    pub(super) fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        let kind = if self.cursor.current() == b'>' {
            self.cursor.advance();
            if self.cursor.current() == b'=' {
                self.cursor.advance();
                TokenKind::RSHIFT_ASSIGN
            } else {
                TokenKind::RSHIFT
            }
        } else if self.cursor.current() == b'=' {
            self.cursor.advance();
            TokenKind::GTEQ
        } else {
            TokenKind::from_char(b'>')
        };
        Token::punct(self.span(), kind)
    }
}

#[cfg(test)]
mod tests {
    use declc_util::Handler;

    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        Lexer::new(src, &mut handler).map(|t| t.kind).collect()
    }

    #[test]
    fn colon_and_colon_assign() {
        assert_eq!(kinds(":"), vec![TokenKind::from_char(b':')]);
        assert_eq!(kinds(":="), vec![TokenKind::COLON_ASSIGN]);
    }

    #[test]
    fn plus_family() {
        assert_eq!(kinds("+"), vec![TokenKind::from_char(b'+')]);
        assert_eq!(kinds("+="), vec![TokenKind::ADD_ASSIGN]);
        assert_eq!(kinds("++"), vec![TokenKind::INC]);
    }

    #[test]
    fn minus_family_has_no_arrow() {
        assert_eq!(kinds("-"), vec![TokenKind::from_char(b'-')]);
        assert_eq!(kinds("-="), vec![TokenKind::SUB_ASSIGN]);
        assert_eq!(kinds("--"), vec![TokenKind::DEC]);
    }

    #[test]
    fn shift_family() {
        assert_eq!(
            kinds("< <= << <<="),
            vec![
                TokenKind::from_char(b'<'),
                TokenKind::LTEQ,
                TokenKind::LSHIFT,
                TokenKind::LSHIFT_ASSIGN,
            ]
        );
        assert_eq!(
            kinds("> >= >> >>="),
            vec![
                TokenKind::from_char(b'>'),
                TokenKind::GTEQ,
                TokenKind::RSHIFT,
                TokenKind::RSHIFT_ASSIGN,
            ]
        );
    }

    #[test]
    fn and_or_family() {
        assert_eq!(kinds("& &= &&"), vec![
            TokenKind::from_char(b'&'),
            TokenKind::AND_ASSIGN,
            TokenKind::AND,
        ]);
        assert_eq!(kinds("| |= ||"), vec![
            TokenKind::from_char(b'|'),
            TokenKind::OR_ASSIGN,
            TokenKind::OR,
        ]);
    }

    #[test]
    fn full_operator_scenario() {
        assert_eq!(
            kinds(": := + += ++ < <= << <<="),
            vec![
                TokenKind::from_char(b':'),
                TokenKind::COLON_ASSIGN,
                TokenKind::from_char(b'+'),
                TokenKind::ADD_ASSIGN,
                TokenKind::INC,
                TokenKind::from_char(b'<'),
                TokenKind::LTEQ,
                TokenKind::LSHIFT,
                TokenKind::LSHIFT_ASSIGN,
            ]
        );
    }
}
