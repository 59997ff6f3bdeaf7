//! Identifiers and the keyword/ident split.

use declc_util::{symbol, Symbol};

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenKind};

impl<'a> Lexer<'a> {
    /// `[A-Za-z_][A-Za-z0-9_]*`, classified as `KEYWORD` or `IDENT` by
    /// looking the interned text up in the fixed keyword table.
    pub(super) fn lex_identifier(&mut self) -> Token {
        let start = self.cursor.position();
        while matches!(self.cursor.current(), b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'_') {
            self.cursor.advance();
        }
        let text = self.cursor.slice_from(start);
        let sym = Symbol::intern(text);
        let kind = if symbol::is_keyword(sym) {
            TokenKind::KEYWORD
        } else {
            TokenKind::IDENT
        };
        Token::name(self.span(), kind, sym)
    }
}

#[cfg(test)]
mod tests {
    use declc_util::Handler;

    use crate::lexer::Lexer;
    use crate::token::TokenKind;

    #[test]
    fn plain_identifier_is_ident() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("counter", &mut handler);
        assert_eq!(lexer.current().kind, TokenKind::IDENT);
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "counter");
    }

    #[test]
    fn underscore_and_digits_allowed_after_first_char() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("_foo_bar123", &mut handler);
        assert_eq!(lexer.current().kind, TokenKind::IDENT);
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "_foo_bar123");
    }

    #[test]
    fn every_keyword_lexes_as_keyword() {
        for kw in [
            "typedef", "enum", "struct", "union", "const", "let", "fn", "sizeof", "break",
            "continue", "return", "if", "else", "while", "do", "for", "switch", "case", "default",
        ] {
            let mut handler = Handler::new();
            let lexer = Lexer::new(kw, &mut handler);
            assert_eq!(lexer.current().kind, TokenKind::KEYWORD, "{kw} should be a keyword");
            assert_eq!(lexer.current().name_value().unwrap().as_str(), kw);
        }
    }

    #[test]
    fn near_miss_of_keyword_is_ident() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("letter", &mut handler);
        assert_eq!(lexer.current().kind, TokenKind::IDENT);
    }
}
