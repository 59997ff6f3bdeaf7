//! Tokenizer: turns source text into a stream of [`Token`]s.
//!
//! - `cursor` - byte-indexed cursor over the source
//! - `token` - `TokenKind`/`TokenMod`/`Token`
//! - `lexer` - the scanner itself, split by what each part of it scans

mod cursor;
mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind, TokenMod, TokenPayload};

#[cfg(test)]
mod tests {
    use declc_util::Handler;

    use crate::{Lexer, TokenKind, TokenMod};

    fn kinds(src: &str) -> Vec<TokenKind> {
        let mut handler = Handler::new();
        Lexer::new(src, &mut handler).map(|t| t.kind).collect()
    }

    #[test]
    fn integer_literal_scenarios() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("0 18446744073709551615 0xffffffffffffffff 042 0b1111", &mut handler);

        assert_eq!(lexer.current().int_value(), Some(0));
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(u64::MAX));
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(u64::MAX));
        assert_eq!(lexer.current().modifier, TokenMod::Hex);
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(0o42));
        assert_eq!(lexer.current().modifier, TokenMod::Oct);
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(0b1111));
        assert_eq!(lexer.current().modifier, TokenMod::Bin);
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::EOF);
    }

    #[test]
    fn char_literal_scenarios() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("'a' '\\n'", &mut handler);
        assert_eq!(lexer.current().int_value(), Some(b'a' as u64));
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(b'\n' as u64));
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::EOF);
    }

    #[test]
    fn operator_scenario() {
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

    #[test]
    fn mixed_ident_operator_number_scenario() {
        let mut handler = Handler::new();
        let mut lexer = Lexer::new("XY+(XY)1234-_jehllo!huhu_ui,994 aa12", &mut handler);

        assert_eq!(lexer.current().name_value().unwrap().as_str(), "XY");
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b'+'));
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b'('));
        lexer.bump();
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "XY");
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b')'));
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(1234));
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b'-'));
        lexer.bump();
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "_jehllo");
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b'!'));
        lexer.bump();
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "huhu_ui");
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::from_char(b','));
        lexer.bump();
        assert_eq!(lexer.current().int_value(), Some(994));
        lexer.bump();
        assert_eq!(lexer.current().name_value().unwrap().as_str(), "aa12");
        lexer.bump();
        assert_eq!(lexer.current().kind, TokenKind::EOF);
    }

    #[test]
    fn every_keyword_is_keyword_and_arbitrary_ident_is_not() {
        for kw in [
            "typedef", "enum", "struct", "union", "const", "let", "fn", "sizeof", "break",
            "continue", "return", "if", "else", "while", "do", "for", "switch", "case", "default",
        ] {
            assert_eq!(kinds(kw), vec![TokenKind::KEYWORD]);
        }
        assert_eq!(kinds("foo"), vec![TokenKind::IDENT]);
    }
}
