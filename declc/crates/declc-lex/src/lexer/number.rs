//! Integer and float literal lexing.
//!
//! Dispatch between the two mirrors the lookahead trick used to decide it
//! without backtracking state: scan the leading digit run, peek one byte
//! past it, and only then commit to `scan_int` or `scan_float`.

use crate::lexer::core::Lexer;
use crate::token::{Token, TokenMod};

fn digit_value(c: u8) -> u32 {
    match c {
        b'0'..=b'9' => (c - b'0') as u32,
        b'a'..=b'f' => (c - b'a' + 10) as u32,
        b'A'..=b'F' => (c - b'A' + 10) as u32,
        _ => u32::MAX,
    }
}

impl<'a> Lexer<'a> {
    /// Peeks ahead to tell an integer literal from a float one, then scans
    /// the winning form from the (unconsumed) start position.
    pub(super) fn lex_number(&mut self) -> Token {
        let mark = self.cursor.snapshot();
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        let next = self.cursor.current();
        self.cursor.restore(mark);
        if next == b'.' || next == b'e' || next == b'E' {
            self.lex_float()
        } else {
            self.lex_int()
        }
    }

    fn lex_int(&mut self) -> Token {
        let mut base = 10u32;
        let mut modifier = TokenMod::None;

        if self.cursor.current() == b'0' {
            self.cursor.advance();
            match self.cursor.current() {
                b'x' | b'X' => {
                    self.cursor.advance();
                    modifier = TokenMod::Hex;
                    base = 16;
                }
                b'b' | b'B' => {
                    self.cursor.advance();
                    modifier = TokenMod::Bin;
                    base = 2;
                }
                b'0'..=b'9' => {
                    modifier = TokenMod::Oct;
                    base = 8;
                }
                _ => {}
            }
        }

        let mut value: u64 = 0;
        loop {
            let c = self.cursor.current();
            if !c.is_ascii_alphanumeric() {
                break;
            }
            let mut digit = digit_value(c) as u64;
            if digit == u32::MAX as u64 {
                break;
            }
            if digit >= base as u64 {
                self.report_error(format!(
                    "digit '{}' out of range for base {base}",
                    c as char
                ));
                digit = 0;
            }
            if value > (u64::MAX - digit) / base as u64 {
                self.report_error("integer literal overflow");
                while self.cursor.current().is_ascii_digit() {
                    self.cursor.advance();
                }
                value = 0;
                break;
            }
            value = value * base as u64 + digit;
            self.cursor.advance();
        }

        Token::int(self.span(), value, modifier)
    }

    pub(super) fn lex_float(&mut self) -> Token {
        let start = self.cursor.position();
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        if self.cursor.current() == b'.' {
            self.cursor.advance();
        }
        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }
        if matches!(self.cursor.current(), b'e' | b'E') {
            self.cursor.advance();
            if matches!(self.cursor.current(), b'+' | b'-') {
                self.cursor.advance();
            }
            if !self.cursor.current().is_ascii_digit() {
                self.report_error(format!(
                    "expected digit after float literal exponent, found '{}'",
                    self.cursor.current() as char
                ));
            }
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        let text = self.cursor.slice_from(start);
        let value: f64 = text.parse().unwrap_or(f64::NAN);
        let value = if value.is_finite() {
            value
        } else {
            self.report_error("float literal overflow");
            0.0
        };
        Token::float(self.span(), value)
    }
}

#[cfg(test)]
mod tests {
    use declc_util::Handler;

    use crate::lexer::Lexer;
    use crate::token::{TokenKind, TokenMod};

    fn lex_one(src: &str) -> crate::token::Token {
        let mut handler = Handler::new();
        let lexer = Lexer::new(src, &mut handler);
        lexer.current().clone()
    }

    #[test]
    fn decimal_integer() {
        let t = lex_one("42");
        assert_eq!(t.kind, TokenKind::INT);
        assert_eq!(t.int_value(), Some(42));
        assert_eq!(t.modifier, TokenMod::None);
    }

    #[test]
    fn hex_integer_overflow_scenario() {
        let t = lex_one("0xffffffffffffffff");
        assert_eq!(t.int_value(), Some(0xffff_ffff_ffff_ffffu64));
        assert_eq!(t.modifier, TokenMod::Hex);
    }

    #[test]
    fn octal_and_binary() {
        let t = lex_one("042");
        assert_eq!(t.int_value(), Some(0o42));
        assert_eq!(t.modifier, TokenMod::Oct);

        let t = lex_one("0b1111");
        assert_eq!(t.int_value(), Some(0b1111));
        assert_eq!(t.modifier, TokenMod::Bin);
    }

    #[test]
    fn max_u64_decimal() {
        let t = lex_one("18446744073709551615");
        assert_eq!(t.int_value(), Some(u64::MAX));
    }

    #[test]
    fn overflow_zeros_value_and_reports() {
        let mut handler = Handler::new();
        let lexer = Lexer::new("99999999999999999999", &mut handler);
        assert_eq!(lexer.current().int_value(), Some(0));
        assert!(handler.had_errors());
    }

    #[test]
    fn float_forms() {
        assert_eq!(lex_one("3.14").float_value(), Some(3.14));
        assert_eq!(lex_one(".123").float_value(), Some(0.123));
        assert_eq!(lex_one("42.").float_value(), Some(42.0));
        assert_eq!(lex_one("3e10").float_value(), Some(3e10));
    }

    #[test]
    fn missing_exponent_digit_reports_error() {
        let mut handler = Handler::new();
        let _lexer = Lexer::new("1e", &mut handler);
        assert!(handler.had_errors());
    }
}
