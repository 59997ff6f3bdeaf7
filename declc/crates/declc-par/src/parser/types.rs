//! Type expressions: a base form followed by a postfix chain of `[size?]`
//! and `*` applied outward.

use declc_lex::TokenKind;

use crate::ast::Typespec;
use crate::parser::core::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_type(&mut self) -> &'a Typespec<'a> {
        let mut ty = self.parse_type_base();
        loop {
            if self.lexer.is_token_char(b'[') {
                self.lexer.bump();
                let size = if self.lexer.is_token_char(b']') {
                    None
                } else {
                    Some(self.parse_expr())
                };
                self.lexer.expect_token(TokenKind::from_char(b']'));
                ty = self.ast.typespec(Typespec::Array { elem: ty, size });
            } else if self.lexer.is_token_char(b'*') {
                self.lexer.bump();
                ty = self.ast.typespec(Typespec::Ptr { elem: ty });
            } else {
                break;
            }
        }
        ty
    }

    fn parse_type_base(&mut self) -> &'a Typespec<'a> {
        if self.lexer.is_token(TokenKind::IDENT) {
            let name = self.lexer.current().name_value().expect("IDENT token carries a name");
            self.lexer.bump();
            self.ast.typespec(Typespec::Ident(name))
        } else if self.lexer.match_keyword(self.kw.fn_) {
            self.parse_type_fn()
        } else if self.lexer.match_token(TokenKind::from_char(b'(')) {
            let ty = self.parse_type();
            self.lexer.expect_token(TokenKind::from_char(b')'));
            ty
        } else {
            let kind_name = self.lexer.current().kind.name();
            self.lexer.fatal_syntax_error(format!("Unexpected token {kind_name} in type"))
        }
    }

    fn parse_type_fn(&mut self) -> &'a Typespec<'a> {
        self.lexer.expect_token(TokenKind::from_char(b'('));
        let mut args = Vec::new();
        if !self.lexer.is_token_char(b')') {
            args.push(self.parse_type());
            while self.lexer.match_token(TokenKind::from_char(b',')) {
                args.push(self.parse_type());
            }
        }
        self.lexer.expect_token(TokenKind::from_char(b')'));
        let ret = if self.lexer.match_token(TokenKind::from_char(b':')) {
            Some(self.parse_type())
        } else {
            None
        };
        self.ast.typespec(Typespec::Fn { args: self.ast.slice(&args), ret })
    }
}
