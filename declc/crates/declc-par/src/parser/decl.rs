//! Top-level declarations: exactly one leading keyword in
//! `{enum, struct, union, let, const, typedef, fn}` selects the production.

use declc_lex::TokenKind;
use declc_util::Symbol;

use crate::ast::{AggregateItem, Decl, EnumItem, FnParam};
use crate::parser::core::Parser;

impl<'a> Parser<'a> {
    pub fn parse_decl(&mut self) -> &'a Decl<'a> {
        if self.lexer.match_keyword(self.kw.enum_) {
            self.parse_decl_enum()
        } else if self.lexer.match_keyword(self.kw.struct_) {
            self.parse_decl_aggregate(|name, items| Decl::Struct { name, items })
        } else if self.lexer.match_keyword(self.kw.union_) {
            self.parse_decl_aggregate(|name, items| Decl::Union { name, items })
        } else if self.lexer.match_keyword(self.kw.let_) {
            self.parse_decl_let()
        } else if self.lexer.match_keyword(self.kw.const_) {
            self.parse_decl_const()
        } else if self.lexer.match_keyword(self.kw.typedef) {
            self.parse_decl_typedef()
        } else if self.lexer.match_keyword(self.kw.fn_) {
            self.parse_decl_fn()
        } else {
            let kind_name = self.lexer.current().kind.name();
            self.lexer.fatal_syntax_error(format!("Expected declaration keyword, got {kind_name}"))
        }
    }

    fn parse_ident(&mut self) -> Symbol {
        let name = match self.lexer.current().name_value() {
            Some(name) => name,
            None => {
                let kind_name = self.lexer.current().kind.name();
                self.lexer.fatal_syntax_error(format!(
                    "expected token: {}, got {kind_name}",
                    TokenKind::IDENT.name()
                ))
            }
        };
        self.lexer.expect_token(TokenKind::IDENT);
        name
    }

    fn parse_decl_enum(&mut self) -> &'a Decl<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b'{'));
        let mut items = Vec::new();
        while !self.lexer.is_token(TokenKind::EOF) && !self.lexer.is_token_char(b'}') {
            let item_name = self.parse_ident();
            let expr = if self.lexer.match_token(TokenKind::from_char(b'=')) {
                Some(self.parse_expr())
            } else {
                None
            };
            items.push(EnumItem { name: item_name, expr });
        }
        self.lexer.expect_token(TokenKind::from_char(b'}'));
        self.ast.decl(Decl::Enum { name, items: self.ast.slice(&items) })
    }

    fn parse_decl_aggregate_item(&mut self) -> AggregateItem<'a> {
        let mut names = vec![self.parse_ident()];
        while self.lexer.match_token(TokenKind::from_char(b',')) {
            names.push(self.parse_ident());
        }
        self.lexer.expect_token(TokenKind::from_char(b':'));
        let ty = self.parse_type();
        self.lexer.expect_token(TokenKind::from_char(b';'));
        AggregateItem { names: self.ast.slice(&names), ty }
    }

    fn parse_decl_aggregate(
        &mut self,
        make: impl FnOnce(Symbol, &'a [AggregateItem<'a>]) -> Decl<'a>,
    ) -> &'a Decl<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b'{'));
        let mut items = Vec::new();
        while !self.lexer.is_token(TokenKind::EOF) && !self.lexer.is_token_char(b'}') {
            items.push(self.parse_decl_aggregate_item());
        }
        self.lexer.expect_token(TokenKind::from_char(b'}'));
        self.ast.decl(make(name, self.ast.slice(&items)))
    }

    fn parse_decl_let(&mut self) -> &'a Decl<'a> {
        let name = self.parse_ident();
        if self.lexer.match_token(TokenKind::from_char(b'=')) {
            let expr = self.parse_expr();
            self.ast.decl(Decl::Let { name, ty: None, expr: Some(expr) })
        } else if self.lexer.match_token(TokenKind::from_char(b':')) {
            let ty = self.parse_type();
            let expr = if self.lexer.match_token(TokenKind::from_char(b'=')) {
                Some(self.parse_expr())
            } else {
                None
            };
            self.ast.decl(Decl::Let { name, ty: Some(ty), expr })
        } else {
            let kind_name = self.lexer.current().kind.name();
            self.lexer.fatal_syntax_error(format!("Expected : or = after var, got {kind_name}"))
        }
    }

    fn parse_decl_const(&mut self) -> &'a Decl<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b'='));
        let expr = self.parse_expr();
        self.ast.decl(Decl::Const { name, expr })
    }

    fn parse_decl_typedef(&mut self) -> &'a Decl<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b'='));
        let ty = self.parse_type();
        self.ast.decl(Decl::Typedef { name, ty })
    }

    fn parse_decl_fn_param(&mut self) -> FnParam<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b':'));
        let ty = self.parse_type();
        FnParam { name, ty }
    }

    fn parse_decl_fn(&mut self) -> &'a Decl<'a> {
        let name = self.parse_ident();
        self.lexer.expect_token(TokenKind::from_char(b'('));
        let mut params = Vec::new();
        if !self.lexer.is_token_char(b')') {
            params.push(self.parse_decl_fn_param());
            while self.lexer.match_token(TokenKind::from_char(b',')) {
                params.push(self.parse_decl_fn_param());
            }
        }
        self.lexer.expect_token(TokenKind::from_char(b')'));
        let ret_type = if self.lexer.match_token(TokenKind::from_char(b':')) {
            Some(self.parse_type())
        } else {
            None
        };
        let block = self.parse_stmt_block();
        self.ast.decl(Decl::Fn { name, params: self.ast.slice(&params), ret_type, block })
    }
}
