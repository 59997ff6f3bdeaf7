//! The expression grammar: operand, postfix chain, then the precedence
//! ladder from unary (tightest) down to ternary (loosest).

use declc_lex::TokenKind;

use crate::ast::{Expr, Typespec};
use crate::parser::core::Parser;

impl<'a> Parser<'a> {
    pub fn parse_expr(&mut self) -> &'a Expr<'a> {
        self.parse_expr_ternary()
    }

    pub(crate) fn parse_paren_expr(&mut self) -> &'a Expr<'a> {
        self.lexer.expect_token(TokenKind::from_char(b'('));
        let expr = self.parse_expr();
        self.lexer.expect_token(TokenKind::from_char(b')'));
        expr
    }

    fn parse_expr_compound(&mut self, ty: Option<&'a Typespec<'a>>) -> &'a Expr<'a> {
        self.lexer.expect_token(TokenKind::from_char(b'{'));
        let mut args = Vec::new();
        if !self.lexer.is_token_char(b'}') {
            args.push(self.parse_expr());
            while self.lexer.match_token(TokenKind::from_char(b',')) {
                args.push(self.parse_expr());
            }
        }
        self.lexer.expect_token(TokenKind::from_char(b'}'));
        self.ast.expr(Expr::Compound { ty, args: self.ast.slice(&args) })
    }

    fn parse_expr_operand(&mut self) -> &'a Expr<'a> {
        let tok = self.lexer.current().clone();
        if tok.kind == TokenKind::INT {
            self.lexer.bump();
            self.ast.expr(Expr::Int(tok.int_value().expect("INT token carries a value")))
        } else if tok.kind == TokenKind::FLOAT {
            self.lexer.bump();
            self.ast.expr(Expr::Float(tok.float_value().expect("FLOAT token carries a value")))
        } else if tok.kind == TokenKind::STR {
            self.lexer.bump();
            let text = self.ast.str(tok.str_value().expect("STR token carries a value"));
            self.ast.expr(Expr::Str(text))
        } else if tok.kind == TokenKind::IDENT {
            let name = tok.name_value().expect("IDENT token carries a name");
            self.lexer.bump();
            if self.lexer.is_token_char(b'{') {
                let ty = self.ast.typespec(Typespec::Ident(name));
                self.parse_expr_compound(Some(ty))
            } else {
                self.ast.expr(Expr::Ident(name))
            }
        } else if tok.kind == TokenKind::from_char(b'{') {
            self.parse_expr_compound(None)
        } else if tok.kind == TokenKind::from_char(b'(') {
            self.lexer.bump();
            if self.lexer.is_token_char(b':') {
                self.lexer.bump();
                let ty = self.parse_type();
                self.lexer.expect_token(TokenKind::from_char(b')'));
                self.parse_expr_compound(Some(ty))
            } else {
                let expr = self.parse_expr();
                self.lexer.expect_token(TokenKind::from_char(b')'));
                expr
            }
        } else {
            let kind_name = tok.kind.name();
            self.lexer.fatal_syntax_error(format!("Unexpected token {kind_name} in expression"))
        }
    }

    fn parse_expr_base(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_operand();
        loop {
            if self.lexer.is_token_char(b'(') {
                self.lexer.bump();
                let mut args = Vec::new();
                if !self.lexer.is_token_char(b')') {
                    args.push(self.parse_expr());
                    while self.lexer.match_token(TokenKind::from_char(b',')) {
                        args.push(self.parse_expr());
                    }
                }
                self.lexer.expect_token(TokenKind::from_char(b')'));
                expr = self.ast.expr(Expr::Call { callee: expr, args: self.ast.slice(&args) });
            } else if self.lexer.is_token_char(b'[') {
                self.lexer.bump();
                let index = self.parse_expr();
                self.lexer.expect_token(TokenKind::from_char(b']'));
                expr = self.ast.expr(Expr::Index { expr, index });
            } else if self.lexer.is_token_char(b'.') {
                self.lexer.bump();
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
                expr = self.ast.expr(Expr::Field { expr, name });
            } else {
                break;
            }
        }
        expr
    }

    fn is_unary_op(&self) -> bool {
        let k = self.lexer.current().kind;
        k == TokenKind::from_char(b'+')
            || k == TokenKind::from_char(b'-')
            || k == TokenKind::from_char(b'*')
            || k == TokenKind::from_char(b'&')
    }

    fn is_mul_op(&self) -> bool {
        let k = self.lexer.current().kind;
        k == TokenKind::from_char(b'*')
            || k == TokenKind::from_char(b'/')
            || k == TokenKind::from_char(b'%')
            || k == TokenKind::from_char(b'&')
            || k == TokenKind::LSHIFT
            || k == TokenKind::RSHIFT
    }

    fn is_add_op(&self) -> bool {
        let k = self.lexer.current().kind;
        k == TokenKind::from_char(b'+')
            || k == TokenKind::from_char(b'-')
            || k == TokenKind::from_char(b'|')
            || k == TokenKind::from_char(b'^')
    }

    fn is_cmp_op(&self) -> bool {
        let k = self.lexer.current().kind;
        k == TokenKind::from_char(b'<')
            || k == TokenKind::from_char(b'>')
            || k == TokenKind::EQ
            || k == TokenKind::NOTEQ
            || k == TokenKind::GTEQ
            || k == TokenKind::LTEQ
    }

    fn parse_expr_unary(&mut self) -> &'a Expr<'a> {
        if self.is_unary_op() {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            let expr = self.parse_expr_unary();
            self.ast.expr(Expr::Unary { op, expr })
        } else {
            self.parse_expr_base()
        }
    }

    fn parse_expr_mul(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_unary();
        while self.is_mul_op() {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            let right = self.parse_expr_unary();
            expr = self.ast.expr(Expr::Binary { op, left: expr, right });
        }
        expr
    }

    fn parse_expr_add(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_mul();
        while self.is_add_op() {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            let right = self.parse_expr_mul();
            expr = self.ast.expr(Expr::Binary { op, left: expr, right });
        }
        expr
    }

    fn parse_expr_cmp(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_add();
        while self.is_cmp_op() {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            let right = self.parse_expr_add();
            expr = self.ast.expr(Expr::Binary { op, left: expr, right });
        }
        expr
    }

    fn parse_expr_and(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_cmp();
        while self.lexer.match_token(TokenKind::AND) {
            let right = self.parse_expr_cmp();
            expr = self.ast.expr(Expr::Binary { op: TokenKind::AND, left: expr, right });
        }
        expr
    }

    fn parse_expr_or(&mut self) -> &'a Expr<'a> {
        let mut expr = self.parse_expr_and();
        while self.lexer.match_token(TokenKind::OR) {
            let right = self.parse_expr_and();
            expr = self.ast.expr(Expr::Binary { op: TokenKind::OR, left: expr, right });
        }
        expr
    }

    fn parse_expr_ternary(&mut self) -> &'a Expr<'a> {
        let expr = self.parse_expr_or();
        if self.lexer.match_token(TokenKind::from_char(b'?')) {
            let then_expr = self.parse_expr_ternary();
            self.lexer.expect_token(TokenKind::from_char(b':'));
            let else_expr = self.parse_expr_ternary();
            self.ast.expr(Expr::Ternary { cond: expr, then_expr, else_expr })
        } else {
            expr
        }
    }
}
