//! Statements: blocks, the simple-statement disambiguation (`:=` / compound
//! assign / `++`/`--` / bare expression), and the control-flow forms.

use declc_lex::TokenKind;

use crate::ast::{ElseIf, Stmt, StmtBlock, SwitchCase};
use crate::parser::core::Parser;

impl<'a> Parser<'a> {
    pub fn parse_stmt(&mut self) -> &'a Stmt<'a> {
        if self.lexer.is_token_char(b'{') {
            let block = self.parse_stmt_block();
            self.ast.stmt(Stmt::Block(block))
        } else if self.lexer.match_keyword(self.kw.return_) {
            let expr = self.parse_expr();
            let stmt = self.ast.stmt(Stmt::Return(expr));
            self.lexer.expect_token(TokenKind::from_char(b';'));
            stmt
        } else if self.lexer.match_keyword(self.kw.break_) {
            self.lexer.expect_token(TokenKind::from_char(b';'));
            self.ast.stmt(Stmt::Break)
        } else if self.lexer.match_keyword(self.kw.continue_) {
            self.lexer.expect_token(TokenKind::from_char(b';'));
            self.ast.stmt(Stmt::Continue)
        } else if self.lexer.match_keyword(self.kw.if_) {
            self.parse_stmt_if()
        } else if self.lexer.match_keyword(self.kw.while_) {
            self.parse_stmt_while()
        } else if self.lexer.match_keyword(self.kw.do_) {
            self.parse_stmt_do_while()
        } else if self.lexer.match_keyword(self.kw.for_) {
            self.parse_stmt_for()
        } else if self.lexer.match_keyword(self.kw.switch) {
            self.parse_stmt_switch()
        } else {
            let stmt = self.parse_simple_stmt();
            self.lexer.expect_token(TokenKind::from_char(b';'));
            stmt
        }
    }

    pub(crate) fn parse_stmt_block(&mut self) -> StmtBlock<'a> {
        self.lexer.expect_token(TokenKind::from_char(b'{'));
        let mut stmts = Vec::new();
        while !self.lexer.is_token(TokenKind::EOF) && !self.lexer.is_token_char(b'}') {
            stmts.push(self.parse_stmt());
        }
        self.lexer.expect_token(TokenKind::from_char(b'}'));
        StmtBlock { stmts: self.ast.slice(&stmts) }
    }

    fn parse_stmt_if(&mut self) -> &'a Stmt<'a> {
        let cond = self.parse_paren_expr();
        let then_block = self.parse_stmt_block();
        let mut else_block = None;
        let mut elseifs = Vec::new();
        while self.lexer.match_keyword(self.kw.else_) {
            if !self.lexer.match_keyword(self.kw.if_) {
                else_block = Some(self.parse_stmt_block());
                break;
            }
            let elseif_cond = self.parse_paren_expr();
            let elseif_block = self.parse_stmt_block();
            elseifs.push(ElseIf { cond: elseif_cond, block: elseif_block });
        }
        self.ast.stmt(Stmt::If { cond, then_block, elseifs: self.ast.slice(&elseifs), else_block })
    }

    fn parse_stmt_while(&mut self) -> &'a Stmt<'a> {
        let cond = self.parse_paren_expr();
        let block = self.parse_stmt_block();
        self.ast.stmt(Stmt::While { cond, block })
    }

    fn parse_stmt_do_while(&mut self) -> &'a Stmt<'a> {
        let block = self.parse_stmt_block();
        if !self.lexer.match_keyword(self.kw.while_) {
            self.lexer.fatal_syntax_error("Expected 'while' after 'do' block");
        }
        let cond = self.parse_paren_expr();
        let stmt = self.ast.stmt(Stmt::DoWhile { cond, block });
        self.lexer.expect_token(TokenKind::from_char(b';'));
        stmt
    }

    pub(crate) fn parse_simple_stmt(&mut self) -> &'a Stmt<'a> {
        let expr = self.parse_expr();
        if self.lexer.match_token(TokenKind::COLON_ASSIGN) {
            let name = match *expr {
                crate::ast::Expr::Ident(name) => name,
                _ => self.lexer.fatal_syntax_error(":= must be preceded by a name"),
            };
            let init_expr = self.parse_expr();
            self.ast.stmt(Stmt::Init { name, expr: init_expr })
        } else if self.lexer.current().kind.is_assign_op() {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            let right = self.parse_expr();
            self.ast.stmt(Stmt::Assign { op, left: expr, right: Some(right) })
        } else if self.lexer.is_token(TokenKind::INC) || self.lexer.is_token(TokenKind::DEC) {
            let op = self.lexer.current().kind;
            self.lexer.bump();
            self.ast.stmt(Stmt::Assign { op, left: expr, right: None })
        } else {
            self.ast.stmt(Stmt::Expr(expr))
        }
    }

    fn parse_stmt_for(&mut self) -> &'a Stmt<'a> {
        self.lexer.expect_token(TokenKind::from_char(b'('));
        let init = if self.lexer.is_token_char(b';') { None } else { Some(self.parse_simple_stmt()) };
        self.lexer.expect_token(TokenKind::from_char(b';'));
        let cond = if self.lexer.is_token_char(b';') { None } else { Some(self.parse_expr()) };
        self.lexer.expect_token(TokenKind::from_char(b';'));
        let next = if self.lexer.is_token_char(b')') { None } else { Some(self.parse_simple_stmt()) };
        self.lexer.expect_token(TokenKind::from_char(b')'));
        let block = self.parse_stmt_block();
        self.ast.stmt(Stmt::For { init, cond, next, block })
    }

    fn parse_stmt_switch_case(&mut self) -> SwitchCase<'a> {
        let mut exprs = Vec::new();
        let mut is_default = false;
        while self.lexer.is_keyword(self.kw.case) || self.lexer.is_keyword(self.kw.default) {
            if self.lexer.match_keyword(self.kw.case) {
                exprs.push(self.parse_expr());
                self.lexer.expect_token(TokenKind::from_char(b':'));
            } else {
                debug_assert!(self.lexer.is_keyword(self.kw.default));
                self.lexer.bump();
                is_default = true;
            }
        }
        let block = self.parse_stmt_block();
        SwitchCase { exprs: self.ast.slice(&exprs), is_default, block }
    }

    fn parse_stmt_switch(&mut self) -> &'a Stmt<'a> {
        let expr = self.parse_paren_expr();
        let mut cases = Vec::new();
        self.lexer.expect_token(TokenKind::from_char(b'{'));
        while !self.lexer.is_token(TokenKind::EOF) && !self.lexer.is_token_char(b'}') {
            cases.push(self.parse_stmt_switch_case());
        }
        self.lexer.expect_token(TokenKind::from_char(b'}'));
        self.ast.stmt(Stmt::Switch { expr, cases: self.ast.slice(&cases) })
    }
}
