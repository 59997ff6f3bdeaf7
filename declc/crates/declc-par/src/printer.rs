//! Canonical S-expression printer — the golden reference for parser tests.
//!
//! Builds a `String` rather than writing straight to a stream: the shape of
//! the traversal (and the `indent` counter it carries) mirrors the original
//! print routines one-for-one, just with an owned buffer standing in for
//! stdout.

use std::fmt::Write as _;

use crate::ast::{AggregateItem, Decl, ElseIf, Expr, Stmt, StmtBlock, SwitchCase, Typespec};

pub struct Printer {
    indent: usize,
}

impl Default for Printer {
    fn default() -> Self {
        Self::new()
    }
}

impl Printer {
    pub fn new() -> Self {
        Printer { indent: 0 }
    }

    fn newline(&self, out: &mut String) {
        out.push('\n');
        for _ in 0..self.indent {
            out.push_str("  ");
        }
    }

    pub fn typespec(&self, t: &Typespec<'_>, out: &mut String) {
        match t {
            Typespec::Ident(name) => {
                write!(out, "{name}").unwrap();
            }
            Typespec::Fn { args, ret } => {
                out.push_str("(fn (");
                for a in args.iter() {
                    out.push(' ');
                    self.typespec(a, out);
                }
                out.push_str(") ");
                match ret {
                    Some(r) => self.typespec(r, out),
                    None => out.push_str("nil"),
                }
                out.push(')');
            }
            Typespec::Array { elem, size } => {
                out.push_str("(array ");
                self.typespec(elem, out);
                out.push(' ');
                match size {
                    Some(e) => self.expr(e, out),
                    None => out.push_str("nil"),
                }
                out.push(')');
            }
            Typespec::Ptr { elem } => {
                out.push_str("(ptr ");
                self.typespec(elem, out);
                out.push(')');
            }
        }
    }

    pub fn expr(&self, e: &Expr<'_>, out: &mut String) {
        match e {
            Expr::Int(v) => write!(out, "{v}").unwrap(),
            Expr::Float(v) => write!(out, "{v:.6}").unwrap(),
            Expr::Str(s) => write!(out, "\"{s}\"").unwrap(),
            Expr::Ident(name) => write!(out, "{name}").unwrap(),
            Expr::Cast { ty, expr } => {
                out.push_str("(cast ");
                self.typespec(ty, out);
                out.push(' ');
                self.expr(expr, out);
                out.push(')');
            }
            Expr::Call { callee, args } => {
                out.push('(');
                self.expr(callee, out);
                for a in args.iter() {
                    out.push(' ');
                    self.expr(a, out);
                }
                out.push(')');
            }
            Expr::Index { expr, index } => {
                out.push_str("(index ");
                self.expr(expr, out);
                out.push(' ');
                self.expr(index, out);
                out.push(')');
            }
            Expr::Field { expr, name } => {
                out.push_str("(field ");
                self.expr(expr, out);
                write!(out, " {name})").unwrap();
            }
            Expr::Compound { ty, args } => {
                out.push_str("(compound ");
                match ty {
                    Some(t) => self.typespec(t, out),
                    None => out.push_str("nil"),
                }
                for a in args.iter() {
                    out.push(' ');
                    self.expr(a, out);
                }
                out.push(')');
            }
            Expr::Unary { op, expr } => {
                write!(out, "({} ", op.name()).unwrap();
                self.expr(expr, out);
                out.push(')');
            }
            Expr::Binary { op, left, right } => {
                write!(out, "({} ", op.name()).unwrap();
                self.expr(left, out);
                out.push(' ');
                self.expr(right, out);
                out.push(')');
            }
            Expr::Ternary { cond, then_expr, else_expr } => {
                out.push_str("(? ");
                self.expr(cond, out);
                out.push(' ');
                self.expr(then_expr, out);
                out.push(' ');
                self.expr(else_expr, out);
                out.push(')');
            }
        }
    }

    pub fn stmt_block(&mut self, block: &StmtBlock<'_>, out: &mut String) {
        out.push_str("(block");
        self.indent += 1;
        for s in block.stmts.iter() {
            self.newline(out);
            self.stmt(s, out);
        }
        self.indent -= 1;
        out.push(')');
    }

    fn elseif(&mut self, ei: &ElseIf<'_>, out: &mut String) {
        self.newline(out);
        out.push_str("elseif ");
        self.expr(ei.cond, out);
        self.newline(out);
        self.stmt_block(&ei.block, out);
    }

    pub fn stmt(&mut self, s: &Stmt<'_>, out: &mut String) {
        match s {
            Stmt::Return(e) => {
                out.push_str("(return ");
                self.expr(e, out);
                out.push(')');
            }
            Stmt::Break => out.push_str("(break)"),
            Stmt::Continue => out.push_str("(continue)"),
            Stmt::Block(b) => self.stmt_block(b, out),
            Stmt::If { cond, then_block, elseifs, else_block } => {
                out.push_str("(if ");
                self.expr(cond, out);
                self.indent += 1;
                self.newline(out);
                self.stmt_block(then_block, out);
                for ei in elseifs.iter() {
                    self.elseif(ei, out);
                }
                if let Some(eb) = else_block {
                    self.newline(out);
                    out.push_str("else ");
                    self.newline(out);
                    self.stmt_block(eb, out);
                }
                self.indent -= 1;
                out.push(')');
            }
            Stmt::While { cond, block } => {
                out.push_str("(while ");
                self.expr(cond, out);
                self.indent += 1;
                self.newline(out);
                self.stmt_block(block, out);
                self.indent -= 1;
                out.push(')');
            }
            Stmt::DoWhile { cond, block } => {
                out.push_str("(do-while ");
                self.expr(cond, out);
                self.indent += 1;
                self.newline(out);
                self.stmt_block(block, out);
                self.indent -= 1;
                out.push(')');
            }
            Stmt::For { init, cond, next, block } => {
                out.push_str("(for ");
                match init {
                    Some(s) => self.stmt(s, out),
                    None => out.push_str("(empty)"),
                }
                out.push(' ');
                match cond {
                    Some(e) => self.expr(e, out),
                    None => out.push_str("nil"),
                }
                out.push(' ');
                match next {
                    Some(s) => self.stmt(s, out),
                    None => out.push_str("(empty)"),
                }
                self.indent += 1;
                self.newline(out);
                self.stmt_block(block, out);
                self.indent -= 1;
                out.push(')');
            }
            Stmt::Switch { expr, cases } => {
                out.push_str("(switch ");
                self.expr(expr, out);
                self.indent += 1;
                for c in cases.iter() {
                    self.switch_case(c, out);
                }
                self.indent -= 1;
                out.push(')');
            }
            Stmt::Assign { op, left, right } => {
                write!(out, "({} ", op.name()).unwrap();
                self.expr(left, out);
                if let Some(r) = right {
                    out.push(' ');
                    self.expr(r, out);
                }
                out.push(')');
            }
            Stmt::Init { name, expr } => {
                write!(out, "(:= {name} ").unwrap();
                self.expr(expr, out);
                out.push(')');
            }
            Stmt::Expr(e) => self.expr(e, out),
        }
    }

    fn switch_case(&mut self, c: &SwitchCase<'_>, out: &mut String) {
        self.newline(out);
        write!(out, "(case ({}", if c.is_default { " default" } else { "" }).unwrap();
        for e in c.exprs.iter() {
            out.push(' ');
            self.expr(e, out);
        }
        out.push_str(" ) ");
        self.indent += 1;
        self.newline(out);
        self.stmt_block(&c.block, out);
        self.indent -= 1;
    }

    fn aggregate_decl(&mut self, items: &[AggregateItem<'_>], out: &mut String) {
        for it in items.iter() {
            self.newline(out);
            out.push('(');
            self.typespec(it.ty, out);
            for name in it.names.iter() {
                write!(out, " {name}").unwrap();
            }
            out.push(')');
        }
    }

    pub fn decl(&mut self, d: &Decl<'_>, out: &mut String) {
        match d {
            Decl::Enum { name, items } => {
                write!(out, "(enum {name}").unwrap();
                self.indent += 1;
                for it in items.iter() {
                    self.newline(out);
                    write!(out, "({} ", it.name).unwrap();
                    match it.expr {
                        Some(e) => self.expr(e, out),
                        None => out.push_str("nil"),
                    }
                    out.push(')');
                }
                self.indent -= 1;
                out.push(')');
            }
            Decl::Struct { name, items } => {
                write!(out, "(struct {name}").unwrap();
                self.indent += 1;
                self.aggregate_decl(items, out);
                self.indent -= 1;
                out.push(')');
            }
            Decl::Union { name, items } => {
                write!(out, "(union {name}").unwrap();
                self.indent += 1;
                self.aggregate_decl(items, out);
                self.indent -= 1;
                out.push(')');
            }
            Decl::Let { name, ty, expr } => {
                write!(out, "(let {name} ").unwrap();
                match ty {
                    Some(t) => self.typespec(t, out),
                    None => out.push_str("nil"),
                }
                out.push(' ');
                match expr {
                    Some(e) => self.expr(e, out),
                    None => out.push_str("nil"),
                }
                out.push(')');
            }
            Decl::Const { name, expr } => {
                write!(out, "(const {name} ").unwrap();
                self.expr(expr, out);
                out.push(')');
            }
            Decl::Typedef { name, ty } => {
                write!(out, "(typedef {name} ").unwrap();
                self.typespec(ty, out);
                out.push(')');
            }
            Decl::Fn { name, params, ret_type, block } => {
                write!(out, "(fn {name} (").unwrap();
                for p in params.iter() {
                    write!(out, " {} ", p.name).unwrap();
                    self.typespec(p.ty, out);
                }
                out.push_str(" ) ");
                match ret_type {
                    Some(t) => self.typespec(t, out),
                    None => out.push_str("nil"),
                }
                self.indent += 1;
                self.newline(out);
                self.stmt_block(block, out);
                self.indent -= 1;
                out.push(')');
            }
        }
    }
}

pub fn print_decl(decl: &Decl<'_>) -> String {
    let mut printer = Printer::new();
    let mut out = String::new();
    printer.decl(decl, &mut out);
    out
}

pub fn print_expr(expr: &Expr<'_>) -> String {
    let printer = Printer::new();
    let mut out = String::new();
    printer.expr(expr, &mut out);
    out
}

pub fn print_stmt(stmt: &Stmt<'_>) -> String {
    let mut printer = Printer::new();
    let mut out = String::new();
    printer.stmt(stmt, &mut out);
    out
}
