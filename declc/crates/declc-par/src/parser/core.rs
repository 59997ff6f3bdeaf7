//! `Parser` struct, its keyword table, and the public entry points.

use declc_lex::Lexer;
use declc_util::{Arena, Handler, Symbol};

use crate::ast::AstFactory;

/// The nineteen reserved words, interned once so every production can
/// compare by `Symbol` identity instead of re-interning a literal each
/// time it tests for a keyword.
pub(crate) struct Keywords {
    pub typedef: Symbol,
    pub enum_: Symbol,
    pub struct_: Symbol,
    pub union_: Symbol,
    pub const_: Symbol,
    pub let_: Symbol,
    pub fn_: Symbol,
    pub break_: Symbol,
    pub continue_: Symbol,
    pub return_: Symbol,
    pub if_: Symbol,
    pub else_: Symbol,
    pub while_: Symbol,
    pub do_: Symbol,
    pub for_: Symbol,
    pub switch: Symbol,
    pub case: Symbol,
    pub default: Symbol,
}

impl Keywords {
    fn new() -> Self {
        Keywords {
            typedef: Symbol::intern("typedef"),
            enum_: Symbol::intern("enum"),
            struct_: Symbol::intern("struct"),
            union_: Symbol::intern("union"),
            const_: Symbol::intern("const"),
            let_: Symbol::intern("let"),
            fn_: Symbol::intern("fn"),
            break_: Symbol::intern("break"),
            continue_: Symbol::intern("continue"),
            return_: Symbol::intern("return"),
            if_: Symbol::intern("if"),
            else_: Symbol::intern("else"),
            while_: Symbol::intern("while"),
            do_: Symbol::intern("do"),
            for_: Symbol::intern("for"),
            switch: Symbol::intern("switch"),
            case: Symbol::intern("case"),
            default: Symbol::intern("default"),
        }
    }
}

pub struct Parser<'a> {
    pub(crate) lexer: Lexer<'a>,
    pub(crate) ast: AstFactory<'a>,
    pub(crate) kw: Keywords,
}

impl<'a> Parser<'a> {
    pub fn new(source: &'a str, handler: &'a mut Handler, arena: &'a Arena) -> Self {
        Parser {
            lexer: Lexer::new(source, handler),
            ast: AstFactory::new(arena),
            kw: Keywords::new(),
        }
    }
}
