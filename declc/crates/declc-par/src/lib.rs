//! Recursive-descent parser and canonical printer for the declaration-first
//! source language `declc-lex` tokenises.
//!
//! - `ast` - the four sum types (`Typespec`/`Expr`/`Stmt`/`Decl`) and the
//!   arena-bound factory that allocates them
//! - `parser` - the productions that build an AST from a token stream
//! - `printer` - renders an AST back out as a canonical S-expression

pub mod ast;
pub mod parser;
pub mod printer;

pub use ast::{Decl, Expr, Stmt, Typespec};
pub use parser::Parser;
pub use printer::{print_decl, print_expr, print_stmt};
