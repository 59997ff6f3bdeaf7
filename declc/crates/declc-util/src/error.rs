//! Two-tier error reporting: a non-fatal sink that records and continues,
//! and fatal sinks that print and terminate the process.
//!
//! This mirrors the error taxonomy the lexer and parser are specified
//! against: a recoverable scan error prints a message and lets the caller
//! substitute a safe default; a syntax error the parser cannot recover
//! from, or an allocation failure, prints a message and ends the process.

use std::fmt;

/// A recorded non-fatal diagnostic.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub message: String,
    pub span: crate::Span,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Accumulates recoverable diagnostics and reports fatal ones.
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recoverable lex error: prints `"Syntax Error: {message}"`, records
    /// it, and returns so the caller can substitute a safe default.
    pub fn syntax_error(&mut self, message: impl Into<String>, span: crate::Span) {
        let diag = Diagnostic {
            message: message.into(),
            span,
        };
        eprintln!("Syntax Error: {}", diag.message);
        self.diagnostics.push(diag);
    }

    /// Unrecoverable parse error: prints `"Syntax Error: {message}"` and
    /// terminates the process with a non-zero status.
    pub fn fatal_syntax_error(&self, message: impl fmt::Display) -> ! {
        eprintln!("Syntax Error: {message}");
        std::process::exit(1);
    }

    pub fn had_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}

/// Allocation failure: prints `"FATAL: {message}"` and terminates. Not
/// tied to a `Handler` since by the time allocation fails there may be no
/// reasonable way to keep accumulating diagnostics.
pub fn fatal(message: impl fmt::Display) -> ! {
    eprintln!("FATAL: {message}");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn syntax_error_is_recorded() {
        let mut handler = Handler::new();
        assert!(!handler.had_errors());
        handler.syntax_error("bad digit", crate::Span::DUMMY);
        assert!(handler.had_errors());
        assert_eq!(handler.diagnostics().len(), 1);
    }
}
