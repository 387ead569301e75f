//! Lox Lexer
//!
//! Tokenizes Lox source text into a stream of tokens for a downstream parser.
//! Handles punctuation, one- and two-character operators, line comments,
//! number and string literals, identifiers and reserved words.
//!
//! Lexical errors never stop a scan. They are handed to an [`ErrorReporter`]
//! tagged with the line they occurred on, and scanning resumes with the next
//! character.
//!
//! # Example
//!
//! ```
//! use lox_lexer::{Diagnostics, Scanner, TokenKind};
//!
//! let tokens = Scanner::tokenize("").unwrap();
//! assert_eq!(tokens.len(), 1); // Just EOF
//!
//! let mut diagnostics = Diagnostics::new();
//! let tokens = lox_lexer::scan("print \"hi", &mut diagnostics);
//! assert_eq!(tokens[0].kind, TokenKind::Print);
//! assert_eq!(tokens[1].kind, TokenKind::Eof);
//! assert_eq!(diagnostics.errors()[0].to_string(), "[line 1] Error: Unterminated string.");
//! ```

pub mod config;
pub mod report;
pub mod scanner;
pub mod token;

pub use config::{ScannerConfig, UnknownCharPolicy};
pub use report::{Diagnostics, ErrorReporter};
pub use scanner::{scan, Scanner};
pub use token::{Literal, Span, Token, TokenKind, KEYWORDS};

/// The recoverable lexical conditions. `Display` is the exact message handed
/// to an [`ErrorReporter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LexErrorKind {
    #[error("Unterminated string.")]
    UnterminatedString,
    #[error("Unexpected character.")]
    UnexpectedCharacter,
}

/// Lexer error with line information.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("[line {line}] Error: {kind}")]
pub struct LexerError {
    pub kind: LexErrorKind,
    pub line: usize,
}

impl LexerError {
    pub fn new(kind: LexErrorKind, line: usize) -> Self {
        Self { kind, line }
    }
}
