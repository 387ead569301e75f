use crate::config::{ScannerConfig, UnknownCharPolicy};
use crate::report::{Diagnostics, ErrorReporter};
use crate::token::{Literal, Span, Token, TokenKind};
use crate::{LexErrorKind, LexerError};

/// Scan `source` with the default configuration, reporting lexical errors
/// to `reporter`. Always returns a sequence ending in [`TokenKind::Eof`].
pub fn scan(source: &str, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
    Scanner::new(source).scan_tokens(reporter)
}

/// Lox source scanner.
///
/// A scanner is built for one source text and consumed by
/// [`Scanner::scan_tokens`]. `start` and `current` are byte offsets into
/// `source`, always on character boundaries, with `start <= current`.
pub struct Scanner<'a> {
    source: &'a str,
    config: ScannerConfig,
    start: usize,
    current: usize,
    line: usize,
    /// Line on which the lexeme at `start` began.
    start_line: usize,
    tokens: Vec<Token>,
}

impl<'a> Scanner<'a> {
    /// Create a new scanner for the given source.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScannerConfig::default())
    }

    /// Create a scanner with explicit options.
    pub fn with_config(source: &'a str, config: ScannerConfig) -> Self {
        Self {
            source,
            config,
            start: 0,
            current: 0,
            line: 1,
            start_line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the entire source, failing with the first reported error.
    pub fn tokenize(source: &str) -> Result<Vec<Token>, LexerError> {
        let mut diagnostics = Diagnostics::new();
        let tokens = Scanner::new(source).scan_tokens(&mut diagnostics);
        match diagnostics.into_errors().into_iter().next() {
            Some(err) => Err(err),
            None => Ok(tokens),
        }
    }

    /// Scan all tokens from the source.
    pub fn scan_tokens(mut self, reporter: &mut dyn ErrorReporter) -> Vec<Token> {
        while !self.is_at_end() {
            self.start = self.current;
            self.start_line = self.line;
            self.scan_token(reporter);
        }

        let end = self.source.len();
        self.tokens.push(Token::new(
            TokenKind::Eof,
            "",
            None,
            self.line,
            Span::new(end, end),
        ));
        self.tokens
    }

    /// Recognize at most one token starting at `start`.
    fn scan_token(&mut self, reporter: &mut dyn ErrorReporter) {
        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Single-character punctuation
            '(' => self.add_token(TokenKind::LeftParen),
            ')' => self.add_token(TokenKind::RightParen),
            '{' => self.add_token(TokenKind::LeftBrace),
            '}' => self.add_token(TokenKind::RightBrace),
            ',' => self.add_token(TokenKind::Comma),
            '.' => self.add_token(TokenKind::Dot),
            '-' => self.add_token(TokenKind::Minus),
            '+' => self.add_token(TokenKind::Plus),
            ';' => self.add_token(TokenKind::Semicolon),
            '*' => self.add_token(TokenKind::Star),

            // One or two character operators
            '!' => self.add_either('=', TokenKind::BangEqual, TokenKind::Bang),
            '=' => self.add_either('=', TokenKind::EqualEqual, TokenKind::Equal),
            '<' => self.add_either('=', TokenKind::LessEqual, TokenKind::Less),
            '>' => self.add_either('=', TokenKind::GreaterEqual, TokenKind::Greater),

            // Comments run to the end of the line; the newline is left for
            // the next iteration.
            '/' if self.matches('/') => {
                while self.peek().is_some_and(|c| c != '\n') {
                    self.advance();
                }
            }
            '/' => self.add_token(TokenKind::Slash),

            // Whitespace
            ' ' | '\r' | '\t' => {}
            '\n' => self.line += 1,

            '"' => self.scan_string(reporter),

            c if c.is_ascii_digit() => self.scan_number(),

            c if c.is_ascii_alphanumeric() => self.scan_identifier(),

            _ => match self.config.unknown_chars {
                UnknownCharPolicy::Report => {
                    reporter.report(self.line, LexErrorKind::UnexpectedCharacter)
                }
                UnknownCharPolicy::Skip => {}
            },
        }
    }

    // --- Scanners ---

    /// Scan a string literal. The literal value is the raw text between the
    /// quotes; escapes are not interpreted.
    fn scan_string(&mut self, reporter: &mut dyn ErrorReporter) {
        while let Some(c) = self.peek() {
            if c == '"' {
                break;
            }
            if c == '\n' {
                self.line += 1;
            }
            self.advance();
        }

        if self.is_at_end() {
            reporter.report(self.line, LexErrorKind::UnterminatedString);
            return;
        }

        self.advance(); // consume closing quote

        let value = &self.source[self.start + 1..self.current - 1];
        self.add_literal(TokenKind::String, Some(Literal::String(value.to_string())));
    }

    /// Scan a number literal. A `.` is part of the number only when a digit
    /// follows it.
    fn scan_number(&mut self) {
        self.eat_digits();

        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance(); // consume the `.`
            self.eat_digits();
        }

        // Digits with an optional fraction always parse.
        let value: f64 = self.lexeme().parse().unwrap_or_default();
        self.add_literal(TokenKind::Number, Some(Literal::Number(value)));
    }

    /// Scan an identifier or reserved word.
    fn scan_identifier(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_alphanumeric()) {
            self.advance();
        }

        let kind = TokenKind::keyword(self.lexeme()).unwrap_or(TokenKind::Identifier);
        self.add_token(kind);
    }

    // --- Helpers ---

    fn eat_digits(&mut self) {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
    }

    fn add_either(&mut self, expected: char, matched: TokenKind, otherwise: TokenKind) {
        let kind = if self.matches(expected) {
            matched
        } else {
            otherwise
        };
        self.add_token(kind);
    }

    fn add_token(&mut self, kind: TokenKind) {
        self.add_literal(kind, None);
    }

    fn add_literal(&mut self, kind: TokenKind, literal: Option<Literal>) {
        let span = Span::new(self.start, self.current);
        self.tokens
            .push(Token::new(kind, self.lexeme(), literal, self.start_line, span));
    }

    fn lexeme(&self) -> &'a str {
        &self.source[self.start..self.current]
    }

    /// Consume the next character only if it is `expected`.
    fn matches(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn peek(&self) -> Option<char> {
        self.source[self.current..].chars().next()
    }

    fn peek_next(&self) -> Option<char> {
        let mut rest = self.source[self.current..].chars();
        rest.next();
        rest.next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.current += c.len_utf8();
        Some(c)
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.source.len()
    }
}
