use crate::{LexErrorKind, LexerError};

/// Sink for line-tagged lexical errors.
///
/// The scanner calls `report` synchronously, zero or more times per scan,
/// and keeps going afterwards.
pub trait ErrorReporter {
    fn report(&mut self, line: usize, kind: LexErrorKind);
}

/// Any `FnMut(line, message)` closure is a reporter.
impl<F> ErrorReporter for F
where
    F: FnMut(usize, &str),
{
    fn report(&mut self, line: usize, kind: LexErrorKind) {
        self(line, &kind.to_string());
    }
}

/// Reporter that records every error in order.
#[derive(Debug, Clone, Default)]
pub struct Diagnostics {
    errors: Vec<LexerError>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn errors(&self) -> &[LexerError] {
        &self.errors
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<LexerError> {
        self.errors
    }
}

impl ErrorReporter for Diagnostics {
    fn report(&mut self, line: usize, kind: LexErrorKind) {
        self.errors.push(LexerError::new(kind, line));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_closure_receives_message_text() {
        let mut seen = Vec::new();
        let mut sink = |line: usize, message: &str| seen.push((line, message.to_string()));
        sink.report(3, LexErrorKind::UnterminatedString);
        sink.report(4, LexErrorKind::UnexpectedCharacter);
        assert_eq!(
            seen,
            vec![
                (3, "Unterminated string.".to_string()),
                (4, "Unexpected character.".to_string()),
            ]
        );
    }

    #[test]
    fn test_diagnostics_collects_in_order() {
        let mut diagnostics = Diagnostics::new();
        assert!(!diagnostics.has_errors());
        diagnostics.report(2, LexErrorKind::UnexpectedCharacter);
        diagnostics.report(1, LexErrorKind::UnterminatedString);
        assert!(diagnostics.has_errors());
        assert_eq!(
            diagnostics.into_errors(),
            vec![
                LexerError::new(LexErrorKind::UnexpectedCharacter, 2),
                LexerError::new(LexErrorKind::UnterminatedString, 1),
            ]
        );
    }

    #[test]
    fn test_error_display() {
        let err = LexerError::new(LexErrorKind::UnterminatedString, 7);
        assert_eq!(err.to_string(), "[line 7] Error: Unterminated string.");
    }
}
