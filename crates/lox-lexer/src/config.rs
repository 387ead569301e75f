/// What the scanner does with a character no lexical rule accepts
/// (`@`, `#`, `_`, non-ASCII text, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnknownCharPolicy {
    /// Report `Unexpected character.` on the current line, then skip it.
    #[default]
    Report,
    /// Skip it without reporting.
    Skip,
}

/// Scanner options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScannerConfig {
    pub unknown_chars: UnknownCharPolicy,
}

impl ScannerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unknown_chars(mut self, policy: UnknownCharPolicy) -> Self {
        self.unknown_chars = policy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_reports_unknown_chars() {
        assert_eq!(ScannerConfig::default().unknown_chars, UnknownCharPolicy::Report);
    }

    #[test]
    fn test_builder_sets_policy() {
        let config = ScannerConfig::new().unknown_chars(UnknownCharPolicy::Skip);
        assert_eq!(config.unknown_chars, UnknownCharPolicy::Skip);
    }
}
