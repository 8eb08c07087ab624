//! Document loading options.

/// Options for loading source documents.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Error handling mode
    pub error_mode: ErrorMode,

    /// Drop paragraphs with no visible text while loading
    pub skip_empty_paragraphs: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set error mode.
    pub fn with_error_mode(mut self, mode: ErrorMode) -> Self {
        self.error_mode = mode;
        self
    }

    /// Enable lenient mode (repair invalid content instead of failing).
    pub fn lenient(mut self) -> Self {
        self.error_mode = ErrorMode::Lenient;
        self
    }

    /// Drop blank paragraphs while loading.
    pub fn skip_empty_paragraphs(mut self, skip: bool) -> Self {
        self.skip_empty_paragraphs = skip;
        self
    }

    /// Check if lenient mode is enabled.
    pub fn is_lenient(&self) -> bool {
        self.error_mode == ErrorMode::Lenient
    }
}

/// Error handling mode during loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorMode {
    /// Fail on any invalid content
    #[default]
    Strict,
    /// Repair invalid content and continue
    Lenient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_strict() {
        let options = ParseOptions::default();
        assert_eq!(options.error_mode, ErrorMode::Strict);
        assert!(!options.is_lenient());
        assert!(!options.skip_empty_paragraphs);
    }

    #[test]
    fn test_builder() {
        let options = ParseOptions::new().lenient().skip_empty_paragraphs(true);
        assert!(options.is_lenient());
        assert!(options.skip_empty_paragraphs);
    }
}
