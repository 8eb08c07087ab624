//! Rendering options and configuration.

/// Options for rendering markup.
///
/// The defaults produce the canonical output of each dialect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Indentation added per list nesting level
    pub indent: String,

    /// Character to use for Markdown list markers
    pub list_marker: char,

    /// Escape characters that are special in the target dialect
    pub escape_text: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Indent nested lists with `width` spaces per level.
    pub fn with_indent_width(mut self, width: usize) -> Self {
        self.indent = " ".repeat(width);
        self
    }

    /// Indent nested lists with a custom string per level.
    pub fn with_indent(mut self, indent: impl Into<String>) -> Self {
        self.indent = indent.into();
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable escaping of special characters.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_text = escape;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            indent: "  ".to_string(),
            list_marker: '*',
            escape_text: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_options_defaults() {
        let options = RenderOptions::default();
        assert_eq!(options.indent, "  ");
        assert_eq!(options.list_marker, '*');
        assert!(!options.escape_text);
    }

    #[test]
    fn test_render_options_builder() {
        let options = RenderOptions::new()
            .with_indent_width(4)
            .with_list_marker('-')
            .with_escaping(true);

        assert_eq!(options.indent, "    ");
        assert_eq!(options.list_marker, '-');
        assert!(options.escape_text);

        let tabbed = RenderOptions::new().with_indent("\t");
        assert_eq!(tabbed.indent, "\t");
    }
}
