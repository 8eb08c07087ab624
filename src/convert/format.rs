//! Output format selection.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Built-in output dialects.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// HTML fragment
    #[default]
    Html,
    /// Markdown
    Markdown,
    /// Wikitext (placeholder output)
    Wikitext,
}

impl Format {
    /// All built-in formats.
    pub const ALL: [Format; 3] = [Format::Html, Format::Markdown, Format::Wikitext];

    /// Registry name of the format.
    pub fn name(self) -> &'static str {
        match self {
            Format::Html => "html",
            Format::Markdown => "markdown",
            Format::Wikitext => "wikitext",
        }
    }
}

impl FromStr for Format {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" => Ok(Format::Html),
            "markdown" => Ok(Format::Markdown),
            "wikitext" => Ok(Format::Wikitext),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!("html".parse::<Format>().unwrap(), Format::Html);
        assert_eq!("Markdown".parse::<Format>().unwrap(), Format::Markdown);
        assert_eq!("WIKITEXT".parse::<Format>().unwrap(), Format::Wikitext);
    }

    #[test]
    fn test_parse_unknown() {
        let err = "pdf".parse::<Format>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown format: 'pdf'");
        assert!("".parse::<Format>().is_err());
        assert!("md".parse::<Format>().is_err());
    }

    #[test]
    fn test_name_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
            assert_eq!(format.to_string(), format.name());
        }
    }
}
