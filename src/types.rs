#![forbid(unsafe_code)]

//! Core domain types for Cellmark
//!
//! This module defines the fundamental types used throughout the Cellmark system.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kinds of formatters that can be configured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatterKind {
    Image,
    Match,
    Color,
    Time,
    Template,
    Checkbox,
}

impl FormatterKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatterKind::Image => "image",
            FormatterKind::Match => "match",
            FormatterKind::Color => "color",
            FormatterKind::Time => "time",
            FormatterKind::Template => "template",
            FormatterKind::Checkbox => "checkbox",
        }
    }

    /// Whether formatters of this kind are driven by an ordered rule set
    pub fn uses_rules(&self) -> bool {
        matches!(
            self,
            FormatterKind::Image | FormatterKind::Match | FormatterKind::Color
        )
    }
}

impl fmt::Display for FormatterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validated formatter or validator identifier
///
/// Identifiers must be non-empty and contain only alphanumeric characters, hyphens, and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Creates a new Identifier, validating the input
    ///
    /// Returns None if the input is empty or contains invalid characters
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.is_empty() {
            return None;
        }
        if !id
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
        {
            return None;
        }
        Some(Identifier(id))
    }

    /// Returns the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for Identifier {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Identifier::new(value.clone()).ok_or_else(|| format!("Invalid identifier '{}'", value))
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

/// A literal token in a template string marking the substitution point
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Placeholder(String);

impl Placeholder {
    /// The placeholder used when none is configured
    pub const DEFAULT: &'static str = "{value}";

    pub fn new(token: impl Into<String>) -> Self {
        Placeholder(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Placeholder {
    fn default() -> Self {
        Placeholder(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for Placeholder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Placeholder {
    fn from(token: &str) -> Self {
        Placeholder(token.to_string())
    }
}

/// A hex color without the leading `#`
///
/// Accepts 3, 6 or 8 hexadecimal digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct HexColor(String);

impl HexColor {
    pub fn new(color: impl Into<String>) -> Option<Self> {
        let color = color.into();
        let valid_len = matches!(color.len(), 3 | 6 | 8);
        if valid_len && color.chars().all(|c| c.is_ascii_hexdigit()) {
            Some(HexColor(color))
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl TryFrom<String> for HexColor {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        HexColor::new(value.clone()).ok_or_else(|| format!("Invalid hex color '{}'", value))
    }
}

impl From<HexColor> for String {
    fn from(color: HexColor) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_validation() {
        assert!(Identifier::new("country-flag").is_some());
        assert!(Identifier::new("status_2").is_some());
        assert!(Identifier::new("").is_none());
        assert!(Identifier::new("two words").is_none());
        assert!(Identifier::new("bad@id").is_none());
    }

    #[test]
    fn test_placeholder_default() {
        assert_eq!(Placeholder::default().as_str(), "{value}");
    }

    #[test]
    fn test_hex_color() {
        assert!(HexColor::new("F00").is_some());
        assert!(HexColor::new("ff0000").is_some());
        assert!(HexColor::new("FF000080").is_some());
        assert!(HexColor::new("").is_none());
        assert!(HexColor::new("FF00").is_none());
        assert!(HexColor::new("GG0000").is_none());
        assert_eq!(HexColor::new("00FF00").unwrap().to_string(), "#00FF00");
    }

    #[test]
    fn test_formatter_kind_serde() {
        let kind: FormatterKind = serde_json::from_str("\"checkbox\"").unwrap();
        assert_eq!(kind, FormatterKind::Checkbox);
        assert!(FormatterKind::Color.uses_rules());
        assert!(!FormatterKind::Time.uses_rules());
    }
}
