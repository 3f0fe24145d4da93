#![forbid(unsafe_code)]

//! Pattern-based field validators

use crate::config::ValidatorDefinition;
use crate::error::{RuleError, ValidationError};
use crate::types::Identifier;
use regex::Regex;

/// Validates field values against a set of alternative patterns
///
/// A value is accepted when any pattern matches it. The optional mask
/// restricts which characters may be typed into the field.
#[derive(Debug, Clone)]
pub struct FieldValidator {
    id: Identifier,
    description: String,
    patterns: Vec<Regex>,
    message: String,
    mask: Option<Regex>,
}

impl FieldValidator {
    /// Builds a validator from pattern sources
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` if a pattern does not compile and
    /// `RuleError::InvalidDefinition` for an empty pattern list or bad mask.
    pub fn new(
        id: Identifier,
        patterns: &[&str],
        message: impl Into<String>,
        mask: Option<&str>,
    ) -> Result<Self, RuleError> {
        if patterns.is_empty() {
            return Err(RuleError::InvalidDefinition(format!(
                "validator '{}' has no patterns",
                id
            )));
        }

        let patterns = patterns
            .iter()
            .enumerate()
            .map(|(index, p)| {
                Regex::new(p).map_err(|e| RuleError::InvalidPattern {
                    index,
                    pattern: (*p).to_string(),
                    message: e.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mask = mask
            .map(|m| {
                Regex::new(m).map_err(|e| {
                    RuleError::InvalidDefinition(format!(
                        "invalid mask '{}' for validator '{}': {}",
                        m, id, e
                    ))
                })
            })
            .transpose()?;

        Ok(Self {
            id,
            description: String::new(),
            patterns,
            message: message.into(),
            mask,
        })
    }

    pub fn from_definition(
        id: Identifier,
        definition: &ValidatorDefinition,
    ) -> Result<Self, RuleError> {
        let patterns: Vec<&str> = definition.patterns.iter().map(String::as_str).collect();
        Ok(
            Self::new(id, &patterns, definition.message.clone(), definition.mask.as_deref())?
                .with_description(definition.description.clone()),
        )
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn id(&self) -> &Identifier {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn has_mask(&self) -> bool {
        self.mask.is_some()
    }

    pub fn is_valid(&self, value: &str) -> bool {
        self.patterns.iter().any(|re| re.is_match(value))
    }

    /// # Errors
    ///
    /// Returns a `ValidationError` carrying this validator's message when no
    /// pattern matches.
    pub fn validate(&self, value: &str) -> Result<(), ValidationError> {
        if self.is_valid(value) {
            Ok(())
        } else {
            Err(ValidationError {
                validator: self.id.to_string(),
                message: self.message.clone(),
            })
        }
    }

    /// Whether a single typed character passes the mask
    pub fn accepts_char(&self, c: char) -> bool {
        match &self.mask {
            Some(mask) => {
                let mut buf = [0u8; 4];
                mask.is_match(c.encode_utf8(&mut buf))
            }
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn test_any_pattern_accepts() {
        let v = FieldValidator::new(id("code"), &["^[A-Z]{3}$", "^[0-9]{4}$"], "Bad code", None)
            .unwrap();
        assert!(v.is_valid("ABC"));
        assert!(v.is_valid("1234"));
        assert!(!v.is_valid("AB12"));
    }

    #[test]
    fn test_validate_error_carries_message() {
        let v = FieldValidator::new(id("code"), &["^x$"], "Only x allowed.", None).unwrap();
        let err = v.validate("y").unwrap_err();
        assert_eq!(err.validator, "code");
        assert_eq!(err.message, "Only x allowed.");
        assert_eq!(err.to_string(), "code: Only x allowed.");
        assert!(v.validate("x").is_ok());
    }

    #[test]
    fn test_mask() {
        let v = FieldValidator::new(id("digits"), &["^[0-9]+$"], "m", Some("[0-9]")).unwrap();
        assert!(v.has_mask());
        assert!(v.accepts_char('7'));
        assert!(!v.accepts_char('a'));

        let open = FieldValidator::new(id("open"), &["."], "m", None).unwrap();
        assert!(open.accepts_char('€'));
    }

    #[test]
    fn test_construction_errors() {
        assert!(matches!(
            FieldValidator::new(id("none"), &[], "m", None),
            Err(RuleError::InvalidDefinition(_))
        ));
        assert!(matches!(
            FieldValidator::new(id("bad"), &["ok", "(bad"], "m", None),
            Err(RuleError::InvalidPattern { index: 1, .. })
        ));
        assert!(matches!(
            FieldValidator::new(id("mask"), &["ok"], "m", Some("[")),
            Err(RuleError::InvalidDefinition(_))
        ));
    }

    #[test]
    fn test_from_definition() {
        let def = ValidatorDefinition {
            description: "Postal code".to_string(),
            patterns: vec!["^[0-9]{5}$".to_string()],
            message: "Invalid postal code.".to_string(),
            mask: Some("[0-9]".to_string()),
        };
        let v = FieldValidator::from_definition(id("zip"), &def).unwrap();
        assert_eq!(v.description(), "Postal code");
        assert_eq!(v.message(), "Invalid postal code.");
        assert!(v.is_valid("00184"));
        assert!(!v.is_valid("0018"));
    }
}
