#![forbid(unsafe_code)]

//! Built-in validators and the validator registry

use crate::config::Config;
use crate::error::RuleError;
use crate::types::Identifier;
use crate::validate::FieldValidator;
use std::collections::BTreeMap;

/// Italian personal tax code
const CODICE_FISCALE: &str = r"^[a-zA-Z]{6}[0-9]{2}[abcdehlmprstABCDEHLMPRST]{1}[0-9]{2}([a-zA-Z]{1}[0-9]{3})[a-zA-Z]{1}$";
/// Italian VAT number, accepted in place of a tax code
const PARTITA_IVA: &str = r"^[0-9]{11}$";
const ALPHA_SPACE: &str = r"^[a-zA-Z_ ]+$";
const PHONE_NUMBER: &str = r"^\+[0-9]+-[0-9]+$";

struct BuiltinValidator {
    id: &'static str,
    description: &'static str,
    patterns: &'static [&'static str],
    message: &'static str,
    mask: &'static str,
}

const BUILTINS: &[BuiltinValidator] = &[
    BuiltinValidator {
        id: "codice-fiscale",
        description: "Italian tax code or VAT number",
        patterns: &[CODICE_FISCALE, PARTITA_IVA],
        message: "Malformed tax code.",
        mask: "(?i)[a-z0-9]",
    },
    BuiltinValidator {
        id: "alpha-space",
        description: "Letters and spaces only",
        patterns: &[ALPHA_SPACE],
        message: "This field only accepts letters and spaces.",
        mask: "(?i)[a-z ]",
    },
    BuiltinValidator {
        id: "phone-number",
        description: "International phone number (+prefix-number)",
        patterns: &[PHONE_NUMBER],
        message: "Invalid phone number.",
        mask: r"[a-z0-9\-\+]",
    },
];

/// Returns the built-in validators
///
/// # Errors
///
/// Only fails if a built-in pattern is malformed.
pub fn builtin_validators() -> Result<Vec<FieldValidator>, RuleError> {
    BUILTINS
        .iter()
        .map(|builtin| {
            let id = Identifier::new(builtin.id).ok_or_else(|| {
                RuleError::InvalidDefinition(format!("invalid builtin id '{}'", builtin.id))
            })?;
            Ok(
                FieldValidator::new(id, builtin.patterns, builtin.message, Some(builtin.mask))?
                    .with_description(builtin.description),
            )
        })
        .collect()
}

/// Registry of validators keyed by identifier
#[derive(Debug, Default)]
pub struct ValidatorRegistry {
    validators: BTreeMap<Identifier, FieldValidator>,
}

impl ValidatorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding only the built-in validators
    pub fn with_builtins() -> Result<Self, RuleError> {
        let mut registry = Self::new();
        for validator in builtin_validators()? {
            registry.add(validator);
        }
        Ok(registry)
    }

    /// Built-in validators plus those defined in the configuration
    ///
    /// A configured validator replaces a built-in with the same id.
    pub fn from_config(config: &Config) -> Result<Self, RuleError> {
        let mut registry = Self::with_builtins()?;
        for (id, definition) in &config.validators {
            if registry.validators.contains_key(id) {
                log::warn!("validator '{}' overrides the built-in definition", id);
            }
            registry.add(FieldValidator::from_definition(id.clone(), definition)?);
        }
        Ok(registry)
    }

    pub fn add(&mut self, validator: FieldValidator) {
        self.validators.insert(validator.id().clone(), validator);
    }

    pub fn get(&self, id: &str) -> Option<&FieldValidator> {
        let id = Identifier::new(id)?;
        self.validators.get(&id)
    }

    pub fn require(&self, id: &str) -> Result<&FieldValidator, RuleError> {
        self.get(id)
            .ok_or_else(|| RuleError::NotFound(format!("validator '{}'", id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldValidator> {
        self.validators.values()
    }

    pub fn len(&self) -> usize {
        self.validators.len()
    }

    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}
