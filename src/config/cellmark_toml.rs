//! Parsing and validation for cellmark.toml configuration files

use crate::error::ConfigError;
use crate::format::color::DEFAULT_CLASS_PREFIX;
use crate::rules::{RuleDefinition, RuleSet};
use crate::types::{FormatterKind, HexColor, Identifier, Placeholder};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Main configuration struct for cellmark.toml
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Cellmark metadata
    pub cellmark: CellmarkMeta,

    /// Named formatters
    #[serde(default)]
    pub formatters: BTreeMap<Identifier, FormatterDefinition>,

    /// Named field validators
    #[serde(default)]
    pub validators: BTreeMap<Identifier, ValidatorDefinition>,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Parse configuration from a TOML string
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigError> {
        if self.cellmark.version != "1" {
            return Err(ConfigError::Validation(format!(
                "Unsupported configuration version '{}'. Expected '1'",
                self.cellmark.version
            )));
        }

        if self.cellmark.placeholder.as_str().is_empty() {
            return Err(ConfigError::Validation(
                "Placeholder must not be empty".to_string(),
            ));
        }

        for (id, formatter) in &self.formatters {
            // Compile every rule so bad patterns surface at load time
            RuleSet::from_definitions(formatter.rules()).map_err(|e| {
                ConfigError::Validation(format!("Formatter '{}': {}", id, e))
            })?;

            if formatter.kind() == FormatterKind::Color {
                for (index, rule) in formatter.rules().iter().enumerate() {
                    if let Some(color) = rule.result.as_deref()
                        && !color.is_empty()
                        && HexColor::new(color).is_none()
                    {
                        return Err(ConfigError::Validation(format!(
                            "Formatter '{}': invalid color '{}' in rule {}",
                            id, color, index
                        )));
                    }
                }
            }
        }

        for (id, validator) in &self.validators {
            if validator.patterns.is_empty() {
                return Err(ConfigError::Validation(format!(
                    "Validator '{}' has no patterns",
                    id
                )));
            }

            for pattern in &validator.patterns {
                Regex::new(pattern).map_err(|e| {
                    ConfigError::Validation(format!(
                        "Invalid pattern '{}' in validator '{}': {}",
                        pattern, id, e
                    ))
                })?;
            }

            if let Some(mask) = &validator.mask {
                Regex::new(mask).map_err(|e| {
                    ConfigError::Validation(format!(
                        "Invalid mask '{}' in validator '{}': {}",
                        mask, id, e
                    ))
                })?;
            }
        }

        Ok(())
    }
}

/// Cellmark metadata section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CellmarkMeta {
    /// Configuration version (must be "1")
    pub version: String,

    /// Placeholder token substituted in rule templates
    #[serde(default)]
    pub placeholder: Placeholder,

    /// Prefix for CSS classes produced by color formatters
    #[serde(default = "default_class_prefix")]
    pub color_class_prefix: String,
}

fn default_class_prefix() -> String {
    DEFAULT_CLASS_PREFIX.to_string()
}

fn default_include_value() -> bool {
    true
}

fn default_time_format() -> String {
    "hh:mm".to_string()
}

/// A formatter definition, tagged by `kind`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FormatterDefinition {
    Image {
        #[serde(default)]
        description: String,
        #[serde(default = "default_include_value")]
        include_value: bool,
        #[serde(default)]
        rules: Vec<RuleDefinition>,
    },
    Match {
        #[serde(default)]
        description: String,
        #[serde(default)]
        rules: Vec<RuleDefinition>,
    },
    Color {
        #[serde(default)]
        description: String,
        #[serde(default)]
        rules: Vec<RuleDefinition>,
    },
    Time {
        #[serde(default)]
        description: String,
        #[serde(default = "default_time_format")]
        format: String,
    },
    Template {
        #[serde(default)]
        description: String,
        template: String,
    },
    Checkbox {
        #[serde(default)]
        description: String,
    },
}

impl FormatterDefinition {
    pub fn kind(&self) -> FormatterKind {
        match self {
            FormatterDefinition::Image { .. } => FormatterKind::Image,
            FormatterDefinition::Match { .. } => FormatterKind::Match,
            FormatterDefinition::Color { .. } => FormatterKind::Color,
            FormatterDefinition::Time { .. } => FormatterKind::Time,
            FormatterDefinition::Template { .. } => FormatterKind::Template,
            FormatterDefinition::Checkbox { .. } => FormatterKind::Checkbox,
        }
    }

    pub fn description(&self) -> &str {
        match self {
            FormatterDefinition::Image { description, .. }
            | FormatterDefinition::Match { description, .. }
            | FormatterDefinition::Color { description, .. }
            | FormatterDefinition::Time { description, .. }
            | FormatterDefinition::Template { description, .. }
            | FormatterDefinition::Checkbox { description } => description,
        }
    }

    /// Ordered rules of rule-driven formatters; empty for the others
    pub fn rules(&self) -> &[RuleDefinition] {
        match self {
            FormatterDefinition::Image { rules, .. }
            | FormatterDefinition::Match { rules, .. }
            | FormatterDefinition::Color { rules, .. } => rules,
            _ => &[],
        }
    }
}

fn default_validator_message() -> String {
    "Invalid value.".to_string()
}

/// A field validator definition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorDefinition {
    #[serde(default)]
    pub description: String,

    /// A value is valid when any of these patterns matches
    pub patterns: Vec<String>,

    /// Message reported for rejected values
    #[serde(default = "default_validator_message")]
    pub message: String,

    /// Pattern every typed character must match
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mask: Option<String>,
}
