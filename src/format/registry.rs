#![forbid(unsafe_code)]

//! Formatter registry
//!
//! The FormatterRegistry builds formatters from configuration and gives
//! access to them by identifier. Formatters are stored as trait objects so
//! different kinds can live side by side.

use crate::config::{Config, FormatterDefinition};
use crate::error::RuleError;
use crate::format::color::ColorFormatter;
use crate::format::formatter::{
    CheckboxFormatter, MatchFormatter, TemplateFormatter, TimeFormatter, ValueFormatter,
};
use crate::format::image::ImageFormatter;
use crate::rules::RuleSet;
use crate::types::Identifier;
use std::collections::BTreeMap;

/// Registry of formatters keyed by identifier, iterated in id order
pub struct FormatterRegistry {
    formatters: BTreeMap<Identifier, Box<dyn ValueFormatter>>,
}

impl FormatterRegistry {
    /// Create a new empty FormatterRegistry
    pub fn new() -> Self {
        Self {
            formatters: BTreeMap::new(),
        }
    }

    /// Build every formatter defined in the configuration
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` if a formatter's rules do not compile.
    /// `Config::parse` checks the same patterns but keeps only definitions, and
    /// a `Config` built directly is never checked, so rules are compiled here.
    pub fn from_config(config: &Config) -> Result<Self, RuleError> {
        let mut registry = Self::new();
        for (id, definition) in &config.formatters {
            let formatter = build_formatter(id.clone(), definition, config)?;
            registry.add(formatter);
        }
        log::debug!("built {} formatters", registry.len());
        Ok(registry)
    }

    /// Add a formatter, replacing any formatter with the same id
    pub fn add(&mut self, formatter: Box<dyn ValueFormatter>) {
        self.formatters.insert(formatter.id().clone(), formatter);
    }

    pub fn get(&self, id: &str) -> Option<&dyn ValueFormatter> {
        let id = Identifier::new(id)?;
        self.formatters.get(&id).map(|f| f.as_ref())
    }

    /// Like [`get`](Self::get) but reports a missing formatter as an error
    pub fn require(&self, id: &str) -> Result<&dyn ValueFormatter, RuleError> {
        self.get(id)
            .ok_or_else(|| RuleError::NotFound(format!("formatter '{}'", id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn ValueFormatter> {
        self.formatters.values().map(|f| f.as_ref())
    }

    pub fn len(&self) -> usize {
        self.formatters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.formatters.is_empty()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn build_formatter(
    id: Identifier,
    definition: &FormatterDefinition,
    config: &Config,
) -> Result<Box<dyn ValueFormatter>, RuleError> {
    let placeholder = config.cellmark.placeholder.clone();
    let description = definition.description();

    let formatter: Box<dyn ValueFormatter> = match definition {
        FormatterDefinition::Image {
            include_value,
            rules,
            ..
        } => Box::new(
            ImageFormatter::new(id, RuleSet::from_definitions(rules)?, *include_value)
                .with_description(description)
                .with_placeholder(placeholder),
        ),
        FormatterDefinition::Match { rules, .. } => Box::new(
            MatchFormatter::new(id, RuleSet::from_definitions(rules)?)
                .with_description(description),
        ),
        FormatterDefinition::Color { rules, .. } => Box::new(
            ColorFormatter::new(id, RuleSet::from_definitions(rules)?)
                .with_description(description)
                .with_class_prefix(config.cellmark.color_class_prefix.clone()),
        ),
        FormatterDefinition::Time { format, .. } => {
            Box::new(TimeFormatter::new(id, format.clone()).with_description(description))
        }
        FormatterDefinition::Template { template, .. } => Box::new(
            TemplateFormatter::new(id, template.clone())
                .with_description(description)
                .with_placeholder(placeholder),
        ),
        FormatterDefinition::Checkbox { .. } => {
            Box::new(CheckboxFormatter::new(id).with_description(description))
        }
    };

    Ok(formatter)
}
