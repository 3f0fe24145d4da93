#![forbid(unsafe_code)]

//! Background color classification
//!
//! A value matched against color rules yields a CSS class name plus the
//! style rule that defines it. Rules are collected in a [`StyleSheet`] owned
//! by the caller rather than installed globally.

use crate::format::formatter::ValueFormatter;
use crate::rules::RuleSet;
use crate::types::{FormatterKind, Identifier};
use serde::Serialize;
use std::collections::HashSet;

/// Class prefix used when none is configured
pub const DEFAULT_CLASS_PREFIX: &str = "cell-color-";

/// A CSS rule setting a background color
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct StyleRule {
    pub class_name: String,
    pub selector: String,
    pub declaration: String,
}

impl StyleRule {
    pub fn background(class_prefix: &str, color: &str) -> Self {
        let class_name = format!("{}{}", class_prefix, color);
        Self {
            selector: format!(".{}", class_name),
            declaration: format!("{{ background-color: #{}; }}", color),
            class_name,
        }
    }

    pub fn to_css(&self) -> String {
        format!("{} {}", self.selector, self.declaration)
    }
}

/// Returns the style rule for the color of the first rule matching `value`
///
/// No match, or a match with an empty color, yields `None`.
pub fn color_style_rule(value: &str, rules: &RuleSet, class_prefix: &str) -> Option<StyleRule> {
    rules
        .find(value)
        .result()
        .filter(|color| !color.is_empty())
        .map(|color| StyleRule::background(class_prefix, color))
}

/// Ordered set of style rules, keyed by selector
///
/// The first rule inserted for a selector wins.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    rules: Vec<StyleRule>,
    selectors: HashSet<String>,
}

impl StyleSheet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule unless its selector is already defined
    ///
    /// Returns `false` if the selector already existed.
    pub fn insert(&mut self, rule: StyleRule) -> bool {
        if !self.selectors.insert(rule.selector.clone()) {
            return false;
        }
        self.rules.push(rule);
        true
    }

    pub fn contains(&self, selector: &str) -> bool {
        self.selectors.contains(selector)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[StyleRule] {
        &self.rules
    }

    /// Renders one line per rule in insertion order
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for rule in &self.rules {
            css.push_str(&rule.to_css());
            css.push('\n');
        }
        css
    }
}

/// Renders the class name of the matching color, or an empty string
#[derive(Debug)]
pub struct ColorFormatter {
    id: Identifier,
    description: String,
    rules: RuleSet,
    class_prefix: String,
}

impl ColorFormatter {
    pub fn new(id: Identifier, rules: RuleSet) -> Self {
        Self {
            id,
            description: String::new(),
            rules,
            class_prefix: DEFAULT_CLASS_PREFIX.to_string(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_class_prefix(mut self, class_prefix: impl Into<String>) -> Self {
        self.class_prefix = class_prefix.into();
        self
    }
}

impl ValueFormatter for ColorFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Color
    }

    fn render(&self, value: &str) -> String {
        self.style_rule(value)
            .map(|rule| rule.class_name)
            .unwrap_or_default()
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn style_rule(&self, value: &str) -> Option<StyleRule> {
        color_style_rule(value, &self.rules, &self.class_prefix)
    }
}
