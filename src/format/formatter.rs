#![forbid(unsafe_code)]

//! The ValueFormatter trait and the simple formatter implementations

use crate::format::color::StyleRule;
use crate::format::template::apply_template_with;
use crate::format::text::{checkbox_markup, parse_flag};
use crate::format::time::format_time;
use crate::rules::RuleSet;
use crate::types::{FormatterKind, Identifier, Placeholder};

/// Trait that all formatters must implement
///
/// Formatters turn a raw cell value into the string a renderer displays.
/// The trait is `Send + Sync` so one formatter can serve many threads.
pub trait ValueFormatter: Send + Sync {
    /// Returns the unique identifier for this formatter
    fn id(&self) -> &Identifier;

    /// Returns a human-readable description of this formatter
    fn description(&self) -> &str;

    fn kind(&self) -> FormatterKind;

    /// Renders `value` for display
    fn render(&self, value: &str) -> String;

    /// Number of rules consulted by this formatter
    fn rule_count(&self) -> usize {
        0
    }

    /// Style rule the renderer must install for the rendered output, if any
    fn style_rule(&self, _value: &str) -> Option<StyleRule> {
        None
    }
}

/// Renders the result of the first matching rule, or an empty string
#[derive(Debug)]
pub struct MatchFormatter {
    id: Identifier,
    description: String,
    rules: RuleSet,
}

impl MatchFormatter {
    pub fn new(id: Identifier, rules: RuleSet) -> Self {
        Self {
            id,
            description: String::new(),
            rules,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ValueFormatter for MatchFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Match
    }

    fn render(&self, value: &str) -> String {
        self.rules.find(value).result_or_empty().to_string()
    }

    fn rule_count(&self) -> usize {
        self.rules.len()
    }
}

/// Normalizes `hh:mm:ss` times to a display format
#[derive(Debug)]
pub struct TimeFormatter {
    id: Identifier,
    description: String,
    format: String,
}

impl TimeFormatter {
    pub fn new(id: Identifier, format: impl Into<String>) -> Self {
        Self {
            id,
            description: String::new(),
            format: format.into(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ValueFormatter for TimeFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Time
    }

    fn render(&self, value: &str) -> String {
        format_time(value, &self.format)
    }
}

/// Wraps every value in a fixed display template
#[derive(Debug)]
pub struct TemplateFormatter {
    id: Identifier,
    description: String,
    template: String,
    placeholder: Placeholder,
}

impl TemplateFormatter {
    pub fn new(id: Identifier, template: impl Into<String>) -> Self {
        Self {
            id,
            description: String::new(),
            template: template.into(),
            placeholder: Placeholder::default(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_placeholder(mut self, placeholder: Placeholder) -> Self {
        self.placeholder = placeholder;
        self
    }
}

impl ValueFormatter for TemplateFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Template
    }

    fn render(&self, value: &str) -> String {
        apply_template_with(value, &self.template, &self.placeholder)
    }
}

/// Renders boolean-like values as a check mark element
#[derive(Debug)]
pub struct CheckboxFormatter {
    id: Identifier,
    description: String,
}

impl CheckboxFormatter {
    pub fn new(id: Identifier) -> Self {
        Self {
            id,
            description: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl ValueFormatter for CheckboxFormatter {
    fn id(&self) -> &Identifier {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn kind(&self) -> FormatterKind {
        FormatterKind::Checkbox
    }

    fn render(&self, value: &str) -> String {
        checkbox_markup(parse_flag(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::RuleDefinition;

    fn id(s: &str) -> Identifier {
        Identifier::new(s).unwrap()
    }

    #[test]
    fn test_match_formatter() {
        let rules = RuleSet::from_definitions(&[
            RuleDefinition::new("urgent", "^P1$"),
            RuleDefinition::new("normal", "^P[2-3]$"),
        ])
        .unwrap();
        let f = MatchFormatter::new(id("priority"), rules).with_description("Priority class");

        assert_eq!(f.render("P1"), "urgent");
        assert_eq!(f.render("P3"), "normal");
        assert_eq!(f.render("P9"), "");
        assert_eq!(f.kind(), FormatterKind::Match);
        assert_eq!(f.rule_count(), 2);
        assert_eq!(f.description(), "Priority class");
        assert!(f.style_rule("P1").is_none());
    }

    #[test]
    fn test_time_formatter() {
        let f = TimeFormatter::new(id("shift"), "hh:mm");
        assert_eq!(f.render("08.30.15"), "08:30");
        assert_eq!(f.kind(), FormatterKind::Time);
    }

    #[test]
    fn test_template_formatter() {
        let f = TemplateFormatter::new(id("amount"), "{value} EUR");
        assert_eq!(f.render("12.50"), "12.50 EUR");

        let f = TemplateFormatter::new(id("amount"), "<%v%>").with_placeholder("%v".into());
        assert_eq!(f.render("3"), "<3%>");
    }

    #[test]
    fn test_checkbox_formatter() {
        let f = CheckboxFormatter::new(id("active"));
        assert!(f.render("true").contains("cell-check-on"));
        assert!(!f.render("false").contains("cell-check-on"));
    }

    #[test]
    fn test_formatter_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Box<dyn ValueFormatter>>();
        assert_sync::<Box<dyn ValueFormatter>>();
    }
}
