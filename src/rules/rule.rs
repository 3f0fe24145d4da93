#![forbid(unsafe_code)]

//! Rule definitions and match outcomes

use crate::error::RuleError;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Raw rule as supplied by configuration
///
/// `result` is the image reference for image formatters, the color for color
/// formatters, and the classification result for plain matching. An empty
/// `template` behaves like no template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDefinition {
    #[serde(default, alias = "image", alias = "color")]
    pub result: Option<String>,

    pub pattern: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl RuleDefinition {
    pub fn new(result: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self {
            result: Some(result.into()),
            pattern: pattern.into(),
            template: None,
        }
    }

    /// Attaches a custom display template to this rule
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// A rule that matches but selects no result
    pub fn without_result(pattern: impl Into<String>) -> Self {
        Self {
            result: None,
            pattern: pattern.into(),
            template: None,
        }
    }

    /// Compiles the pattern, reporting failures against rule `index`
    pub(crate) fn compile_pattern(&self, index: usize) -> Result<Regex, RuleError> {
        Regex::new(&self.pattern).map_err(|e| RuleError::InvalidPattern {
            index,
            pattern: self.pattern.clone(),
            message: e.to_string(),
        })
    }
}

/// A rule with its pattern compiled
#[derive(Debug, Clone)]
pub struct Rule {
    result: Option<String>,
    pattern: Regex,
    template: Option<String>,
}

impl Rule {
    /// Compiles a rule definition
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` naming `index` if the pattern does
    /// not compile.
    pub fn compile(definition: &RuleDefinition, index: usize) -> Result<Self, RuleError> {
        let pattern = definition.compile_pattern(index)?;
        Ok(Self {
            result: definition.result.clone(),
            pattern,
            template: non_empty(definition.template.as_deref()).map(str::to_string),
        })
    }

    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn template(&self) -> Option<&str> {
        self.template.as_deref()
    }

    /// Tests the value against this rule's pattern (unanchored search)
    pub fn is_match(&self, value: &str) -> bool {
        self.pattern.is_match(value)
    }
}

/// Details of the rule that won a match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleMatch<'a> {
    /// Position of the winning rule in its rule set
    pub index: usize,
    pub result: Option<&'a str>,
    pub template: Option<&'a str>,
}

/// Outcome of matching a value against an ordered rule set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome<'a> {
    NoMatch,
    Matched(RuleMatch<'a>),
}

impl<'a> MatchOutcome<'a> {
    pub fn is_match(&self) -> bool {
        matches!(self, MatchOutcome::Matched(_))
    }

    /// The winning rule's result, if any rule matched and carries one
    pub fn result(&self) -> Option<&'a str> {
        match self {
            MatchOutcome::Matched(m) => m.result,
            MatchOutcome::NoMatch => None,
        }
    }

    /// The winning rule's result, or an empty string
    pub fn result_or_empty(&self) -> &'a str {
        self.result().unwrap_or("")
    }

    /// The winning rule's custom template, if present and non-empty
    pub fn template(&self) -> Option<&'a str> {
        match self {
            MatchOutcome::Matched(m) => m.template,
            MatchOutcome::NoMatch => None,
        }
    }
}

pub(crate) fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|s| !s.is_empty())
}
