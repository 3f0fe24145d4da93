#![forbid(unsafe_code)]

//! Ordered, precompiled rule sets
//!
//! Rule order defines precedence: the first rule whose pattern matches wins,
//! and later rules are never consulted.

use crate::error::RuleError;
use crate::rules::rule::{MatchOutcome, Rule, RuleDefinition, RuleMatch};

/// An ordered, immutable collection of compiled rules
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    /// Creates an empty rule set, which never matches
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Compiles every definition, preserving order
    ///
    /// # Errors
    ///
    /// Returns `RuleError::InvalidPattern` for the first definition whose
    /// pattern does not compile.
    pub fn from_definitions(definitions: &[RuleDefinition]) -> Result<Self, RuleError> {
        let rules = definitions
            .iter()
            .enumerate()
            .map(|(index, def)| Rule::compile(def, index))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { rules })
    }

    /// Finds the first rule matching `value`
    pub fn find(&self, value: &str) -> MatchOutcome<'_> {
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.is_match(value) {
                log::debug!("value {:?} matched rule {} ({})", value, index, rule.pattern());
                return MatchOutcome::Matched(RuleMatch {
                    index,
                    result: rule.result(),
                    template: rule.template(),
                });
            }
        }
        MatchOutcome::NoMatch
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}
