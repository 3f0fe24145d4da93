#![forbid(unsafe_code)]

//! Rule definitions, rule sets and matching

mod matcher;
mod rule;
mod rule_set;

// Re-export core types
pub use matcher::match_value;
pub use rule::{MatchOutcome, Rule, RuleDefinition, RuleMatch};
pub use rule_set::RuleSet;
