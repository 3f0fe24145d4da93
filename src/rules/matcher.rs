#![forbid(unsafe_code)]

//! Matching of values against raw rule definitions

use crate::error::RuleError;
use crate::rules::rule::{MatchOutcome, RuleDefinition, RuleMatch, non_empty};

/// Matches `value` against raw definitions, compiling patterns as they are reached
///
/// Rules are tried in order and iteration stops at the first match, so
/// patterns after the winning rule are never compiled. Use
/// [`RuleSet`](crate::rules::RuleSet) to validate and reuse a set instead.
///
/// # Errors
///
/// Returns `RuleError::InvalidPattern` if a pattern reached before a match
/// does not compile.
pub fn match_value<'a>(
    value: &str,
    rules: &'a [RuleDefinition],
) -> Result<MatchOutcome<'a>, RuleError> {
    for (index, def) in rules.iter().enumerate() {
        let re = def.compile_pattern(index)?;
        if re.is_match(value) {
            return Ok(MatchOutcome::Matched(RuleMatch {
                index,
                result: def.result.as_deref(),
                template: non_empty(def.template.as_deref()),
            }));
        }
    }
    Ok(MatchOutcome::NoMatch)
}
