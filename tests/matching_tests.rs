#![forbid(unsafe_code)]

//! Integration tests for rule matching, template substitution and image formatting
//!
//! These tests exercise the public API the way a host renderer would: rules
//! are supplied as ordered definitions and the returned markup is inspected.

#[macro_use]
mod common;

use cellmark::format::{ImageFormatter, apply_template, format_with_image};
use cellmark::rules::{MatchOutcome, RuleDefinition, RuleSet, match_value};
use cellmark::{Identifier, RuleError};
use std::sync::Arc;
use std::thread;

fn flag_rules() -> Vec<RuleDefinition> {
    vec![RuleDefinition::new("flag.png", "^IT")]
}

// ============================================================================
// PatternMatcher
// ============================================================================

#[test]
fn test_no_matching_rule_yields_no_match_and_plain_value() {
    let rules = vec![
        RuleDefinition::new("a.png", "^A"),
        RuleDefinition::new("b.png", "^B"),
    ];
    for value in ["", "C", "xA", "b"] {
        assert_eq!(assert_ok!(match_value(value, &rules)), MatchOutcome::NoMatch);
        for include in [true, false] {
            let result = assert_ok!(format_with_image(value, &rules, include));
            assert_eq!(result.markup, value);
        }
    }
}

#[test]
fn test_earlier_rule_always_wins() {
    let rules = vec![
        RuleDefinition::new("specific", "^ITA$"),
        RuleDefinition::new("general", "^IT"),
        RuleDefinition::new("anything", ""),
    ];
    let outcome = assert_ok!(match_value("ITA", &rules));
    assert_eq!(outcome.result(), Some("specific"));

    let outcome = assert_ok!(match_value("ITALY", &rules));
    assert_eq!(outcome.result(), Some("general"));

    let outcome = assert_ok!(match_value("zzz", &rules));
    assert_eq!(outcome.result(), Some("anything"));
}

#[test]
fn test_raw_and_precompiled_agree() {
    let defs = vec![
        RuleDefinition::new("low", "^[0-3]$"),
        RuleDefinition::new("mid", "^[4-6]$"),
        RuleDefinition::new("high", "^[7-9]$"),
    ];
    let set = assert_ok!(RuleSet::from_definitions(&defs));
    for value in ["0", "5", "9", "10", ""] {
        assert_eq!(assert_ok!(match_value(value, &defs)), set.find(value));
    }
}

#[test]
fn test_invalid_pattern_names_offending_rule() {
    let defs = vec![
        RuleDefinition::new("ok", "^ok$"),
        RuleDefinition::new("bad", "a{2,1}"),
    ];
    match RuleSet::from_definitions(&defs) {
        Err(RuleError::InvalidPattern { index, pattern, .. }) => {
            assert_eq!(index, 1);
            assert_eq!(pattern, "a{2,1}");
        }
        other => panic!("Expected InvalidPattern, got {:?}", other),
    }
    assert!(matches!(
        match_value("nope", &defs),
        Err(RuleError::InvalidPattern { index: 1, .. })
    ));
}

// ============================================================================
// TemplateFormatter
// ============================================================================

#[test]
fn test_template_properties() {
    for v in ["", "X", "{value}", "a b c"] {
        assert_eq!(apply_template(v, ""), v);
    }
    assert_eq!(apply_template("X", "prefix {value} suffix"), "prefix X suffix");
    assert_eq!(apply_template("X", "{value}-{value}"), "X-{value}");
    assert_eq!(apply_template("X", "plain"), "plain");
}

// ============================================================================
// ImageAnnotatedFormatter
// ============================================================================

#[test]
fn test_image_with_trailing_value() {
    let result = assert_ok!(format_with_image("ITA", &flag_rules(), true));
    assert!(result.markup.contains("src=\"flag.png\""));
    assert!(result.markup.contains("alt=\"ITA\""));
    assert!(result.markup.contains("title=\"ITA\""));
    assert!(result.markup.ends_with("&nbsp;ITA"));
}

#[test]
fn test_image_only() {
    let result = assert_ok!(format_with_image("ITA", &flag_rules(), false));
    assert!(result.markup.starts_with("<img"));
    assert!(result.markup.ends_with('>'));
    assert!(!result.markup.contains("&nbsp;"));
}

#[test]
fn test_empty_rules_return_value_verbatim() {
    for value in ["ITA", "", "<i>raw</i>"] {
        let result = assert_ok!(format_with_image(value, &[], false));
        assert_eq!(result.markup, value);
        assert!(result.image.is_none());
    }
}

#[test]
fn test_custom_template_with_image() {
    let rules = vec![RuleDefinition::new("fr.png", "^FR").with_template("France ({value})")];
    let result = assert_ok!(format_with_image("FRA", &rules, true));
    assert!(result.markup.contains("alt=\"FRA\""));
    assert!(result.markup.ends_with("&nbsp;France (FRA)"));

    let hidden = assert_ok!(format_with_image("FRA", &rules, false));
    assert!(!hidden.markup.contains("France"));
}

#[test]
fn test_formatter_shared_across_threads() {
    let set = assert_ok!(RuleSet::from_definitions(&[
        RuleDefinition::new("it.png", "^IT"),
        RuleDefinition::new("fr.png", "^FR"),
    ]));
    let id = assert_some!(Identifier::new("country"));
    let formatter = Arc::new(ImageFormatter::new(id, set, true));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let formatter = Arc::clone(&formatter);
            thread::spawn(move || {
                let value = if i % 2 == 0 { "ITA" } else { "FRA" };
                formatter.format(value)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = assert_ok!(handle.join());
        let expected = if i % 2 == 0 { "it.png" } else { "fr.png" };
        assert_eq!(result.image.as_deref(), Some(expected));
    }
}
