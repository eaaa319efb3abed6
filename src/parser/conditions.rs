//! Condition inference from lexical cues.
//!
//! Each category owns an ordered rule list; rules are checked in order and
//! the first whose cue set matches produces the (single) condition for the
//! input. The condition value is always a fixed symbolic placeholder, never
//! an extracted literal; downstream consumers pattern-match on these strings.

use crate::models::{Condition, ConditionOperator};

/// How a rule's cue words combine.
enum Cue {
    /// Any one cue present fires the rule.
    Any(&'static [&'static str]),
    /// Every cue must be present.
    All(&'static [&'static str]),
}

struct ConditionRule {
    cue: Cue,
    operator: ConditionOperator,
    value: &'static str,
}

impl ConditionRule {
    fn matches(&self, text: &str) -> bool {
        match self.cue {
            Cue::Any(words) => words.iter().any(|w| text.contains(w)),
            Cue::All(words) => words.iter().all(|w| text.contains(w)),
        }
    }
}

// Rule order encodes precedence: "cannot play before 6" is a prohibition,
// not a less-than bound, because the negation rule is checked first.
static TEMPORAL_RULES: &[ConditionRule] = &[
    ConditionRule {
        cue: Cue::Any(&["cannot", "not"]),
        operator: ConditionOperator::NotEquals,
        value: "specified_time",
    },
    ConditionRule {
        cue: Cue::Any(&["must", "only"]),
        operator: ConditionOperator::Equals,
        value: "specified_time",
    },
    ConditionRule {
        cue: Cue::Any(&["before"]),
        operator: ConditionOperator::LessThan,
        value: "specified_time",
    },
    ConditionRule {
        cue: Cue::Any(&["after"]),
        operator: ConditionOperator::GreaterThan,
        value: "specified_time",
    },
];

static CAPACITY_RULES: &[ConditionRule] = &[
    ConditionRule {
        cue: Cue::Any(&["no more than", "maximum"]),
        operator: ConditionOperator::LessThanOrEqual,
        value: "max_count",
    },
    ConditionRule {
        cue: Cue::Any(&["at least", "minimum"]),
        operator: ConditionOperator::GreaterThanOrEqual,
        value: "min_count",
    },
];

static LOCATION_RULES: &[ConditionRule] = &[
    ConditionRule {
        cue: Cue::All(&["must", "home"]),
        operator: ConditionOperator::Equals,
        value: "home_venue",
    },
    ConditionRule {
        cue: Cue::Any(&["cannot"]),
        operator: ConditionOperator::NotEquals,
        value: "specified_venue",
    },
];

static REST_RULES: &[ConditionRule] = &[ConditionRule {
    cue: Cue::Any(&["at least", "minimum"]),
    operator: ConditionOperator::GreaterThanOrEqual,
    value: "min_rest_period",
}];

static PREFERENCE_RULES: &[ConditionRule] = &[ConditionRule {
    cue: Cue::Any(&["prefer", "like"]),
    operator: ConditionOperator::Prefer,
    value: "specified_option",
}];

fn first_match(rules: &[ConditionRule], text: &str) -> Vec<Condition> {
    rules
        .iter()
        .find(|rule| rule.matches(text))
        .map(|rule| vec![Condition::new(rule.operator, rule.value)])
        .unwrap_or_default()
}

pub fn temporal_conditions(text: &str) -> Vec<Condition> {
    first_match(TEMPORAL_RULES, text)
}

pub fn capacity_conditions(text: &str) -> Vec<Condition> {
    first_match(CAPACITY_RULES, text)
}

pub fn location_conditions(text: &str) -> Vec<Condition> {
    first_match(LOCATION_RULES, text)
}

pub fn rest_conditions(text: &str) -> Vec<Condition> {
    first_match(REST_RULES, text)
}

pub fn preference_conditions(text: &str) -> Vec<Condition> {
    first_match(PREFERENCE_RULES, text)
}
