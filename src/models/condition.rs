use serde::{Deserialize, Serialize};

/// Comparison operator inferred from lexical cues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConditionOperator {
    Equals,
    NotEquals,
    LessThan,
    GreaterThan,
    LessThanOrEqual,
    GreaterThanOrEqual,
    Prefer,
}

/// An inferred condition: an operator plus a symbolic reference to what it
/// compares.
///
/// `value` is always one of a fixed set of placeholder strings
/// (`specified_time`, `max_count`, ...), never an extracted literal.
/// Downstream consumers pattern-match on these placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Condition {
    /// Comparison operator
    pub operator: ConditionOperator,
    /// Symbolic placeholder naming the compared quantity
    pub value: String,
}

impl Condition {
    pub fn new(operator: ConditionOperator, value: impl Into<String>) -> Self {
        Self { operator, value: value.into() }
    }
}
