use serde::{Deserialize, Serialize};

/// Kind of fragment recognized by the entity extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Team,
    DayOfWeek,
    Time,
    Number,
    Venue,
}

/// Value carried by an entity: an integer for number entities, the matched
/// (or normalized) text for everything else.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityValue {
    Number(i64),
    Text(String),
}

impl From<&str> for EntityValue {
    fn from(s: &str) -> Self {
        EntityValue::Text(s.to_string())
    }
}

impl From<String> for EntityValue {
    fn from(s: String) -> Self {
        EntityValue::Text(s)
    }
}

impl From<i64> for EntityValue {
    fn from(n: i64) -> Self {
        EntityValue::Number(n)
    }
}

/// A recognized substring of interest, annotated with a fixed per-kind
/// confidence in [0, 1].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entity {
    /// Entity kind (serialized as `type`)
    #[serde(rename = "type")]
    pub kind: EntityKind,
    /// Matched value (text or integer)
    pub value: EntityValue,
    /// Heuristic confidence for this entity kind
    pub confidence: f64,
}

impl Entity {
    pub fn new(kind: EntityKind, value: impl Into<EntityValue>, confidence: f64) -> Self {
        Self { kind, value: value.into(), confidence }
    }
}
