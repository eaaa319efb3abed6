use serde::{Deserialize, Serialize};

use super::category::ConstraintCategory;
use super::condition::Condition;
use super::entity::Entity;
use super::fields::{
    CapacityFields, CategoryFields, LocationFields, PreferenceFields, RestFields, TemporalFields,
};

/// Root record assembled by the parsing pipeline.
///
/// Exactly one of the five category slots carries a record (the one matching
/// `category`); the others serialize as empty JSON objects. For
/// `ConstraintCategory::Unknown` all five slots are empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Classified constraint category (serialized as `type`)
    #[serde(rename = "type")]
    pub category: ConstraintCategory,
    /// Entities found by the pattern scans, in scan order
    pub entities: Vec<Entity>,
    /// Inferred conditions (at most one per input)
    pub conditions: Vec<Condition>,
    /// Heuristic parse quality in [0, 1]
    pub confidence: f64,
    #[serde(with = "slot")]
    pub temporal: Option<TemporalFields>,
    #[serde(with = "slot")]
    pub capacity: Option<CapacityFields>,
    #[serde(with = "slot")]
    pub location: Option<LocationFields>,
    #[serde(with = "slot")]
    pub preference: Option<PreferenceFields>,
    #[serde(with = "slot")]
    pub rest: Option<RestFields>,
}

impl ParseResult {
    /// Fresh result with all category slots empty and zero confidence.
    pub fn new(category: ConstraintCategory, entities: Vec<Entity>) -> Self {
        Self {
            category,
            entities,
            conditions: Vec::new(),
            confidence: 0.0,
            temporal: None,
            capacity: None,
            location: None,
            preference: None,
            rest: None,
        }
    }

    /// Store a category field record in its matching slot.
    pub fn set_fields(&mut self, fields: CategoryFields) {
        match fields {
            CategoryFields::Temporal(f) => self.temporal = Some(f),
            CategoryFields::Capacity(f) => self.capacity = Some(f),
            CategoryFields::Location(f) => self.location = Some(f),
            CategoryFields::Rest(f) => self.rest = Some(f),
            CategoryFields::Preference(f) => self.preference = Some(f),
        }
    }

    /// True if the slot matching the classified category holds a record with
    /// at least one extracted field. Always false for `Unknown`.
    pub fn matched_fields_populated(&self) -> bool {
        match self.category {
            ConstraintCategory::Temporal => {
                self.temporal.as_ref().is_some_and(TemporalFields::is_populated)
            }
            ConstraintCategory::Capacity => {
                self.capacity.as_ref().is_some_and(CapacityFields::is_populated)
            }
            ConstraintCategory::Location => {
                self.location.as_ref().is_some_and(LocationFields::is_populated)
            }
            ConstraintCategory::Rest => self.rest.as_ref().is_some_and(RestFields::is_populated),
            ConstraintCategory::Preference => {
                self.preference.as_ref().is_some_and(PreferenceFields::is_populated)
            }
            ConstraintCategory::Unknown => false,
        }
    }
}

/// Serialize an empty category slot as `{}` rather than `null`, matching the
/// wire contract consumed by the scheduling frontend.
mod slot {
    use serde::de::DeserializeOwned;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<T, S>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error>
    where
        T: Serialize,
        S: Serializer,
    {
        match value {
            Some(fields) => fields.serialize(serializer),
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        match &value {
            serde_json::Value::Object(map) if map.is_empty() => Ok(None),
            _ => serde_json::from_value(value).map(Some).map_err(serde::de::Error::custom),
        }
    }
}
