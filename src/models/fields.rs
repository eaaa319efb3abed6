use serde::{Deserialize, Serialize};

use super::category::ConstraintCategory;

/// Period unit for capacity limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Hour,
}

/// Fields extracted for temporal constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalFields {
    /// Capitalized day names found in the input
    pub days_of_week: Vec<String>,
    /// Not extracted yet; always empty
    pub excluded_dates: Vec<String>,
    /// Not extracted yet; always empty
    pub time_ranges: Vec<String>,
    /// Time following a "before" cue, as matched (lower-cased input)
    pub before_time: Option<String>,
    /// Time following an "after" cue
    pub after_time: Option<String>,
}

impl TemporalFields {
    /// True if any field carries extracted content.
    pub fn is_populated(&self) -> bool {
        !self.days_of_week.is_empty()
            || !self.excluded_dates.is_empty()
            || !self.time_ranges.is_empty()
            || self.before_time.is_some()
            || self.after_time.is_some()
    }
}

/// Fields extracted for capacity constraints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CapacityFields {
    pub max_count: Option<i64>,
    pub min_count: Option<i64>,
    pub per_period: Option<Period>,
    /// Not extracted yet; always absent
    pub resource: Option<String>,
}

impl CapacityFields {
    pub fn is_populated(&self) -> bool {
        self.max_count.is_some()
            || self.min_count.is_some()
            || self.per_period.is_some()
            || self.resource.is_some()
    }
}

/// Fields for location constraints. Extraction is not implemented yet; the
/// parser for this category returns the default record unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LocationFields {
    pub required_venue: Option<String>,
    pub excluded_venues: Vec<String>,
    pub home_away_preference: Option<String>,
}

impl LocationFields {
    pub fn is_populated(&self) -> bool {
        self.required_venue.is_some()
            || !self.excluded_venues.is_empty()
            || self.home_away_preference.is_some()
    }
}

/// Fields extracted for rest constraints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RestFields {
    pub min_hours: Option<i64>,
    pub min_days: Option<i64>,
    /// Whether the rest period applies between consecutive events
    pub between_events: bool,
}

impl Default for RestFields {
    fn default() -> Self {
        Self { min_hours: None, min_days: None, between_events: true }
    }
}

impl RestFields {
    /// `between_events` always carries a value, so a matched rest record
    /// always counts as populated for confidence scoring.
    pub fn is_populated(&self) -> bool {
        true
    }
}

/// Fields for preference constraints. Extraction is not implemented yet; the
/// parser returns the default record with a fixed weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreferenceFields {
    pub preferred_times: Vec<String>,
    pub preferred_days: Vec<String>,
    /// Preference weight in [0, 1]
    pub weight: f64,
}

impl Default for PreferenceFields {
    fn default() -> Self {
        Self { preferred_times: Vec::new(), preferred_days: Vec::new(), weight: 0.5 }
    }
}

impl PreferenceFields {
    /// `weight` always carries a value, so a matched preference record
    /// always counts as populated for confidence scoring.
    pub fn is_populated(&self) -> bool {
        true
    }
}

/// Tagged union over the five category-specific field records, produced by
/// the field parser selected for the classified category.
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryFields {
    Temporal(TemporalFields),
    Capacity(CapacityFields),
    Location(LocationFields),
    Rest(RestFields),
    Preference(PreferenceFields),
}

impl CategoryFields {
    /// Category this record belongs to.
    pub fn category(&self) -> ConstraintCategory {
        match self {
            CategoryFields::Temporal(_) => ConstraintCategory::Temporal,
            CategoryFields::Capacity(_) => ConstraintCategory::Capacity,
            CategoryFields::Location(_) => ConstraintCategory::Location,
            CategoryFields::Rest(_) => ConstraintCategory::Rest,
            CategoryFields::Preference(_) => ConstraintCategory::Preference,
        }
    }

    pub fn is_populated(&self) -> bool {
        match self {
            CategoryFields::Temporal(f) => f.is_populated(),
            CategoryFields::Capacity(f) => f.is_populated(),
            CategoryFields::Location(f) => f.is_populated(),
            CategoryFields::Rest(f) => f.is_populated(),
            CategoryFields::Preference(f) => f.is_populated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_default_is_not_populated() {
        assert!(!TemporalFields::default().is_populated());
    }

    #[test]
    fn test_temporal_populated_by_day_or_time() {
        let days = TemporalFields { days_of_week: vec!["Friday".into()], ..Default::default() };
        assert!(days.is_populated());

        let before = TemporalFields { before_time: Some("6:00 pm".into()), ..Default::default() };
        assert!(before.is_populated());
    }

    #[test]
    fn test_capacity_default_is_not_populated() {
        assert!(!CapacityFields::default().is_populated());
        let max = CapacityFields { max_count: Some(3), ..Default::default() };
        assert!(max.is_populated());
    }

    #[test]
    fn test_location_stub_never_populated() {
        assert!(!LocationFields::default().is_populated());
    }

    #[test]
    fn test_rest_and_preference_always_populated() {
        assert!(RestFields::default().is_populated());
        assert!(PreferenceFields::default().is_populated());
    }

    #[test]
    fn test_rest_defaults() {
        let rest = RestFields::default();
        assert_eq!(rest.min_hours, None);
        assert_eq!(rest.min_days, None);
        assert!(rest.between_events);
    }

    #[test]
    fn test_preference_default_weight() {
        assert_eq!(PreferenceFields::default().weight, 0.5);
    }

    #[test]
    fn test_period_wire_names() {
        assert_eq!(serde_json::to_string(&Period::Day).unwrap(), "\"day\"");
        assert_eq!(serde_json::to_string(&Period::Week).unwrap(), "\"week\"");
        assert_eq!(serde_json::to_string(&Period::Hour).unwrap(), "\"hour\"");
    }

    #[test]
    fn test_tagged_union_category() {
        let fields = CategoryFields::Rest(RestFields::default());
        assert_eq!(fields.category(), ConstraintCategory::Rest);
    }

    #[test]
    fn test_temporal_serialization_shape() {
        let fields = TemporalFields {
            days_of_week: vec!["Friday".into()],
            before_time: Some("6:00 pm".into()),
            ..Default::default()
        };
        let json = serde_json::to_value(&fields).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "days_of_week": ["Friday"],
                "excluded_dates": [],
                "time_ranges": [],
                "before_time": "6:00 pm",
                "after_time": null,
            })
        );
    }
}
