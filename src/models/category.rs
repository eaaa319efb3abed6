use serde::{Deserialize, Serialize};

/// High-level kind of scheduling constraint.
///
/// Determined once per input by the classifier and immutable thereafter.
/// Declaration order matters: classifier ties are broken in favor of the
/// first-declared category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintCategory {
    Temporal,
    Capacity,
    Location,
    Rest,
    Preference,
    Unknown,
}

impl ConstraintCategory {
    /// Wire name of the category, matching its JSON serialization.
    pub fn as_str(&self) -> &'static str {
        match self {
            ConstraintCategory::Temporal => "temporal",
            ConstraintCategory::Capacity => "capacity",
            ConstraintCategory::Location => "location",
            ConstraintCategory::Rest => "rest",
            ConstraintCategory::Preference => "preference",
            ConstraintCategory::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for ConstraintCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
