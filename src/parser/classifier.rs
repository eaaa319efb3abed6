//! Keyword-based constraint classification.
//!
//! Each category owns a fixed keyword set; the input is scored by counting
//! how many keywords occur as substrings of the lower-cased text. Matching is
//! containment, not tokenization, so "games" matches inside "videogames" and
//! "am" matches inside "team". The first category (in declaration order) with
//! the highest non-zero score wins.

use crate::models::ConstraintCategory;

/// Keyword sets per classifiable category, in tie-break order.
static KEYWORD_SETS: &[(ConstraintCategory, &[&str])] = &[
    (
        ConstraintCategory::Temporal,
        &[
            "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "time",
            "hour", "am", "pm", "morning", "afternoon", "evening", "night", "before", "after",
            "during", "date", "week", "month", "day",
        ],
    ),
    (
        ConstraintCategory::Capacity,
        &[
            "maximum", "minimum", "limit", "capacity", "more than", "less than", "no more",
            "at least", "per day", "per week", "games", "matches",
        ],
    ),
    (
        ConstraintCategory::Location,
        &[
            "field", "venue", "location", "home", "away", "court", "stadium", "ground",
            "facility", "site", "place",
        ],
    ),
    (
        ConstraintCategory::Rest,
        &[
            "rest", "break", "between", "gap", "interval", "recovery", "days between",
            "hours between", "time between",
        ],
    ),
    (
        ConstraintCategory::Preference,
        &[
            "prefer", "like", "want", "wish", "would like", "ideally", "better", "favor",
            "rather",
        ],
    ),
];

/// Classify lower-cased constraint text into a category.
///
/// Returns `Unknown` when no keyword from any set occurs in the text.
pub fn classify(text: &str) -> ConstraintCategory {
    let mut best = ConstraintCategory::Unknown;
    let mut best_score = 0;

    for (category, keywords) in KEYWORD_SETS {
        let score = keywords.iter().filter(|keyword| text.contains(*keyword)).count();
        // Strict comparison keeps the first-declared category on ties.
        if score > best_score {
            best_score = score;
            best = *category;
        }
    }

    best
}
