//! Heuristic confidence scoring.
//!
//! The score is an additive estimate of parse quality, not a calibrated
//! probability. Terms: successful classification, entity count, condition
//! count, and whether the matched category record carries extracted fields.

use crate::models::{ConstraintCategory, ParseResult};

const CLASSIFIED_BONUS: f64 = 0.3;
const ENTITY_TERM_CAP: f64 = 0.3;
const CONDITION_TERM_CAP: f64 = 0.2;
const POPULATED_FIELDS_BONUS: f64 = 0.2;
const PER_ITEM: f64 = 0.1;

/// Score a fully-assembled result. Clamped to [0, 1]; the clamp also guards
/// future term additions that could push the raw sum past 1.0.
pub fn score(result: &ParseResult) -> f64 {
    let mut score = 0.0;

    if result.category != ConstraintCategory::Unknown {
        score += CLASSIFIED_BONUS;
    }

    score += (PER_ITEM * result.entities.len() as f64).min(ENTITY_TERM_CAP);
    score += (PER_ITEM * result.conditions.len() as f64).min(CONDITION_TERM_CAP);

    if result.matched_fields_populated() {
        score += POPULATED_FIELDS_BONUS;
    }

    score.min(1.0)
}
