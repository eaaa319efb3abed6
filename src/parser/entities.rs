//! Pattern-based entity extraction.
//!
//! Five independent scans run unconditionally over the original-case text,
//! regardless of how the input was classified, and their results are
//! concatenated in fixed scan order: team, day_of_week, time, number, venue.
//!
//! The scans are non-exclusive: the number scan re-matches digits inside
//! already-matched time entities ("6:00" also yields number entities 6 and
//! 0), and a capitalized plural like "Fridays" matches both the team and the
//! day scan. Downstream confidence scoring depends on these overlapping
//! counts, so the scans must not be deduplicated against each other.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{Entity, EntityKind};

const TEAM_CONFIDENCE: f64 = 0.8;
const DAY_CONFIDENCE: f64 = 0.95;
const TIME_CONFIDENCE: f64 = 0.9;
const NUMBER_CONFIDENCE: f64 = 0.85;
const VENUE_CONFIDENCE: f64 = 0.9;

// "Team X", "X Team", or a capitalized word ending in "s" (plural-as-team
// heuristic). Case-sensitive.
static TEAM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:Team\s+[A-Z]\w*|[A-Z]\w+\s+Team|[A-Z]\w+s)\b").unwrap());

static DAY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:monday|tuesday|wednesday|thursday|friday|saturday|sunday)s?\b").unwrap()
});

// "H:MM", "H:MM am/pm", or "H am/pm". Only all-lower or all-upper meridiems
// match ("Pm" does not).
static TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:\d{1,2}:\d{2}\s*(?:AM|PM|am|pm)?|\d{1,2}\s*(?:AM|PM|am|pm))\b").unwrap()
});

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(\d+)\b").unwrap());

static VENUE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?:Field\s+\d+|Court\s+\d+|Stadium|Arena|Gym|Gymnasium)\b").unwrap()
});

/// Scan original-case text for entities of all five kinds.
pub fn extract_entities(text: &str) -> Vec<Entity> {
    let mut entities = Vec::new();

    for m in TEAM_RE.find_iter(text) {
        entities.push(Entity::new(EntityKind::Team, m.as_str(), TEAM_CONFIDENCE));
    }

    for m in DAY_RE.find_iter(text) {
        entities.push(Entity::new(
            EntityKind::DayOfWeek,
            singular_capitalized(m.as_str()),
            DAY_CONFIDENCE,
        ));
    }

    for m in TIME_RE.find_iter(text) {
        entities.push(Entity::new(EntityKind::Time, m.as_str(), TIME_CONFIDENCE));
    }

    for m in NUMBER_RE.find_iter(text) {
        // Digit runs too long for i64 are dropped rather than failing the scan.
        if let Ok(n) = m.as_str().parse::<i64>() {
            entities.push(Entity::new(EntityKind::Number, n, NUMBER_CONFIDENCE));
        }
    }

    for m in VENUE_RE.find_iter(text) {
        entities.push(Entity::new(EntityKind::Venue, m.as_str(), VENUE_CONFIDENCE));
    }

    entities
}

/// Normalize a matched day name: strip trailing lowercase plural markers,
/// then upper-case the first letter and lower-case the rest.
fn singular_capitalized(day: &str) -> String {
    let stripped = day.trim_end_matches('s');
    let mut chars = stripped.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
