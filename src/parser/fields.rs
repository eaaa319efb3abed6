//! Category-specific field extraction.
//!
//! Each parser receives the lower-cased constraint text and fills the field
//! record for its category. Only the parser matching the classified category
//! runs; dispatch lives in the parent module. Location and preference are
//! explicit stubs so that adding real extraction later is a local change.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::{CapacityFields, LocationFields, Period, PreferenceFields, RestFields, TemporalFields};

const DAY_NAMES: [&str; 7] =
    ["monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday"];

static BEFORE_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"before\s+(\d{1,2}:\d{2}\s*(?:am|pm)?|\d{1,2}\s*(?:am|pm))").unwrap()
});

static AFTER_TIME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"after\s+(\d{1,2}:\d{2}\s*(?:am|pm)?|\d{1,2}\s*(?:am|pm))").unwrap()
});

// Maximum-count phrasings, tried in order; first match wins.
static MAX_COUNT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"no more than (\d+)", r"maximum (\d+)", r"at most (\d+)", r"(\d+) or fewer"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

// Minimum-count phrasings, independent of the maximum scan.
static MIN_COUNT_RES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [r"at least (\d+)", r"minimum (\d+)", r"(\d+) or more"]
        .iter()
        .map(|p| Regex::new(p).unwrap())
        .collect()
});

static MIN_DAYS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+days?\s+between").unwrap());
static MIN_HOURS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s+hours?\s+between").unwrap());

/// Extract temporal fields: mentioned day names plus before/after time bounds.
///
/// The before and after scans are independent; a sentence can set both.
pub fn parse_temporal(text: &str) -> TemporalFields {
    let mut fields = TemporalFields::default();

    for day in DAY_NAMES {
        // Substring containment covers plurals ("fridays" contains "friday").
        if text.contains(day) {
            fields.days_of_week.push(capitalize(day));
        }
    }

    if text.contains("before") {
        fields.before_time = captured_text(&BEFORE_TIME_RE, text);
    }
    if text.contains("after") {
        fields.after_time = captured_text(&AFTER_TIME_RE, text);
    }

    fields
}

/// Extract capacity fields: max/min counts and the per-period unit.
pub fn parse_capacity(text: &str) -> CapacityFields {
    let mut fields = CapacityFields::default();

    fields.max_count = first_count(&MAX_COUNT_RES, text);
    fields.min_count = first_count(&MIN_COUNT_RES, text);

    fields.per_period = if text.contains("per day") {
        Some(Period::Day)
    } else if text.contains("per week") {
        Some(Period::Week)
    } else if text.contains("per hour") {
        Some(Period::Hour)
    } else {
        None
    };

    fields
}

/// Location extraction is not implemented yet; returns the default record.
pub fn parse_location(_text: &str) -> LocationFields {
    LocationFields::default()
}

/// Extract rest fields: minimum days and hours between events.
pub fn parse_rest(text: &str) -> RestFields {
    let mut fields = RestFields::default();
    fields.min_days = captured_count(&MIN_DAYS_RE, text);
    fields.min_hours = captured_count(&MIN_HOURS_RE, text);
    fields
}

/// Preference extraction is not implemented yet; returns the default record
/// with its fixed weight.
pub fn parse_preference(_text: &str) -> PreferenceFields {
    PreferenceFields::default()
}

fn captured_text(pattern: &Regex, text: &str) -> Option<String> {
    pattern.captures(text).map(|c| c[1].to_string())
}

fn captured_count(pattern: &Regex, text: &str) -> Option<i64> {
    // Overflowing digit runs are treated as no match.
    pattern.captures(text).and_then(|c| c[1].parse().ok())
}

/// First pattern that matches decides; its digit group becomes the count.
fn first_count(patterns: &[Regex], text: &str) -> Option<i64> {
    patterns.iter().find_map(|p| p.captures(text)).and_then(|c| c[1].parse().ok())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_temporal_days_collected_in_week_order() {
        let fields = parse_temporal("no games on fridays or monday");
        assert_eq!(fields.days_of_week, vec!["Monday", "Friday"]);
    }

    #[test]
    fn test_temporal_before_time() {
        let fields = parse_temporal("team a cannot play before 6:00 pm on fridays");
        assert_eq!(fields.before_time.as_deref(), Some("6:00 pm"));
        assert_eq!(fields.after_time, None);
    }

    #[test]
    fn test_temporal_before_and_after_both_set() {
        let fields = parse_temporal("only after 9 am and before 5 pm");
        assert_eq!(fields.after_time.as_deref(), Some("9 am"));
        assert_eq!(fields.before_time.as_deref(), Some("5 pm"));
    }

    #[test]
    fn test_temporal_cue_without_time_leaves_none() {
        let fields = parse_temporal("before the season starts");
        assert_eq!(fields.before_time, None);
    }

    #[test]
    fn test_temporal_unimplemented_sequences_stay_empty() {
        let fields = parse_temporal("before 6 pm on monday");
        assert!(fields.excluded_dates.is_empty());
        assert!(fields.time_ranges.is_empty());
    }

    #[test]
    fn test_capacity_max_phrasings() {
        assert_eq!(parse_capacity("no more than 3 games per week").max_count, Some(3));
        assert_eq!(parse_capacity("maximum 4 matches").max_count, Some(4));
        assert_eq!(parse_capacity("at most 2 per day").max_count, Some(2));
        assert_eq!(parse_capacity("5 or fewer").max_count, Some(5));
    }

    #[test]
    fn test_capacity_first_matching_phrasing_wins() {
        // "no more than" is tried before "maximum".
        let fields = parse_capacity("no more than 3, maximum 9");
        assert_eq!(fields.max_count, Some(3));
    }

    #[test]
    fn test_capacity_min_phrasings() {
        assert_eq!(parse_capacity("at least 2 games").min_count, Some(2));
        assert_eq!(parse_capacity("minimum 1 match").min_count, Some(1));
        assert_eq!(parse_capacity("3 or more").min_count, Some(3));
    }

    #[test]
    fn test_capacity_max_and_min_independent() {
        let fields = parse_capacity("at least 1 and no more than 4 games");
        assert_eq!(fields.min_count, Some(1));
        assert_eq!(fields.max_count, Some(4));
    }

    #[test]
    fn test_capacity_per_period_priority() {
        assert_eq!(parse_capacity("twice per week").per_period, Some(Period::Week));
        assert_eq!(parse_capacity("once per hour").per_period, Some(Period::Hour));
        // "per day" outranks "per week" when both occur.
        assert_eq!(parse_capacity("per day and per week").per_period, Some(Period::Day));
        assert_eq!(parse_capacity("3 games total").per_period, None);
    }

    #[test]
    fn test_rest_min_days_and_hours() {
        let fields = parse_rest("2 days between matches and 48 hours between games");
        assert_eq!(fields.min_days, Some(2));
        assert_eq!(fields.min_hours, Some(48));
        assert!(fields.between_events);
    }

    #[test]
    fn test_rest_singular_units() {
        let fields = parse_rest("1 day between and 1 hour between");
        assert_eq!(fields.min_days, Some(1));
        assert_eq!(fields.min_hours, Some(1));
    }

    #[test]
    fn test_rest_no_match_leaves_defaults() {
        let fields = parse_rest("plenty of recovery please");
        assert_eq!(fields, RestFields::default());
    }

    #[test]
    fn test_location_stub_returns_defaults() {
        assert_eq!(parse_location("must play at home court"), LocationFields::default());
    }

    #[test]
    fn test_preference_stub_returns_fixed_weight() {
        let fields = parse_preference("we prefer morning slots");
        assert_eq!(fields, PreferenceFields::default());
        assert_eq!(fields.weight, 0.5);
    }
}
