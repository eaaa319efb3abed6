//! Rule-based constraint parsing pipeline.
//!
//! The pipeline is a pure function of the input text: classification,
//! entity extraction, category field parsing, condition inference, and
//! confidence scoring, in that order. It performs no I/O, holds no state
//! between calls, and is total over all string inputs — gibberish yields an
//! `unknown`-typed result with zero confidence, never an error.

pub mod classifier;
pub mod conditions;
pub mod confidence;
pub mod entities;
pub mod fields;

use crate::models::{CategoryFields, Condition, ConstraintCategory, ParseResult};

pub use classifier::classify;
pub use entities::extract_entities;

type FieldsFn = fn(&str) -> CategoryFields;
type ConditionsFn = fn(&str) -> Vec<Condition>;

/// Dispatch table pairing each classifiable category with its field parser
/// and condition extractor. `Unknown` has no entry; unknown inputs skip both
/// stages.
static CATEGORY_HANDLERS: &[(ConstraintCategory, FieldsFn, ConditionsFn)] = &[
    (ConstraintCategory::Temporal, temporal_fields, conditions::temporal_conditions),
    (ConstraintCategory::Capacity, capacity_fields, conditions::capacity_conditions),
    (ConstraintCategory::Location, location_fields, conditions::location_conditions),
    (ConstraintCategory::Rest, rest_fields, conditions::rest_conditions),
    (ConstraintCategory::Preference, preference_fields, conditions::preference_conditions),
];

fn temporal_fields(text: &str) -> CategoryFields {
    CategoryFields::Temporal(fields::parse_temporal(text))
}

fn capacity_fields(text: &str) -> CategoryFields {
    CategoryFields::Capacity(fields::parse_capacity(text))
}

fn location_fields(text: &str) -> CategoryFields {
    CategoryFields::Location(fields::parse_location(text))
}

fn rest_fields(text: &str) -> CategoryFields {
    CategoryFields::Rest(fields::parse_rest(text))
}

fn preference_fields(text: &str) -> CategoryFields {
    CategoryFields::Preference(fields::parse_preference(text))
}

fn handlers_for(category: ConstraintCategory) -> Option<(FieldsFn, ConditionsFn)> {
    CATEGORY_HANDLERS
        .iter()
        .find(|(c, _, _)| *c == category)
        .map(|(_, fields_fn, conditions_fn)| (*fields_fn, *conditions_fn))
}

/// Parse a natural-language scheduling constraint into a structured record.
///
/// Classification and field/condition extraction run on the lower-cased
/// text; entity extraction runs on the original-case text. The caller is
/// expected to pass trimmed, non-empty text, but any string (including an
/// empty one) produces a well-formed result.
///
/// # Example
/// ```
/// use construe::models::ConstraintCategory;
/// use construe::parse_constraint;
///
/// let result = parse_constraint("No more than 3 games per week");
/// assert_eq!(result.category, ConstraintCategory::Capacity);
/// assert_eq!(result.capacity.unwrap().max_count, Some(3));
/// ```
pub fn parse_constraint(text: &str) -> ParseResult {
    let lowered = text.to_lowercase();

    let category = classifier::classify(&lowered);
    let entities = entities::extract_entities(text);

    let mut result = ParseResult::new(category, entities);

    if let Some((parse_fields, extract_conditions)) = handlers_for(category) {
        result.set_fields(parse_fields(&lowered));
        result.conditions = extract_conditions(&lowered);
    }

    result.confidence = confidence::score(&result);
    result
}
