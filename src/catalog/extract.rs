//! Regex extraction of occupational codes and ages from free text.

use once_cell::sync::Lazy;
use regex::Regex;

use super::types::AgeRange;

static OCCUPATIONAL_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}").unwrap());
static OCCUPATIONAL_CODE_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}$").unwrap());
static AGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d+)\s*anos?").unwrap());
static AGE_RANGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\d+) a (\d+) anos$").unwrap());

/// First `DDDD-DD` code in the query, case preserved.
pub fn occupational_code(query: &str) -> Option<&str> {
    OCCUPATIONAL_CODE.find(query).map(|m| m.as_str())
}

pub fn is_occupational_code(code: &str) -> bool {
    OCCUPATIONAL_CODE_EXACT.is_match(code)
}

/// First number followed by "ano"/"anos" in the lowercased query.
pub fn age(query_lower: &str) -> Option<u32> {
    AGE.captures(query_lower)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Parse an age-range template such as "16 a 24 anos".
pub fn age_range(text: &str) -> Option<AgeRange> {
    let caps = AGE_RANGE.captures(text.trim())?;
    let min_age = caps[1].parse().ok()?;
    let max_age = caps[2].parse().ok()?;
    (min_age <= max_age).then_some(AgeRange { min_age, max_age })
}
