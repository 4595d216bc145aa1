//! Date section - detects embedded years.

use super::{Finding, SectionInput, SectionResult};

/// How many years back from the reference year count as a date pattern.
pub const YEAR_WINDOW: i32 = 100;

pub const DATE_PATTERN_MESSAGE: &str = "Date pattern detected";

/// Returns `true` if any year from `current_year - 100` to `current_year`
/// appears in the password.
pub fn check_date_pattern(password: &str, current_year: i32) -> bool {
    (current_year.saturating_sub(YEAR_WINDOW)..=current_year)
        .any(|year| password.contains(&year.to_string()))
}

/// Penalizes passwords embedding a recent year.
pub fn date_pattern_section(input: &SectionInput<'_>) -> SectionResult {
    check_date_pattern(input.password, input.current_year)
        .then(|| Finding::negative(-1, DATE_PATTERN_MESSAGE))
}
