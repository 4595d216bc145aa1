//! Character variety section - checks for uppercase, lowercase, numbers, special chars.

use super::{Finding, SectionInput, SectionResult};

pub const GOOD_VARIETY_MESSAGE: &str = "Good character variety";
pub const MODERATE_VARIETY_MESSAGE: &str = "Moderate character variety";
pub const LOW_VARIETY_MESSAGE: &str = "Add more character types (upper, lower, number, special)";

/// Unicode digits such as `٣` or `²`; letter-like numerals such as `Ⅻ` are excluded.
fn is_digit(c: char) -> bool {
    c.is_ascii_digit() || (c.is_numeric() && !c.is_alphabetic())
}

/// Counts the character classes present in the password.
///
/// Special characters are ASCII punctuation.
fn character_types(password: &str) -> usize {
    let has_upper = password.chars().any(|c| c.is_uppercase());
    let has_lower = password.chars().any(|c| c.is_lowercase());
    let has_digit = password.chars().any(is_digit);
    let has_special = password.chars().any(|c| c.is_ascii_punctuation());

    [has_upper, has_lower, has_digit, has_special]
        .iter()
        .filter(|&&b| b)
        .count()
}

/// Scores the variety of character types.
///
/// # Returns
/// - `+2` and positive feedback for 3 or 4 types
/// - `+1` and positive feedback for 2 types
/// - `0` and negative feedback for fewer
pub fn character_variety_section(input: &SectionInput<'_>) -> SectionResult {
    let finding = match character_types(input.password) {
        3.. => Finding::positive(2, GOOD_VARIETY_MESSAGE),
        2 => Finding::positive(1, MODERATE_VARIETY_MESSAGE),
        _ => Finding::negative(0, LOW_VARIETY_MESSAGE),
    };
    Some(finding)
}
