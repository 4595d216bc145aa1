//! Length section - rewards minimum and recommended lengths.

use super::{Finding, SectionInput, SectionResult};

const MIN_LENGTH: usize = 8;
const GOOD_LENGTH: usize = 12;

pub const GOOD_LENGTH_MESSAGE: &str = "Good password length (12+ characters)";
pub const MIN_LENGTH_MESSAGE: &str = "Minimum length met (8+ characters)";
pub const TOO_SHORT_MESSAGE: &str = "Password too short (min 8 characters)";

/// Scores the password length.
///
/// # Returns
/// - `+3` and positive feedback for 12+ characters
/// - `+1` and positive feedback for 8 to 11 characters
/// - `0` and negative feedback below 8 characters
pub fn length_section(input: &SectionInput<'_>) -> SectionResult {
    let finding = if input.length >= GOOD_LENGTH {
        Finding::positive(3, GOOD_LENGTH_MESSAGE)
    } else if input.length >= MIN_LENGTH {
        Finding::positive(1, MIN_LENGTH_MESSAGE)
    } else {
        Finding::negative(0, TOO_SHORT_MESSAGE)
    };
    Some(finding)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_passwords::CommonPasswords;

    fn run(password: &str) -> SectionResult {
        let common = CommonPasswords::builtin();
        length_section(&SectionInput::new(password, &common, 2024))
    }

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(run("Short1!"), Some(Finding::negative(0, TOO_SHORT_MESSAGE)));
        assert_eq!(run(""), Some(Finding::negative(0, TOO_SHORT_MESSAGE)));
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(run("12345678"), Some(Finding::positive(1, MIN_LENGTH_MESSAGE)));
        assert_eq!(run("12345678901"), Some(Finding::positive(1, MIN_LENGTH_MESSAGE)));
    }

    #[test]
    fn test_length_section_good_length() {
        assert_eq!(run("LongEnough12"), Some(Finding::positive(3, GOOD_LENGTH_MESSAGE)));
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 7 characters, 14 bytes
        assert_eq!(run("ééééééé"), Some(Finding::negative(0, TOO_SHORT_MESSAGE)));
    }
}
