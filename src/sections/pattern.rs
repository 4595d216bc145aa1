//! Pattern analysis sections - detect repeated and sequential characters.

use super::{Finding, SectionInput, SectionResult};

/// Longest allowed run of one repeated character.
pub const MAX_CONSECUTIVE: usize = 2;
/// Window size for the sequential check.
pub const MIN_SEQ_LENGTH: usize = 3;

pub const CONSECUTIVE_MESSAGE: &str = "Consecutive repeating characters";
pub const SEQUENTIAL_MESSAGE: &str = "Sequential characters detected";

const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";
const DIGITS: &str = "0123456789";

/// Returns `true` if some character repeats more than `max_consecutive` times in a row.
pub fn check_consecutive(password: &str, max_consecutive: usize) -> bool {
    let mut prev = None;
    let mut repeated_count = 0;
    for c in password.chars() {
        if prev == Some(c) {
            repeated_count += 1;
        } else {
            prev = Some(c);
            repeated_count = 1;
        }
        if repeated_count > max_consecutive {
            return true;
        }
    }
    false
}

/// Returns `true` if any window of `min_seq_length` characters, lowercased, is
/// an ascending run of the alphabet or of the digits (e.g. `abc`, `456`).
pub fn check_sequential(password: &str, min_seq_length: usize) -> bool {
    if min_seq_length == 0 {
        return false;
    }

    let chars: Vec<char> = password.to_lowercase().chars().collect();
    chars.windows(min_seq_length).any(|window| {
        let slice: String = window.iter().collect();
        ALPHABET.contains(&slice) || DIGITS.contains(&slice)
    })
}

/// Penalizes runs of 3+ identical characters (e.g. `aaa`).
pub fn consecutive_section(input: &SectionInput<'_>) -> SectionResult {
    check_consecutive(input.password, MAX_CONSECUTIVE)
        .then(|| Finding::negative(-1, CONSECUTIVE_MESSAGE))
}

/// Penalizes sequential runs (e.g. `abc`, `123`), at most once.
pub fn sequential_section(input: &SectionInput<'_>) -> SectionResult {
    check_sequential(input.password, MIN_SEQ_LENGTH)
        .then(|| Finding::negative(-1, SEQUENTIAL_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common_passwords::CommonPasswords;

    #[test]
    fn test_check_consecutive() {
        assert!(check_consecutive("aaab", MAX_CONSECUTIVE));
        assert!(check_consecutive("xyz1111", MAX_CONSECUTIVE));
        assert!(!check_consecutive("aab", MAX_CONSECUTIVE));
        assert!(!check_consecutive("aabbaacc", MAX_CONSECUTIVE));
    }

    #[test]
    fn test_check_consecutive_short_input() {
        assert!(!check_consecutive("", MAX_CONSECUTIVE));
        assert!(!check_consecutive("a", MAX_CONSECUTIVE));
        assert!(!check_consecutive("aa", MAX_CONSECUTIVE));
    }

    #[test]
    fn test_check_consecutive_is_case_sensitive() {
        assert!(!check_consecutive("aAa", MAX_CONSECUTIVE));
    }

    #[test]
    fn test_check_consecutive_custom_limit() {
        assert!(check_consecutive("aab", 1));
        assert!(!check_consecutive("aaab", 3));
    }

    #[test]
    fn test_check_sequential() {
        assert!(check_sequential("xyzabc", MIN_SEQ_LENGTH));
        assert!(check_sequential("pass123", MIN_SEQ_LENGTH));
        assert!(check_sequential("zzXYZzz", MIN_SEQ_LENGTH));
        assert!(!check_sequential("xzy", MIN_SEQ_LENGTH));
    }

    #[test]
    fn test_check_sequential_ignores_descending_and_wraparound() {
        assert!(!check_sequential("cba", MIN_SEQ_LENGTH));
        assert!(!check_sequential("321", MIN_SEQ_LENGTH));
        assert!(!check_sequential("yza", MIN_SEQ_LENGTH));
        assert!(!check_sequential("901", MIN_SEQ_LENGTH));
    }

    #[test]
    fn test_check_sequential_short_input() {
        assert!(!check_sequential("", MIN_SEQ_LENGTH));
        assert!(!check_sequential("ab", MIN_SEQ_LENGTH));
        assert!(!check_sequential("abc", 0));
    }

    #[test]
    fn test_consecutive_section() {
        let common = CommonPasswords::builtin();
        let hit = SectionInput::new("aaaaBBBB1111", &common, 2024);
        let miss = SectionInput::new("RandomPass", &common, 2024);
        assert_eq!(consecutive_section(&hit), Some(Finding::negative(-1, CONSECUTIVE_MESSAGE)));
        assert_eq!(consecutive_section(&miss), None);
    }

    #[test]
    fn test_sequential_section_penalizes_once() {
        let common = CommonPasswords::builtin();
        let input = SectionInput::new("abc123def456", &common, 2024);
        assert_eq!(sequential_section(&input), Some(Finding::negative(-1, SEQUENTIAL_MESSAGE)));
    }
}
