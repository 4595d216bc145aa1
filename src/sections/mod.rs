//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength and may
//! report a finding: a score delta plus a feedback message.

mod common;
mod date;
mod length;
mod pattern;
mod variety;

pub use common::common_password_section;
pub use date::{check_date_pattern, date_pattern_section};
pub use length::length_section;
pub use pattern::{
    MAX_CONSECUTIVE, MIN_SEQ_LENGTH, check_consecutive, check_sequential, consecutive_section,
    sequential_section,
};
pub use variety::character_variety_section;

use crate::common_passwords::CommonPasswords;

/// Everything a section may look at.
#[derive(Debug, Clone, Copy)]
pub struct SectionInput<'a> {
    pub password: &'a str,
    /// Length in characters, not bytes.
    pub length: usize,
    pub common: &'a CommonPasswords,
    pub current_year: i32,
}

impl<'a> SectionInput<'a> {
    pub fn new(password: &'a str, common: &'a CommonPasswords, current_year: i32) -> Self {
        Self {
            password,
            length: password.chars().count(),
            common,
            current_year,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Positive,
    Negative,
}

/// Score contribution and feedback produced by a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Finding {
    pub points: i64,
    pub verdict: Verdict,
    pub message: &'static str,
}

impl Finding {
    pub fn positive(points: i64, message: &'static str) -> Self {
        Self { points, verdict: Verdict::Positive, message }
    }

    pub fn negative(points: i64, message: &'static str) -> Self {
        Self { points, verdict: Verdict::Negative, message }
    }
}

/// Result type for section evaluation functions.
/// - `Some(finding)` - Section contributed points and/or feedback
/// - `None` - Nothing to report
pub type SectionResult = Option<Finding>;

/// Signature shared by all sections.
pub type Section = fn(&SectionInput<'_>) -> SectionResult;
