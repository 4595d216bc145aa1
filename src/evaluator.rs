//! Password strength evaluator - main evaluation logic.

use std::sync::LazyLock;

use chrono::Datelike;
use secrecy::{ExposeSecret, SecretString};

use crate::common_passwords::CommonPasswords;
use crate::sections::{
    Section, SectionInput, Verdict, character_variety_section, common_password_section,
    consecutive_section, date_pattern_section, length_section, sequential_section,
};
use crate::types::{Feedback, PasswordEvaluation, PasswordScore};

/// Sections in execution order; the order drives feedback ordering.
const SECTIONS: [(&str, Section); 6] = [
    ("length", length_section),
    ("variety", character_variety_section),
    ("common", common_password_section),
    ("consecutive", consecutive_section),
    ("sequential", sequential_section),
    ("date", date_pattern_section),
];

static DEFAULT_EVALUATOR: LazyLock<Evaluator> = LazyLock::new(Evaluator::new);

/// Scores passwords against a common password set and a reference year.
///
/// Holds only read-only data, so one instance can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    common: CommonPasswords,
    current_year: Option<i32>,
}

impl Evaluator {
    /// Evaluator with the built-in common password list and the wall-clock year.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_common_passwords(mut self, common: CommonPasswords) -> Self {
        self.common = common;
        self
    }

    /// Pins the reference year used by the date pattern check.
    pub fn with_current_year(mut self, year: i32) -> Self {
        self.current_year = Some(year);
        self
    }

    /// The pinned year, or the current local year.
    pub fn current_year(&self) -> i32 {
        self.current_year
            .unwrap_or_else(|| chrono::Local::now().year())
    }

    /// Evaluates password strength.
    ///
    /// Never fails: empty and very long passwords are scored like any other.
    /// The final score is `total + length / 2`, clamped into `0..=10`.
    pub fn evaluate(&self, password: &SecretString) -> PasswordEvaluation {
        let pwd = password.expose_secret();
        let input = SectionInput::new(pwd, &self.common, self.current_year());

        let mut feedback = Feedback::default();
        let mut total: i64 = 0;

        for (_section_name, section_fn) in SECTIONS {
            let Some(finding) = section_fn(&input) else {
                continue;
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(
                section = _section_name,
                points = finding.points,
                "{}",
                finding.message
            );

            total += finding.points;
            match finding.verdict {
                Verdict::Positive => feedback.push_positive(finding.message),
                Verdict::Negative => feedback.push_negative(finding.message),
            }
        }

        let score = PasswordScore::new(total + (input.length / 2) as i64);

        #[cfg(feature = "tracing")]
        tracing::debug!(total, length = input.length, score = score.value(), "password evaluated");

        PasswordEvaluation { score, feedback }
    }
}

/// Evaluates password strength with the built-in common password list and
/// the wall-clock year.
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    DEFAULT_EVALUATOR.evaluate(password)
}
