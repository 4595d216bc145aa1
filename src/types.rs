//! Evaluation result types: score, strength label and feedback.

use std::fmt;

/// Highest score a password can reach.
pub const MAX_SCORE: u8 = 10;

/// Password score, always within `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Builds a score from a raw running total, clamping it into `0..=10`.
    pub fn new(raw: i64) -> Self {
        Self(raw.clamp(0, MAX_SCORE as i64) as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    /// Score as a percentage for progress bars (`score * 10`).
    pub fn percentage(&self) -> u8 {
        self.0 * 10
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, MAX_SCORE)
    }
}

/// Qualitative strength label derived from a [`PasswordScore`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            0..=3 => Self::VeryWeak,
            4..=5 => Self::Weak,
            6..=7 => Self::Moderate,
            8..=9 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Moderate => "Moderate",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Human-readable feedback, in the order the checks ran.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feedback {
    pub positive: Vec<String>,
    pub negative: Vec<String>,
}

impl Feedback {
    pub fn push_positive(&mut self, message: impl Into<String>) {
        self.positive.push(message.into());
    }

    pub fn push_negative(&mut self, message: impl Into<String>) {
        self.negative.push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.positive.is_empty() && self.negative.is_empty()
    }
}

/// Outcome of a password evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordEvaluation {
    pub score: PasswordScore,
    pub feedback: Feedback,
}

impl PasswordEvaluation {
    pub fn strength(&self) -> PasswordStrength {
        PasswordStrength::from_score(self.score)
    }
}
