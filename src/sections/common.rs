//! Common password section - checks the password against the denylist.

use super::{Finding, SectionInput, SectionResult};

pub const COMMON_PASSWORD_MESSAGE: &str = "Common password detected";

/// Penalizes passwords found in the common password set (case-insensitive).
pub fn common_password_section(input: &SectionInput<'_>) -> SectionResult {
    input
        .common
        .contains(input.password)
        .then(|| Finding::negative(-2, COMMON_PASSWORD_MESSAGE))
}
