//! Registration-number validation.

/// Returns true when `candidate` trims to 6–8 ASCII digits.
///
/// Pure and total; the facade calls this before any network traffic.
pub fn is_valid_student_id(candidate: &str) -> bool {
    let trimmed = candidate.trim();
    (6..=8).contains(&trimmed.len()) && trimmed.bytes().all(|b| b.is_ascii_digit())
}
