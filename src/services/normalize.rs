//! Field reconciliation and student-record normalization.
//!
//! Upstream records spell the same subject several different ways, sometimes
//! with string-typed numbers, sometimes with nulls for subjects the student
//! never sat. Reconciliation walks an ordered spelling table per subject and
//! keeps only values that parse to a finite score in range; everything else
//! is omitted, never zero-filled. Malformed fields are skipped silently and
//! never fail the whole record.

use serde_json::Value;
use std::collections::BTreeMap;

use crate::models::{StudentRecord, SubjectCode, SubjectScore, UNKNOWN_NAME};

/// Raw fields that may carry the registration number, first match wins.
const ID_FIELDS: [&str; 3] = ["sbd", "studentId", "id"];

/// Raw fields that may carry the display name, first match wins.
const NAME_FIELDS: [&str; 3] = ["name", "studentName", "fullName"];

/// Optional pass-through attribute for the foreign-language exam variant.
const FOREIGN_LANGUAGE_FIELD: &str = "maNgoaiNgu";

/// Extract a score from a raw JSON value.
///
/// Accepts JSON numbers and numeric strings; anything else, or anything
/// non-finite or outside `[0, 10]`, is rejected.
fn parse_score(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    (value.is_finite() && (0.0..=10.0).contains(&value)).then_some(value)
}

/// First present string-like value among `fields`, trimmed.
pub(crate) fn string_field(record: &Value, fields: &[&str]) -> Option<String> {
    fields.iter().find_map(|field| match record.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Some(s.trim().to_string()),
        Some(Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

/// Map a raw record onto the canonical per-subject score map.
///
/// For each subject the accepted spellings are consulted in order and the
/// first present, non-null, non-empty field becomes the candidate — later
/// spellings are only fallbacks for absent ones, so a present-but-malformed
/// field drops the subject rather than deferring to a legacy spelling.
/// Subjects with no usable value are absent from the map.
pub fn reconcile_subjects(record: &Value) -> BTreeMap<SubjectCode, SubjectScore> {
    let mut subjects = BTreeMap::new();

    for subject in SubjectCode::ALL {
        let candidate = subject
            .raw_fields()
            .iter()
            .find_map(|field| match record.get(field) {
                None | Some(Value::Null) => None,
                Some(Value::String(s)) if s.is_empty() => None,
                Some(value) => Some(value),
            });

        let Some(raw) = candidate else { continue };

        match parse_score(raw) {
            Some(value) => {
                subjects.insert(
                    subject,
                    SubjectScore {
                        subject,
                        label: subject.label(),
                        value,
                    },
                );
            }
            None => log::debug!("skipping {subject} score, unusable value {raw}"),
        }
    }

    subjects
}

/// Round half away from zero at two decimal places, matching how the
/// dashboard displays averages.
fn round_two_decimals(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Build a [`StudentRecord`] with derived metrics from a raw record.
///
/// Deterministic and side-effect free; calling it twice on the same input
/// yields structurally equal records. The total is an exact sum — only the
/// average is rounded.
pub fn normalize_student(record: &Value) -> StudentRecord {
    let subjects = reconcile_subjects(record);
    let total_score: f64 = subjects.values().map(|s| s.value).sum();
    let subject_count = subjects.len();
    let average_score = if subject_count > 0 {
        round_two_decimals(total_score / subject_count as f64)
    } else {
        0.0
    };

    StudentRecord {
        student_id: string_field(record, &ID_FIELDS).unwrap_or_default(),
        name: string_field(record, &NAME_FIELDS).unwrap_or_else(|| UNKNOWN_NAME.to_string()),
        subjects,
        total_score,
        subject_count,
        average_score,
        foreign_language_code: string_field(record, &[FOREIGN_LANGUAGE_FIELD]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_score_accepts_numbers_and_numeric_strings() {
        assert_eq!(parse_score(&serde_json::json!(8.5)), Some(8.5));
        assert_eq!(parse_score(&serde_json::json!("8.5")), Some(8.5));
        assert_eq!(parse_score(&serde_json::json!(" 10 ")), Some(10.0));
        assert_eq!(parse_score(&serde_json::json!(0)), Some(0.0));
    }

    #[test]
    fn test_parse_score_rejects_out_of_range_and_junk() {
        assert_eq!(parse_score(&serde_json::json!(10.5)), None);
        assert_eq!(parse_score(&serde_json::json!(-0.5)), None);
        assert_eq!(parse_score(&serde_json::json!("abc")), None);
        assert_eq!(parse_score(&serde_json::json!("")), None);
        assert_eq!(parse_score(&serde_json::json!(null)), None);
        assert_eq!(parse_score(&serde_json::json!(true)), None);
        assert_eq!(parse_score(&serde_json::json!([8.5])), None);
    }

    #[test]
    fn test_round_two_decimals_rounds_half_away_from_zero() {
        assert_eq!(round_two_decimals(6.125), 6.13);
        assert_eq!(round_two_decimals(7.0 / 3.0), 2.33);
        assert_eq!(round_two_decimals(8.5), 8.5);
    }
}
