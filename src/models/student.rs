//! Normalized student score records.

use serde::Serialize;
use std::collections::BTreeMap;

use super::SubjectCode;

/// Sentinel used when no name field is present in the raw record.
pub const UNKNOWN_NAME: &str = "Không có tên";

/// A single subject's score as shown to the user.
///
/// `value` is always finite and within `[0, 10]`; records with an unusable
/// value never produce a `SubjectScore` at all.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubjectScore {
    pub subject: SubjectCode,
    pub label: &'static str,
    pub value: f64,
}

/// One student's normalized scores plus derived metrics.
///
/// Built fresh from each lookup response and never mutated afterwards.
/// `subjects` holds only subjects actually present in the raw record, keyed
/// in canonical order; `total_score` is the exact sum of their values and
/// `average_score` is rounded to two decimals (0 when no subjects survived
/// reconciliation).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    pub student_id: String,
    pub name: String,
    pub subjects: BTreeMap<SubjectCode, SubjectScore>,
    pub total_score: f64,
    pub subject_count: usize,
    pub average_score: f64,
    /// Optional pass-through attribute from the raw `maNgoaiNgu` field;
    /// no invariant depends on it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_language_code: Option<String>,
}
