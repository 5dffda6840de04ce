//! Tests for field reconciliation and student-record normalization.

use proptest::prelude::*;
use serde_json::json;

use exam_scores::models::{SubjectCode, UNKNOWN_NAME};
use exam_scores::services::{normalize_student, reconcile_subjects};

#[test]
fn test_single_subject_record() {
    let raw = json!({"sbd": "123456", "toan": "8.5", "nguVan": null});
    let record = normalize_student(&raw);

    assert_eq!(record.student_id, "123456");
    assert_eq!(record.subject_count, 1);
    assert_eq!(record.total_score, 8.5);
    assert_eq!(record.average_score, 8.5);

    let math = &record.subjects[&SubjectCode::Math];
    assert_eq!(math.value, 8.5);
    assert_eq!(math.label, "Toán");
    assert!(!record.subjects.contains_key(&SubjectCode::Literature));
}

#[test]
fn test_record_with_no_recognizable_fields() {
    let raw = json!({"sbd": "123456", "unrelated": 1, "physics_score": 9.0});
    let record = normalize_student(&raw);

    assert_eq!(record.subject_count, 0);
    assert_eq!(record.total_score, 0.0);
    assert_eq!(record.average_score, 0.0);
    assert!(record.subjects.is_empty());
}

#[test]
fn test_name_fallback_chain() {
    let record = normalize_student(&json!({"studentName": "Nguyễn Văn A"}));
    assert_eq!(record.name, "Nguyễn Văn A");

    let record = normalize_student(&json!({"fullName": "Trần B"}));
    assert_eq!(record.name, "Trần B");

    let record = normalize_student(&json!({"toan": 5.0}));
    assert_eq!(record.name, UNKNOWN_NAME);
}

#[test]
fn test_identifier_fallback_chain() {
    let record = normalize_student(&json!({"studentId": "654321"}));
    assert_eq!(record.student_id, "654321");

    let record = normalize_student(&json!({"id": 654321}));
    assert_eq!(record.student_id, "654321");
}

#[test]
fn test_first_spelling_wins_over_legacy() {
    let raw = json!({"toan": 5.0, "math": 9.0});
    let subjects = reconcile_subjects(&raw);
    assert_eq!(subjects[&SubjectCode::Math].value, 5.0);
}

#[test]
fn test_null_spelling_falls_through_to_next() {
    let raw = json!({"nguVan": null, "literature": 6.5});
    let subjects = reconcile_subjects(&raw);
    assert_eq!(subjects[&SubjectCode::Literature].value, 6.5);
}

#[test]
fn test_present_but_malformed_field_drops_the_subject() {
    // A present spelling is the candidate even when unusable; legacy
    // spellings are fallbacks for absent fields only.
    let raw = json!({"vatLi": "abc", "physics": 7.0});
    let subjects = reconcile_subjects(&raw);
    assert!(!subjects.contains_key(&SubjectCode::Physics));
}

#[test]
fn test_out_of_range_scores_are_omitted_not_zeroed() {
    let raw = json!({"toan": 10.5, "nguVan": -1.0, "gdcd": 10.0});
    let subjects = reconcile_subjects(&raw);

    assert!(!subjects.contains_key(&SubjectCode::Math));
    assert!(!subjects.contains_key(&SubjectCode::Literature));
    assert_eq!(subjects[&SubjectCode::Civics].value, 10.0);
}

#[test]
fn test_leaderboard_spelling_for_english_is_accepted() {
    let raw = json!({"ngoaiNgu": 9.25});
    let subjects = reconcile_subjects(&raw);
    assert_eq!(subjects[&SubjectCode::English].value, 9.25);
}

#[test]
fn test_subjects_iterate_in_canonical_order() {
    let raw = json!({"gdcd": 8.0, "toan": 7.0, "lichSu": 6.0});
    let subjects = reconcile_subjects(&raw);

    let order: Vec<SubjectCode> = subjects.keys().copied().collect();
    assert_eq!(
        order,
        vec![SubjectCode::Math, SubjectCode::History, SubjectCode::Civics]
    );
}

#[test]
fn test_average_rounds_half_away_from_zero() {
    // 6.0 and 6.25 average to exactly 6.125; display rounding gives 6.13,
    // where banker's rounding would give 6.12.
    let raw = json!({"toan": 6.0, "nguVan": 6.25});
    let record = normalize_student(&raw);
    assert_eq!(record.average_score, 6.13);
}

#[test]
fn test_total_is_exact_and_average_is_rounded() {
    let raw = json!({"toan": 8.0, "nguVan": 7.0, "ngoainingu": 6.5});
    let record = normalize_student(&raw);

    assert_eq!(record.total_score, 21.5);
    assert_eq!(record.subject_count, 3);
    assert_eq!(record.average_score, 7.17);
}

#[test]
fn test_foreign_language_code_passes_through() {
    let record = normalize_student(&json!({"toan": 5.0, "maNgoaiNgu": "N1"}));
    assert_eq!(record.foreign_language_code.as_deref(), Some("N1"));

    let record = normalize_student(&json!({"toan": 5.0}));
    assert_eq!(record.foreign_language_code, None);
}

#[test]
fn test_normalization_is_idempotent() {
    let raw = json!({
        "sbd": "1020304",
        "name": "Lê C",
        "toan": "9.0",
        "vatLi": 8.75,
        "hoaHoc": "",
        "sinhHoc": "junk"
    });
    assert_eq!(normalize_student(&raw), normalize_student(&raw));
}

proptest! {
    /// The total is always exactly the sum of the surviving subject values.
    #[test]
    fn prop_total_equals_sum_of_values(
        scores in proptest::collection::vec((0usize..9, 0.0f64..=10.0), 0..9)
    ) {
        let mut raw = serde_json::Map::new();
        for (idx, value) in &scores {
            let subject = SubjectCode::ALL[*idx];
            raw.insert(subject.raw_fields()[0].to_string(), json!(value));
        }
        let record = normalize_student(&serde_json::Value::Object(raw));

        let sum: f64 = record.subjects.values().map(|s| s.value).sum();
        prop_assert_eq!(record.total_score, sum);
        prop_assert_eq!(record.subject_count, record.subjects.len());
    }

    /// Subjects with no accepted spelling present never appear in the map.
    #[test]
    fn prop_unknown_fields_never_produce_subjects(
        keys in proptest::collection::vec("[a-z]{3,10}", 0..8),
        value in 0.0f64..=10.0
    ) {
        let accepted: Vec<&str> = SubjectCode::ALL
            .iter()
            .flat_map(|c| c.raw_fields().iter().copied())
            .collect();

        let mut raw = serde_json::Map::new();
        for key in keys.iter().filter(|k| !accepted.contains(&k.as_str())) {
            raw.insert(key.clone(), json!(value));
        }
        let subjects = reconcile_subjects(&serde_json::Value::Object(raw));
        prop_assert!(subjects.is_empty());
    }
}
