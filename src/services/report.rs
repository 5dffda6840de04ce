//! Distribution and leaderboard assembly.

use serde_json::Value;

use crate::models::{LeaderboardEntry, ScoreBand, ScoreBucket, ScoreDistribution, SubjectCode};

use super::normalize::{reconcile_subjects, string_field};

/// Raw fields that may carry a leaderboard entry's total score.
const TOTAL_FIELDS: [&str; 2] = ["tongDiem", "totalScore"];

/// Raw fields that may carry a leaderboard entry's registration number.
const ID_FIELDS: [&str; 2] = ["sbd", "studentId"];

fn count_field(raw: &Value, key: &str) -> u64 {
    match raw.get(key) {
        Some(value) => value
            .as_u64()
            .or_else(|| value.as_f64().filter(|v| *v >= 0.0).map(|v| v as u64))
            .unwrap_or(0),
        None => 0,
    }
}

fn number_field(raw: &Value, fields: &[&str]) -> Option<f64> {
    fields.iter().find_map(|field| match raw.get(field) {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    })
}

/// Assemble the four fixed buckets for one subject's distribution report.
///
/// Bands differ from subject scores: all four are always semantically
/// present, so a missing band key counts as zero instead of being omitted.
/// `total` is carried from the upstream payload as declared and is not
/// cross-checked against the bucket sum.
pub fn assemble_distribution(subject: SubjectCode, raw: &Value) -> ScoreDistribution {
    let buckets = ScoreBand::ALL.map(|band| ScoreBucket {
        band,
        count: count_field(raw, band.upstream_key()),
    });

    ScoreDistribution {
        subject,
        label: subject.label(),
        buckets,
        total: count_field(raw, "total"),
    }
}

/// Assemble leaderboard entries in the order the upstream delivered them.
///
/// The upstream is trusted to be rank-sorted already; no re-sorting,
/// re-ranking or rank deduplication happens here. Subjects are reconciled
/// per entry with the same skip-if-absent rule as student lookups, since
/// entries may cover different exam tracks. Entries without a usable rank
/// are dropped.
pub fn assemble_leaderboard(raw_entries: &[Value]) -> Vec<LeaderboardEntry> {
    raw_entries
        .iter()
        .filter_map(|raw| {
            let Some(rank) = number_field(raw, &["rank"])
                .filter(|r| r.fract() == 0.0 && *r > 0.0)
                .map(|r| r as u32)
            else {
                log::warn!("dropping leaderboard entry without a usable rank: {raw}");
                return None;
            };

            Some(LeaderboardEntry {
                rank,
                student_id: string_field(raw, &ID_FIELDS).unwrap_or_default(),
                total_score: number_field(raw, &TOTAL_FIELDS).unwrap_or(0.0),
                subjects: reconcile_subjects(raw),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_field_reads_integers_and_floats() {
        let raw = serde_json::json!({"lv1": 5, "lv2": 10.0});
        assert_eq!(count_field(&raw, "lv1"), 5);
        assert_eq!(count_field(&raw, "lv2"), 10);
        assert_eq!(count_field(&raw, "lv3"), 0);
    }

    #[test]
    fn test_number_field_first_match_wins() {
        let raw = serde_json::json!({"tongDiem": 27.5, "totalScore": 1.0});
        assert_eq!(number_field(&raw, &TOTAL_FIELDS), Some(27.5));

        let raw = serde_json::json!({"totalScore": "26.25"});
        assert_eq!(number_field(&raw, &TOTAL_FIELDS), Some(26.25));
    }
}
