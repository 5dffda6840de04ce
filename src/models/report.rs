//! Report types: per-subject score distributions and the leaderboard.

use serde::Serialize;
use std::collections::BTreeMap;

use super::{SubjectCode, SubjectScore};

/// The four fixed score bands, lowest first.
///
/// The upstream report payload counts bands top-down (`lv1` is the 8–10
/// band, `lv4` is below 4); the chart wants them lowest first, so the
/// mapping is reversed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ScoreBand {
    Below4,
    From4To6,
    From6To8,
    From8To10,
}

impl ScoreBand {
    /// All bands in display order.
    pub const ALL: [ScoreBand; 4] = [
        ScoreBand::Below4,
        ScoreBand::From4To6,
        ScoreBand::From6To8,
        ScoreBand::From8To10,
    ];

    /// Band key used by the upstream report payload.
    pub fn upstream_key(&self) -> &'static str {
        match self {
            ScoreBand::Below4 => "lv4",
            ScoreBand::From4To6 => "lv3",
            ScoreBand::From6To8 => "lv2",
            ScoreBand::From8To10 => "lv1",
        }
    }

    /// Axis label shown by the distribution chart.
    pub fn label(&self) -> &'static str {
        match self {
            ScoreBand::Below4 => "Dưới 4 điểm",
            ScoreBand::From4To6 => "Từ 4 đến 6 điểm",
            ScoreBand::From6To8 => "Từ 6 đến 8 điểm",
            ScoreBand::From8To10 => "Từ 8 đến 10 điểm",
        }
    }
}

/// One band's student count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoreBucket {
    pub band: ScoreBand,
    pub count: u64,
}

/// Score distribution for one subject.
///
/// `total` is carried from the upstream payload as declared; it is not
/// cross-checked against the bucket sum.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreDistribution {
    pub subject: SubjectCode,
    pub label: &'static str,
    pub buckets: [ScoreBucket; 4],
    pub total: u64,
}

/// One row of the top-10 leaderboard, in upstream rank order.
///
/// Rank and total score are carried through unchanged; entries may cover
/// different subject subsets depending on each student's exam track.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: u32,
    pub student_id: String,
    pub total_score: f64,
    pub subjects: BTreeMap<SubjectCode, SubjectScore>,
}
