pub mod report;
pub mod student;
pub mod subject;

pub use report::{LeaderboardEntry, ScoreBand, ScoreBucket, ScoreDistribution};
pub use student::{StudentRecord, SubjectScore, UNKNOWN_NAME};
pub use subject::{ParseSubjectError, SubjectCode};
