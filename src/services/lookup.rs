//! Public lookup facade.
//!
//! `ScoreService` composes the validator, transport, normalizer and report
//! assemblers into the three operations the dashboard screens consume. Every
//! operation issues at most one outbound request, holds no shared mutable
//! state, and returns `Err(ServiceError)` whose `Display` is the single
//! user-facing message — nothing escapes as an unhandled fault.

use serde_json::Value;
use std::str::FromStr;

use crate::config::ClientConfig;
use crate::error::{ServiceError, ServiceResult};
use crate::models::{LeaderboardEntry, ScoreDistribution, StudentRecord, SubjectCode};
use crate::transport::{HttpTransport, ScoreTransport};

use super::{normalize, report, validation};

/// Lookup facade over an abstract transport.
pub struct ScoreService<T: ScoreTransport> {
    transport: T,
}

impl ScoreService<HttpTransport> {
    /// Build a service over the reqwest transport.
    pub fn connect(config: &ClientConfig) -> ServiceResult<Self> {
        Ok(Self::new(HttpTransport::new(config)?))
    }
}

impl<T: ScoreTransport> ScoreService<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// The underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Look up one student's scores by registration number.
    ///
    /// Invalid identifiers fail locally without any network call. A record
    /// that survives the envelope check but yields zero usable subjects is a
    /// failure, not a zero-score success.
    pub async fn lookup_student(&self, student_id: &str) -> ServiceResult<StudentRecord> {
        if !validation::is_valid_student_id(student_id) {
            return Err(ServiceError::validation(
                "invalid student id: enter 6-8 digits",
            ));
        }

        let envelope = self
            .transport
            .get(&format!("/scores/{}", student_id.trim()))
            .await?;

        if !envelope.is_success() {
            return Err(ServiceError::protocol(
                envelope.code,
                "no record found for this student id",
            ));
        }
        let Some(result) = envelope.result else {
            return Err(ServiceError::shape("unexpected data format from the server"));
        };

        let record = normalize::normalize_student(&result);
        if record.subject_count == 0 {
            return Err(ServiceError::empty("no scores found for this student id"));
        }

        Ok(record)
    }

    /// Fetch the top-10 leaderboard, in upstream rank order.
    ///
    /// An empty list is a valid success; a payload that is not a list is a
    /// shape failure.
    pub async fn fetch_leaderboard(&self) -> ServiceResult<Vec<LeaderboardEntry>> {
        let envelope = self.transport.get("/scores/report/top10").await?;

        if !envelope.is_success() {
            return Err(ServiceError::protocol(
                envelope.code,
                "no leaderboard data available",
            ));
        }

        match envelope.result {
            Some(Value::Array(entries)) => Ok(report::assemble_leaderboard(&entries)),
            _ => Err(ServiceError::shape("unexpected data format from the server")),
        }
    }

    /// Fetch the score distribution report for one subject.
    pub async fn fetch_distribution(
        &self,
        subject: SubjectCode,
    ) -> ServiceResult<ScoreDistribution> {
        let envelope = self
            .transport
            .get(&format!("/scores/report/{}", subject.wire_name()))
            .await?;

        if !envelope.is_success() {
            return Err(ServiceError::protocol(
                envelope.code,
                "no report data for this subject",
            ));
        }

        match envelope.result {
            Some(result) if result.is_object() => {
                Ok(report::assemble_distribution(subject, &result))
            }
            _ => Err(ServiceError::shape("unexpected data format from the server")),
        }
    }

    /// Like [`fetch_distribution`](Self::fetch_distribution) but taking the
    /// subject as a string, for callers at the UI boundary. Unknown subject
    /// names fail locally before any network call.
    pub async fn fetch_distribution_by_name(
        &self,
        subject: &str,
    ) -> ServiceResult<ScoreDistribution> {
        let subject = SubjectCode::from_str(subject)
            .map_err(|_| ServiceError::validation("invalid subject"))?;
        self.fetch_distribution(subject).await
    }
}
