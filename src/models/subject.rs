//! Canonical subject enumeration and the naming tables keyed to it.
//!
//! Three different names exist for every subject: the canonical code used
//! inside this crate, the wire name used as a path segment by the report
//! endpoints, and one or more raw-field spellings that upstream payloads use
//! for per-subject scores. All three are owned here so the mapping stays in
//! one place.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Canonical subject codes.
///
/// Declaration order is the canonical display order; a `BTreeMap` keyed by
/// `SubjectCode` iterates subjects in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubjectCode {
    Math,
    Literature,
    English,
    Physics,
    Chemistry,
    Biology,
    History,
    Geography,
    Civics,
}

impl SubjectCode {
    /// All subjects in canonical order.
    pub const ALL: [SubjectCode; 9] = [
        SubjectCode::Math,
        SubjectCode::Literature,
        SubjectCode::English,
        SubjectCode::Physics,
        SubjectCode::Chemistry,
        SubjectCode::Biology,
        SubjectCode::History,
        SubjectCode::Geography,
        SubjectCode::Civics,
    ];

    /// Stable lowercase identifier (`math`, `literature`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            SubjectCode::Math => "math",
            SubjectCode::Literature => "literature",
            SubjectCode::English => "english",
            SubjectCode::Physics => "physics",
            SubjectCode::Chemistry => "chemistry",
            SubjectCode::Biology => "biology",
            SubjectCode::History => "history",
            SubjectCode::Geography => "geography",
            SubjectCode::Civics => "civics",
        }
    }

    /// Short display label shown by the dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            SubjectCode::Math => "Toán",
            SubjectCode::Literature => "Văn",
            SubjectCode::English => "Anh",
            SubjectCode::Physics => "Lý",
            SubjectCode::Chemistry => "Hóa",
            SubjectCode::Biology => "Sinh",
            SubjectCode::History => "Sử",
            SubjectCode::Geography => "Địa",
            SubjectCode::Civics => "GDCD",
        }
    }

    /// Path segment used by the upstream report endpoints.
    pub fn wire_name(&self) -> &'static str {
        match self {
            SubjectCode::Math => "toan",
            SubjectCode::Literature => "nguvan",
            SubjectCode::English => "ngoainingu",
            SubjectCode::Physics => "vatli",
            SubjectCode::Chemistry => "hoahoc",
            SubjectCode::Biology => "sinhhoc",
            SubjectCode::History => "lichsu",
            SubjectCode::Geography => "diali",
            SubjectCode::Civics => "gdcd",
        }
    }

    /// Accepted raw-field spellings for this subject's score, highest
    /// priority first.
    ///
    /// Upstream payloads mix camel-cased Vietnamese, English and legacy short
    /// spellings; `ngoaiNgu` is the spelling the ranking payload uses for the
    /// foreign-language score. The first present field wins.
    pub fn raw_fields(&self) -> &'static [&'static str] {
        match self {
            SubjectCode::Math => &["toan", "math"],
            SubjectCode::Literature => &["nguVan", "literature", "van"],
            SubjectCode::English => &["ngoainingu", "ngoaiNgu", "english", "anh"],
            SubjectCode::Physics => &["vatLi", "physics", "ly"],
            SubjectCode::Chemistry => &["hoaHoc", "chemistry", "hoa"],
            SubjectCode::Biology => &["sinhHoc", "biology", "sinh"],
            SubjectCode::History => &["lichSu", "history", "su"],
            SubjectCode::Geography => &["diaLi", "geography", "dia"],
            SubjectCode::Civics => &["gdcd", "civics"],
        }
    }
}

impl fmt::Display for SubjectCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string is not a known subject code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown subject: {0}")]
pub struct ParseSubjectError(pub String);

impl FromStr for SubjectCode {
    type Err = ParseSubjectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SubjectCode::ALL
            .into_iter()
            .find(|code| code.as_str() == s)
            .ok_or_else(|| ParseSubjectError(s.to_string()))
    }
}
