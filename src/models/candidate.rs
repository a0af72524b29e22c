use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured profile extracted from one resume document.
///
/// Created once per successfully parsed document and never mutated by the
/// core afterwards. This is the record exchanged with the persistence
/// collaborator; the serde representation is the storage contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateRecord {
    pub id: Uuid,
    /// Best-effort; "Unknown" when no signal was found.
    pub name: String,
    /// May be empty.
    pub email: String,
    /// May be empty.
    pub phone: String,
    /// Normalized skills with no duplicates. Kept in extraction order so that
    /// ranking over the same record is deterministic.
    pub skills: Vec<String>,
    pub education: Vec<EducationEntry>,
    pub experience_entries: Vec<ExperienceEntry>,
    /// Aggregate years of experience, clamped to be non-negative.
    pub experience_years: f64,
    /// Original uploaded filename.
    pub resume_filename: String,
    pub parsed_at: DateTime<Utc>,
}

/// One degree mention. Fields are individually best-effort and may be empty.
/// Duplicate mentions of the same degree produce duplicate entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub university: String,
    pub year: String,
}

/// One job entry with an explicit `YYYY - YYYY|Present|Current` date range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_year: i32,
    /// The end of the range as written, e.g. "2022" or "Present".
    pub end_year_raw: String,
    pub duration_years: i32,
}
