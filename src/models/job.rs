use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Structured statement of what a role requires.
///
/// Created once at submission time and immutable within the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobRequirement {
    pub id: Uuid,
    pub title: String,
    /// Normalized lowercase skills. Order matters for the greedy matcher and
    /// duplicates are kept as submitted.
    pub required_skills: Vec<String>,
    /// Minimum years of experience; 0 means no requirement.
    pub min_experience: f64,
    pub created_at: DateTime<Utc>,
}

impl JobRequirement {
    pub fn new(title: impl Into<String>, required_skills: Vec<String>, min_experience: f64) -> Self {
        JobRequirement {
            id: Uuid::new_v4(),
            title: title.into(),
            required_skills,
            min_experience: min_experience.max(0.0),
            created_at: Utc::now(),
        }
    }
}
