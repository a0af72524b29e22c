mod candidate;
mod job;

pub use candidate::{CandidateRecord, EducationEntry, ExperienceEntry};
pub use job::JobRequirement;
