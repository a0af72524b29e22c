//! Resume screening core: parsing and candidate ranking.
//!
//! Two operations make up the public surface:
//!
//! - [`ResumeParser::parse`] turns uploaded PDF/DOCX bytes into a
//!   [`CandidateRecord`]. It fails only when the file format is unrecognized
//!   or no text could be extracted; individual fields are always best-effort.
//! - [`RankingEngine::rank`] scores a set of candidates against a
//!   [`JobRequirement`] and returns a deterministic, explainable ordering.
//!
//! Both hold a shared, read-only [`nlp::LanguageModel`]; build it once at
//! startup and hand the same `Arc` to each:
//!
//! ```
//! use std::sync::Arc;
//! use screener_core::nlp::HashPhraseModel;
//! use screener_core::{JobRequirement, RankingEngine, ResumeParser};
//!
//! let model = Arc::new(HashPhraseModel::default());
//! let parser = ResumeParser::new(model.clone());
//! let engine = RankingEngine::new(model);
//!
//! let job = JobRequirement::new("Backend Engineer", vec!["python".into()], 3.0);
//! let ranked = engine.rank(&[], &job);
//! assert!(ranked.is_empty());
//! # let _ = parser;
//! ```

pub mod config;
pub mod errors;
pub mod logging;
pub mod models;
pub mod nlp;
pub mod parser;
pub mod ranking;

pub use config::Config;
pub use errors::ParseError;
pub use models::{CandidateRecord, EducationEntry, ExperienceEntry, JobRequirement};
pub use parser::ResumeParser;
pub use ranking::{MatchedSkill, RankedResult, RankingEngine};
