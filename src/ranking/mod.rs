//! Candidate ranking against a job requirement.

pub mod scoring;
mod similarity;

pub use scoring::MatchedSkill;
pub use similarity::{normalize_skill, SkillSimilarity};

use std::cmp::Ordering;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::Config;
use crate::models::{CandidateRecord, JobRequirement};
use crate::nlp::LanguageModel;

/// Weights of the two score components.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RankingWeights {
    pub skill: f64,
    pub experience: f64,
}

impl Default for RankingWeights {
    fn default() -> Self {
        RankingWeights {
            skill: crate::config::DEFAULT_SKILL_WEIGHT,
            experience: crate::config::DEFAULT_EXPERIENCE_WEIGHT,
        }
    }
}

/// One candidate's scores against a job. Composed at ranking time for the
/// presentation collaborator and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    pub candidate: CandidateRecord,
    /// In [0, 1].
    pub skill_score: f64,
    /// In [0, 1.5]; exceeding the minimum earns a capped bonus.
    pub experience_score: f64,
    /// Weighted combination, in [0, 1.15] with default weights.
    pub total_score: f64,
    pub matched_skills: Vec<MatchedSkill>,
}

/// Ranks candidates by weighted skill and experience fit.
///
/// Pure and side-effect free per call; holds only the shared similarity
/// scorer, so one engine instance serves concurrent requests.
pub struct RankingEngine {
    similarity: SkillSimilarity,
    weights: RankingWeights,
    match_threshold: f64,
}

impl RankingEngine {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        RankingEngine {
            similarity: SkillSimilarity::new(model),
            weights: RankingWeights::default(),
            match_threshold: crate::config::DEFAULT_MATCH_THRESHOLD,
        }
    }

    pub fn with_config(model: Arc<dyn LanguageModel>, config: &Config) -> Self {
        RankingEngine {
            similarity: SkillSimilarity::new(model),
            weights: RankingWeights {
                skill: config.skill_weight,
                experience: config.experience_weight,
            },
            match_threshold: config.match_threshold,
        }
    }

    /// Score every candidate and sort by descending total score. The sort is
    /// stable: candidates with equal totals keep their input order.
    pub fn rank(
        &self,
        candidates: &[CandidateRecord],
        job: &JobRequirement,
    ) -> Vec<RankedResult> {
        let mut results: Vec<RankedResult> = candidates
            .iter()
            .map(|candidate| self.score_candidate(candidate, job))
            .collect();

        results.sort_by(|a, b| {
            b.total_score
                .partial_cmp(&a.total_score)
                .unwrap_or(Ordering::Equal)
        });

        debug!(
            job = %job.title,
            candidates = results.len(),
            "ranking complete"
        );
        results
    }

    fn score_candidate(&self, candidate: &CandidateRecord, job: &JobRequirement) -> RankedResult {
        let skill_score = scoring::skill_match_score(
            &self.similarity,
            &candidate.skills,
            &job.required_skills,
            self.match_threshold,
        );
        let experience_score =
            scoring::experience_score(candidate.experience_years, job.min_experience);
        let total_score =
            self.weights.skill * skill_score + self.weights.experience * experience_score;

        RankedResult {
            candidate: candidate.clone(),
            skill_score,
            experience_score,
            total_score,
            matched_skills: scoring::matched_skills(
                &self.similarity,
                &candidate.skills,
                &job.required_skills,
                self.match_threshold,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nlp::testing::NullModel;
    use crate::nlp::HashPhraseModel;
    use chrono::Utc;
    use uuid::Uuid;

    // NullModel keeps expectations exact: only identical skills match.
    fn engine() -> RankingEngine {
        RankingEngine::new(Arc::new(NullModel))
    }

    fn candidate(name: &str, skills: &[&str], years: f64) -> CandidateRecord {
        CandidateRecord {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: String::new(),
            phone: String::new(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            education: Vec::new(),
            experience_entries: Vec::new(),
            experience_years: years,
            resume_filename: format!("{name}.pdf"),
            parsed_at: Utc::now(),
        }
    }

    fn job(required: &[&str], min_experience: f64) -> JobRequirement {
        JobRequirement::new(
            "Engineer",
            required.iter().map(|s| s.to_string()).collect(),
            min_experience,
        )
    }

    #[test]
    fn test_better_skill_match_ranks_first() {
        let candidates = vec![
            candidate("partial", &["python"], 5.0),
            candidate("full", &["python", "aws"], 5.0),
        ];
        let ranked = engine().rank(&candidates, &job(&["python", "aws"], 0.0));
        assert_eq!(ranked[0].candidate.name, "full");
        assert_eq!(ranked[1].candidate.name, "partial");
        assert!(ranked[0].total_score > ranked[1].total_score);
    }

    #[test]
    fn test_sorted_descending() {
        let candidates = vec![
            candidate("none", &[], 0.0),
            candidate("strong", &["rust", "sql"], 10.0),
            candidate("medium", &["rust"], 3.0),
        ];
        let ranked = engine().rank(&candidates, &job(&["rust", "sql"], 5.0));
        for pair in ranked.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
        }
    }

    #[test]
    fn test_ties_keep_input_order() {
        let first = candidate("first", &["python"], 5.0);
        let second = candidate("second", &["python"], 5.0);
        let first_id = first.id;
        let second_id = second.id;

        let ranked = engine().rank(&[first, second], &job(&["python"], 5.0));
        assert_eq!(ranked[0].candidate.id, first_id);
        assert_eq!(ranked[1].candidate.id, second_id);
        assert_eq!(ranked[0].total_score, ranked[1].total_score);
    }

    #[test]
    fn test_no_required_skills_scores_one() {
        let ranked = engine().rank(&[candidate("anyone", &["knitting"], 0.0)], &job(&[], 0.0));
        assert_eq!(ranked[0].skill_score, 1.0);
        assert_eq!(ranked[0].experience_score, 1.0);
        assert!((ranked[0].total_score - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_total_score_weighting() {
        // Full skills, double the required experience: 0.7*1.0 + 0.3*1.5.
        let ranked = engine().rank(
            &[candidate("vet", &["python"], 10.0)],
            &job(&["python"], 5.0),
        );
        assert!((ranked[0].total_score - 1.15).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounds_hold() {
        // The semantic model is in play here, so only the bounds are asserted.
        let hash_engine = RankingEngine::new(Arc::new(HashPhraseModel::default()));
        let candidates = vec![
            candidate("a", &["python", "sql", "aws"], 20.0),
            candidate("b", &[], 0.0),
            candidate("c", &["cobol"], 2.5),
        ];
        let ranked = hash_engine.rank(&candidates, &job(&["python", "terraform"], 4.0));
        for result in &ranked {
            assert!((0.0..=1.0).contains(&result.skill_score));
            assert!((0.0..=1.5).contains(&result.experience_score));
            assert!((0.0..=1.15).contains(&result.total_score));
        }
    }

    #[test]
    fn test_matched_skills_populated() {
        let ranked = engine().rank(
            &[candidate("dev", &["Python", "docker"], 0.0)],
            &job(&["python"], 0.0),
        );
        assert_eq!(ranked[0].matched_skills.len(), 1);
        assert_eq!(ranked[0].matched_skills[0].required, "python");
        assert_eq!(ranked[0].matched_skills[0].candidate, "python");
    }

    #[test]
    fn test_empty_candidate_list() {
        assert!(engine().rank(&[], &job(&["python"], 0.0)).is_empty());
    }
}
