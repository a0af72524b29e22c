//! Score components for candidate ranking.
//!
//! The skill matcher is a greedy, input-order-dependent one-to-one assignment
//! on purpose: required skills are considered in the job's stored order and
//! each candidate skill can satisfy at most one of them. The matched-skills
//! display list is computed independently and is not mutually exclusive, so a
//! strong candidate skill may appear against several requirements there. Both
//! behaviors are part of the scoring contract; do not "fix" either without a
//! product decision.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::similarity::{normalize_skill, SkillSimilarity};

/// One display pair for the ranking view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedSkill {
    pub required: String,
    pub candidate: String,
    pub score: f64,
}

/// Greedy skill match score in [0, 1].
///
/// No required skills means a perfect score. Otherwise each required skill
/// claims the best-scoring unused candidate skill; claims below `threshold`
/// contribute nothing and consume nothing.
pub fn skill_match_score(
    similarity: &SkillSimilarity,
    candidate_skills: &[String],
    required_skills: &[String],
    threshold: f64,
) -> f64 {
    if required_skills.is_empty() {
        return 1.0;
    }

    let candidates: Vec<String> = candidate_skills.iter().map(|s| normalize_skill(s)).collect();
    let required: Vec<String> = required_skills.iter().map(|s| normalize_skill(s)).collect();

    let mut claimed: HashSet<usize> = HashSet::new();
    let mut total = 0.0;

    for req_skill in &required {
        let mut best_score = 0.0;
        let mut best_idx: Option<usize> = None;

        for (idx, cand_skill) in candidates.iter().enumerate() {
            if claimed.contains(&idx) {
                continue;
            }
            let score = similarity.score(req_skill, cand_skill);
            if score > best_score {
                best_score = score;
                best_idx = Some(idx);
            }
        }

        if best_score >= threshold {
            total += best_score;
            if let Some(idx) = best_idx {
                claimed.insert(idx);
            }
        }
    }

    total / required.len() as f64
}

/// Experience score in [0, 1.5].
///
/// No minimum means full credit. Below the minimum, credit is proportional;
/// at or above it, a bonus accrues for extra experience and saturates at +0.5
/// once the surplus reaches the minimum itself.
pub fn experience_score(candidate_years: f64, min_experience: f64) -> f64 {
    let min_exp = if min_experience.is_finite() {
        min_experience
    } else {
        0.0
    };
    if min_exp <= 0.0 {
        return 1.0;
    }

    let candidate = if candidate_years.is_finite() {
        candidate_years.max(0.0)
    } else {
        0.0
    };

    if candidate < min_exp {
        candidate / min_exp
    } else {
        1.0 + (0.5f64).min((candidate - min_exp) / (min_exp * 2.0))
    }
}

/// Display list of best matches per required skill, threshold-gated.
/// Unlike the scoring pass, candidate skills are not consumed here.
pub fn matched_skills(
    similarity: &SkillSimilarity,
    candidate_skills: &[String],
    required_skills: &[String],
    threshold: f64,
) -> Vec<MatchedSkill> {
    if required_skills.is_empty() || candidate_skills.is_empty() {
        return Vec::new();
    }

    let candidates: Vec<String> = candidate_skills.iter().map(|s| normalize_skill(s)).collect();
    let required: Vec<String> = required_skills.iter().map(|s| normalize_skill(s)).collect();

    let mut matches = Vec::new();
    for req_skill in &required {
        let mut best: Option<MatchedSkill> = None;
        let mut best_score = 0.0;

        for cand_skill in &candidates {
            let score = similarity.score(req_skill, cand_skill);
            if score >= threshold && score > best_score {
                best_score = score;
                best = Some(MatchedSkill {
                    required: req_skill.clone(),
                    candidate: cand_skill.clone(),
                    score,
                });
            }
        }

        if let Some(found) = best {
            matches.push(found);
        }
    }
    matches
}
