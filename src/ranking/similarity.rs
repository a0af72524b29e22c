use std::sync::Arc;

use crate::nlp::{cosine_similarity, LanguageModel};

/// Normalize a skill string for comparison.
pub fn normalize_skill(skill: &str) -> String {
    skill.trim().to_lowercase()
}

/// Similarity between two skill phrases, in [0, 1].
///
/// Exact equality after normalization is the fast path; everything else goes
/// through the language model's vector space. The model is shared read-only,
/// so one scorer serves concurrent rankings.
pub struct SkillSimilarity {
    model: Arc<dyn LanguageModel>,
}

impl SkillSimilarity {
    pub fn new(model: Arc<dyn LanguageModel>) -> Self {
        SkillSimilarity { model }
    }

    pub fn score(&self, a: &str, b: &str) -> f64 {
        let norm_a = normalize_skill(a);
        let norm_b = normalize_skill(b);
        if norm_a == norm_b {
            return 1.0;
        }

        match (self.model.embed(&norm_a), self.model.embed(&norm_b)) {
            (Some(vec_a), Some(vec_b)) => f64::from(cosine_similarity(&vec_a, &vec_b)),
            // No usable vector representation for one side.
            _ => 0.0,
        }
    }
}
