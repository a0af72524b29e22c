//! Language-model capability consumed by the parser and the similarity scorer.
//!
//! The model is expensive to build and shared read-only by every caller for
//! the process lifetime, so it is carried as an explicit `Arc<dyn
//! LanguageModel>` injected into `ResumeParser` and `RankingEngine` rather
//! than a process global. Implementations must be safe for concurrent
//! read-only inference.

mod hash_model;

pub use hash_model::HashPhraseModel;

/// Abstract interface over the text-understanding capability.
///
/// `embed` returns `None` when the phrase produces no usable vector
/// representation (for example, an empty phrase); callers treat that as zero
/// similarity. `person_names` and `noun_phrases` back the name-extraction
/// fallback and the skills-section chunker.
pub trait LanguageModel: Send + Sync {
    /// Implementation name, e.g. "hash".
    fn name(&self) -> &'static str;

    /// Model generation; bump whenever embeddings change for fixed input.
    fn version(&self) -> &str;

    /// Embedding dimension.
    fn dimension(&self) -> usize;

    /// Vector representation of a short phrase, or `None` if unrepresentable.
    fn embed(&self, phrase: &str) -> Option<Vec<f32>>;

    /// Person-name entities found in `text`, in order of appearance.
    fn person_names(&self, text: &str) -> Vec<String>;

    /// Noun-phrase chunks found in `text`, in order of appearance.
    fn noun_phrases(&self, text: &str) -> Vec<String>;
}

/// Cosine similarity of two embeddings, mapped to [0, 1].
///
/// Raw cosine lives in [-1, 1]; the similarity contract of this crate is
/// [0, 1], so the value is shifted and halved. Mismatched dimensions and zero
/// vectors score 0.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        tracing::warn!(
            a_len = a.len(),
            b_len = b.len(),
            "embedding dimension mismatch; returning zero similarity"
        );
        return 0.0;
    }

    let dot: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    ((dot / (norm_a * norm_b)) + 1.0) / 2.0
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cosine_similarity_identical_vectors_is_one() {
        let a = vec![1.0, 0.0, 0.0];
        assert!((cosine_similarity(&a, &a) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cosine_similarity_opposite_vectors_is_zero() {
        let a = vec![1.0, 0.0];
        let b = vec![-1.0, 0.0];
        assert!(cosine_similarity(&a, &b).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cosine_similarity_orthogonal_vectors_is_half() {
        let a = vec![1.0, 0.0];
        let b = vec![0.0, 1.0];
        assert!((cosine_similarity(&a, &b) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_cosine_similarity_zero_vector_is_zero() {
        assert_eq!(cosine_similarity(&[0.0, 0.0], &[0.0, 0.0]), 0.0);
    }

    #[test]
    fn test_cosine_similarity_dimension_mismatch_is_zero() {
        assert_eq!(cosine_similarity(&[1.0, 0.0, 0.0], &[1.0, 0.0]), 0.0);
    }
}
