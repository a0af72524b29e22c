use std::hash::{Hash, Hasher};

use once_cell::sync::Lazy;
use regex::Regex;
use siphasher::sip::SipHasher13;

use super::LanguageModel;
use crate::config::DEFAULT_EMBEDDING_DIMENSION;

// Fixed seeds keep embeddings stable across processes and Rust versions.
// Changing them changes every vector; bump `version()` if you do.
const HASH_SEED_K0: u64 = 0x5ce3_1f09_77ad_c24b;
const HASH_SEED_K1: u64 = 0x9d4b_a86e_02f1_53c7;

static PERSON_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][a-z]+(?: [A-Z][a-z]+){1,3}\b").unwrap());

static PHRASE_SPLIT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,;:\n•·|]|\band\b|&").unwrap());

const HEADER_WORDS: [&str; 4] = ["resume", "cv", "curriculum", "vitae"];

/// Deterministic feature-hashing phrase model.
///
/// Embeds a phrase as a signed bag of word and character-trigram features
/// hashed into a fixed-dimension L2-normalized vector. Training-free and
/// reentrant, so a single instance serves concurrent callers. Accuracy is
/// modest by construction; production deployments can swap in a real
/// vector-space model behind the same trait.
pub struct HashPhraseModel {
    dimension: usize,
}

impl HashPhraseModel {
    pub fn new(dimension: usize) -> Self {
        HashPhraseModel {
            dimension: dimension.max(1),
        }
    }

    fn hash_token(&self, token: &str) -> usize {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K0, HASH_SEED_K1);
        token.hash(&mut hasher);
        (hasher.finish() as usize) % self.dimension
    }

    /// Sign hashing: half the tokens contribute negatively, which keeps
    /// unrelated phrases near-orthogonal in expectation.
    fn token_sign(&self, token: &str) -> f32 {
        let mut hasher = SipHasher13::new_with_keys(HASH_SEED_K1, HASH_SEED_K0);
        token.hash(&mut hasher);
        if hasher.finish() % 2 == 0 {
            1.0
        } else {
            -1.0
        }
    }

    fn tokens(phrase: &str) -> Vec<String> {
        let normalized = phrase.trim().to_lowercase();
        let words: Vec<&str> = normalized
            .split(|c: char| !c.is_alphanumeric() && c != '+' && c != '#')
            .filter(|w| !w.is_empty())
            .collect();

        let mut tokens: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        for word in &words {
            let chars: Vec<char> = word.chars().collect();
            if chars.len() > 3 {
                for window in chars.windows(3) {
                    tokens.push(window.iter().collect());
                }
            }
        }
        tokens
    }
}

impl Default for HashPhraseModel {
    fn default() -> Self {
        HashPhraseModel::new(DEFAULT_EMBEDDING_DIMENSION)
    }
}

impl LanguageModel for HashPhraseModel {
    fn name(&self) -> &'static str {
        "hash"
    }

    fn version(&self) -> &str {
        "v1"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, phrase: &str) -> Option<Vec<f32>> {
        let tokens = Self::tokens(phrase);
        if tokens.is_empty() {
            return None;
        }

        let mut vector = vec![0.0f32; self.dimension];
        for token in &tokens {
            let idx = self.hash_token(token);
            vector[idx] += self.token_sign(token);
        }

        let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm == 0.0 {
            return None;
        }
        for v in &mut vector {
            *v /= norm;
        }
        Some(vector)
    }

    fn person_names(&self, text: &str) -> Vec<String> {
        PERSON_NAME_RE
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .filter(|candidate| {
                let lower = candidate.to_lowercase();
                !HEADER_WORDS.iter().any(|w| lower.contains(w))
            })
            .collect()
    }

    fn noun_phrases(&self, text: &str) -> Vec<String> {
        PHRASE_SPLIT_RE
            .split(text)
            .map(|chunk| {
                chunk
                    .trim_matches(|c: char| {
                        c.is_whitespace() || matches!(c, '-' | '–' | '—' | '*' | '.')
                    })
                    .to_string()
            })
            .filter(|chunk| !chunk.is_empty())
            .collect()
    }
}
