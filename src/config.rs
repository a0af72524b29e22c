use anyhow::{Context, Result};

pub const DEFAULT_MATCH_THRESHOLD: f64 = 0.8;
pub const DEFAULT_SKILL_WEIGHT: f64 = 0.7;
pub const DEFAULT_EXPERIENCE_WEIGHT: f64 = 0.3;
pub const DEFAULT_EMBEDDING_DIMENSION: usize = 256;

/// Engine configuration loaded from environment variables.
/// Every knob has a default, so `from_env` only fails on unparsable values.
#[derive(Debug, Clone)]
pub struct Config {
    /// Minimum similarity for a skill pair to count as a match.
    pub match_threshold: f64,
    /// Weight of the skill score in the total.
    pub skill_weight: f64,
    /// Weight of the experience score in the total.
    pub experience_weight: f64,
    /// Dimension of the built-in hash embedding model.
    pub embedding_dimension: usize,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            match_threshold: env_parse("SCREENER_MATCH_THRESHOLD", DEFAULT_MATCH_THRESHOLD)?,
            skill_weight: env_parse("SCREENER_SKILL_WEIGHT", DEFAULT_SKILL_WEIGHT)?,
            experience_weight: env_parse("SCREENER_EXPERIENCE_WEIGHT", DEFAULT_EXPERIENCE_WEIGHT)?,
            embedding_dimension: env_parse(
                "SCREENER_EMBEDDING_DIMENSION",
                DEFAULT_EMBEDDING_DIMENSION,
            )?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            match_threshold: DEFAULT_MATCH_THRESHOLD,
            skill_weight: DEFAULT_SKILL_WEIGHT,
            experience_weight: DEFAULT_EXPERIENCE_WEIGHT,
            embedding_dimension: DEFAULT_EMBEDDING_DIMENSION,
            rust_log: "info".to_string(),
        }
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has an invalid value")),
        Err(_) => Ok(default),
    }
}
