use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::warn;

/// Hard ceiling on generated interview questions.
pub const MAX_QUESTIONS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Invalid weights: similarity {similarity} + skill {skill} must be non-negative and sum to 100")]
    InvalidWeights { similarity: f64, skill: f64 },
    #[error("Nice-to-have step must be within [0, 1], got {0}")]
    InvalidNiceToHaveStep(f64),
    #[error("max_questions must be within 1..=8, got {0}")]
    InvalidMaxQuestions(usize),
}

// Serializable, comparable, explicit defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Points of the final score driven by text similarity.
    pub similarity_weight: f64,
    /// Points of the final score driven by the skill bonus.
    pub skill_weight: f64,
    /// Bonus added per matched nice-to-have skill.
    pub nice_to_have_step: f64,
    pub max_questions: usize,
    /// Processed resume terms kept in the output.
    pub processed_term_limit: usize,
}

impl EngineConfig {
    pub fn v0() -> Self {
        Self {
            similarity_weight: 70.0,
            skill_weight: 30.0,
            nice_to_have_step: 0.1,
            max_questions: MAX_QUESTIONS,
            processed_term_limit: 100,
        }
    }

    /// Parses a TOML document. Keys that are absent keep their `v0` value.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: EngineConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.check().map_err(|err| {
            warn!(%err, "rejecting engine config");
            err
        })
    }

    fn check(&self) -> Result<(), ConfigError> {
        let (similarity, skill) = (self.similarity_weight, self.skill_weight);
        let weights_ok = similarity.is_finite()
            && skill.is_finite()
            && similarity >= 0.0
            && skill >= 0.0
            && ((similarity + skill) - 100.0).abs() < 1e-9;
        if !weights_ok {
            return Err(ConfigError::InvalidWeights { similarity, skill });
        }

        if !(0.0..=1.0).contains(&self.nice_to_have_step) {
            return Err(ConfigError::InvalidNiceToHaveStep(self.nice_to_have_step));
        }

        if self.max_questions == 0 || self.max_questions > MAX_QUESTIONS {
            return Err(ConfigError::InvalidMaxQuestions(self.max_questions));
        }

        Ok(())
    }

    /// `sha256:<hex>` over the JSON encoding. Identical configs hash identically.
    pub fn fingerprint(&self) -> Result<String, ConfigError> {
        let config_json = serde_json::to_vec(self)?;

        let mut hasher = Sha256::new();
        hasher.update(&config_json);

        Ok(format!("sha256:{}", hex::encode(hasher.finalize())))
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::v0()
    }
}
