//! Configuration management for the skill gap analyzer

use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub models: ModelConfig,
    pub matching: MatchingConfig,
    pub llm: LlmConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Local path or HuggingFace repo id of the Model2Vec embedding model
    pub embedding_model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchingConfig {
    /// Minimum cosine similarity for two skill embeddings to count as the
    /// same real-world skill. Higher values trade recall for precision.
    pub similarity_threshold: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmConfig {
    pub model: String,
    pub api_base: String,
    /// Low temperature keeps skill extraction consistent and factual
    pub temperature: f32,
    pub max_tokens: u32,
    /// Input prefix bounds, a cost and latency cap rather than a correctness one
    pub jd_truncate_chars: usize,
    pub resume_truncate_chars: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            models: ModelConfig {
                embedding_model: "minishlab/M2V_base_output".to_string(),
            },
            matching: MatchingConfig {
                similarity_threshold: 0.75,
            },
            llm: LlmConfig {
                model: "gpt-4o".to_string(),
                api_base: "https://api.openai.com/v1".to_string(),
                temperature: 0.1,
                max_tokens: 2000,
                jd_truncate_chars: 2000,
                resume_truncate_chars: 3000,
            },
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path();

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let config: Config = toml::from_str(&content)
                .map_err(|e| SkillGapError::Configuration(format!("Failed to parse config: {}", e)))?;
            config.validate()?;
            Ok(config)
        } else {
            let config = Self::default();
            config.save()?;
            Ok(config)
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path();

        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| SkillGapError::Configuration(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(&config_path, content)?;
        Ok(())
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")))
            .join("skillgap")
            .join("config.toml")
    }

    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.matching.similarity_threshold) {
            return Err(SkillGapError::Configuration(format!(
                "similarity_threshold must be in [0.0, 1.0], got {}",
                self.matching.similarity_threshold
            )));
        }
        if !(0.0..=2.0).contains(&self.llm.temperature) {
            return Err(SkillGapError::Configuration(format!(
                "llm.temperature must be in [0.0, 2.0], got {}",
                self.llm.temperature
            )));
        }
        if self.llm.max_tokens == 0 {
            return Err(SkillGapError::Configuration(
                "llm.max_tokens must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.matching.similarity_threshold, 0.75);
        assert_eq!(config.llm.jd_truncate_chars, 2000);
        assert_eq!(config.llm.resume_truncate_chars, 3000);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let mut config = Config::default();
        config.matching.similarity_threshold = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let config = Config::default();
        let content = toml::to_string_pretty(&config).unwrap();
        let parsed: Config = toml::from_str(&content).unwrap();
        assert_eq!(parsed.llm.model, config.llm.model);
        assert_eq!(
            parsed.matching.similarity_threshold,
            config.matching.similarity_threshold
        );
    }
}
