//! Embedding backend boundary and cosine similarity

use crate::error::{Result, SkillGapError};
use model2vec_rs::model::StaticModel;

/// Text-embedding backend: fixed-dimension dense vector per input string.
///
/// The production implementation wraps a Model2Vec static model; tests inject
/// lightweight stand-ins so no model files are required.
pub trait TextEncoder: Send + Sync {
    fn encode(&self, texts: &[String]) -> Vec<Vec<f32>>;

    fn encode_single(&self, text: &str) -> Vec<f32> {
        self.encode(std::slice::from_ref(&text.to_string()))
            .into_iter()
            .next()
            .unwrap_or_default()
    }
}

/// Model2Vec-backed encoder. Weights are loaded once at startup and treated
/// as read-only afterwards.
pub struct StaticEncoder {
    model: StaticModel,
}

impl StaticEncoder {
    /// Load from a local path or HuggingFace repo id. A load failure is a
    /// fatal initialization error: the matcher is unusable without weights.
    pub fn load(model_id: &str) -> Result<Self> {
        log::info!("Loading embedding model: {}", model_id);

        let model = StaticModel::from_pretrained(model_id, None, None, None)
            .map_err(|e| SkillGapError::ModelLoading(format!("Failed to load embedding model '{}': {}", model_id, e)))?;

        Ok(Self { model })
    }
}

impl TextEncoder for StaticEncoder {
    fn encode(&self, texts: &[String]) -> Vec<Vec<f32>> {
        self.model.encode(texts)
    }

    fn encode_single(&self, text: &str) -> Vec<f32> {
        self.model.encode_single(text)
    }
}

/// Cosine similarity between two embeddings of equal dimension.
/// Zero-norm vectors compare as 0.0 rather than NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
    if a.len() != b.len() {
        return Err(SkillGapError::Embedding(format!(
            "Embedding dimensions don't match: {} vs {}",
            a.len(),
            b.len()
        )));
    }

    if a.is_empty() {
        return Ok(0.0);
    }

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let norm_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let norm_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        Ok(0.0)
    } else {
        Ok(dot_product / (norm_a * norm_b))
    }
}
