//! Semantic skill matching over embedding vectors

use crate::error::Result;
use crate::processing::embeddings::{cosine_similarity, TextEncoder};
use crate::processing::gap::{MatchResult, SkillSet};
use std::sync::Arc;

/// Matches skill sets and whole documents by embedding cosine similarity.
///
/// The threshold is a tunable precision/recall knob shared by all skill
/// comparisons; it is injected from configuration, never hard-coded at call
/// sites.
pub struct SemanticMatcher {
    encoder: Arc<dyn TextEncoder>,
    threshold: f32,
}

impl SemanticMatcher {
    pub fn new(encoder: Arc<dyn TextEncoder>, threshold: f32) -> Self {
        Self { encoder, threshold }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Partition `jd_skills` into matched and missing against `resume_skills`.
    ///
    /// One-sided best match: each job skill takes its maximum similarity over
    /// all resume skills, and a resume skill may cover several job skills
    /// without being consumed. Either input being empty short-circuits to
    /// all-missing.
    pub fn match_skills(&self, resume_skills: &SkillSet, jd_skills: &SkillSet) -> Result<MatchResult> {
        if resume_skills.is_empty() || jd_skills.is_empty() {
            return Ok(MatchResult {
                matched: SkillSet::new(),
                missing: jd_skills.clone(),
            });
        }

        let resume_list: Vec<String> = resume_skills.iter().cloned().collect();
        let jd_list: Vec<String> = jd_skills.iter().cloned().collect();

        let resume_vecs = self.encoder.encode(&resume_list);
        let jd_vecs = self.encoder.encode(&jd_list);

        let mut matched = SkillSet::new();
        let mut missing = SkillSet::new();

        for (jd_skill, jd_vec) in jd_list.iter().zip(jd_vecs.iter()) {
            let mut max_sim = f32::NEG_INFINITY;
            for resume_vec in &resume_vecs {
                let sim = cosine_similarity(jd_vec, resume_vec)?;
                if sim > max_sim {
                    max_sim = sim;
                }
            }

            if max_sim >= self.threshold {
                matched.insert(jd_skill.clone());
            } else {
                missing.insert(jd_skill.clone());
            }
        }

        Ok(MatchResult { matched, missing })
    }

    /// Whole-document semantic closeness in [0.0, 1.0]. Empty text on either
    /// side yields 0.0 without attempting an embedding.
    pub fn document_similarity(&self, text_a: &str, text_b: &str) -> Result<f32> {
        if text_a.trim().is_empty() || text_b.trim().is_empty() {
            return Ok(0.0);
        }

        let vec_a = self.encoder.encode_single(text_a);
        let vec_b = self.encoder.encode_single(text_b);

        let score = cosine_similarity(&vec_a, &vec_b)?;
        Ok(score.clamp(0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Encoder that assigns each distinct string an orthogonal axis, so
    /// identical strings embed identically and distinct strings have zero
    /// similarity.
    pub(crate) struct OrthogonalEncoder {
        axes: Mutex<HashMap<String, usize>>,
        dim: usize,
    }

    impl OrthogonalEncoder {
        pub(crate) fn new(dim: usize) -> Self {
            Self {
                axes: Mutex::new(HashMap::new()),
                dim,
            }
        }
    }

    impl TextEncoder for OrthogonalEncoder {
        fn encode(&self, texts: &[String]) -> Vec<Vec<f32>> {
            let mut axes = self.axes.lock().unwrap();
            texts
                .iter()
                .map(|text| {
                    let next = axes.len() % self.dim;
                    let axis = *axes.entry(text.clone()).or_insert(next);
                    let mut vec = vec![0.0; self.dim];
                    vec[axis] = 1.0;
                    vec
                })
                .collect()
        }
    }

    fn set(skills: &[&str]) -> SkillSet {
        skills.iter().map(|s| s.to_string()).collect()
    }

    fn matcher() -> SemanticMatcher {
        SemanticMatcher::new(Arc::new(OrthogonalEncoder::new(32)), 0.75)
    }

    #[test]
    fn test_identical_skills_match_and_unrelated_are_missing() {
        let matcher = matcher();
        let resume = set(&["python", "sql"]);
        let jd = set(&["python", "tableau"]);

        let result = matcher.match_skills(&resume, &jd).unwrap();
        assert_eq!(result.matched, set(&["python"]));
        assert_eq!(result.missing, set(&["tableau"]));
    }

    #[test]
    fn test_empty_resume_leaves_all_jd_skills_missing() {
        let matcher = matcher();
        let jd = set(&["python", "docker", "aws"]);

        let result = matcher.match_skills(&SkillSet::new(), &jd).unwrap();
        assert!(result.matched.is_empty());
        assert_eq!(result.missing, jd);
    }

    #[test]
    fn test_empty_jd_yields_empty_partition() {
        let matcher = matcher();
        let result = matcher.match_skills(&set(&["python"]), &SkillSet::new()).unwrap();
        assert!(result.matched.is_empty());
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_match_partitions_jd_set() {
        let matcher = matcher();
        let resume = set(&["python", "react", "git"]);
        let jd = set(&["python", "git", "kubernetes", "terraform"]);

        let result = matcher.match_skills(&resume, &jd).unwrap();
        let union: SkillSet = result.matched.union(&result.missing).cloned().collect();
        assert_eq!(union, jd);
        assert!(result.matched.intersection(&result.missing).next().is_none());
    }

    #[test]
    fn test_one_resume_skill_can_cover_multiple_jd_skills() {
        // With a threshold of zero every jd skill clears the bar against any
        // resume skill, all covered by the same single entry
        let matcher = SemanticMatcher::new(Arc::new(OrthogonalEncoder::new(32)), 0.0);
        let resume = set(&["python"]);
        let jd = set(&["docker", "aws", "gcp"]);

        let result = matcher.match_skills(&resume, &jd).unwrap();
        assert_eq!(result.matched, jd);
        assert!(result.missing.is_empty());
    }

    #[test]
    fn test_document_self_similarity_is_high() {
        let matcher = matcher();
        let text = "senior data engineer with python and spark experience";
        let score = matcher.document_similarity(text, text).unwrap();
        assert!(score >= matcher.threshold());
    }

    #[test]
    fn test_document_similarity_empty_text_is_zero() {
        let matcher = matcher();
        assert_eq!(matcher.document_similarity("", "anything").unwrap(), 0.0);
        assert_eq!(matcher.document_similarity("anything", "  ").unwrap(), 0.0);
        assert_eq!(matcher.document_similarity("", "").unwrap(), 0.0);
    }
}
