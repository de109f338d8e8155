//! Analysis pipeline: extraction, matching, and gap resolution for one
//! resume / job description pair

use crate::error::Result;
use crate::llm::client::ChatCompletion;
use crate::llm::extractor::{LlmSkillExtractor, SkillMap};
use crate::processing::gap::{self, ExtractedSkills, GapReport, SkillSet};
use crate::processing::matcher::SemanticMatcher;
use crate::processing::nlp_extractor::NlpSkillExtractor;
use crate::processing::text_processor::TextNormalizer;
use crate::taxonomy::SkillTaxonomy;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gap analysis produced by one extraction method
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MethodAnalysis {
    pub resume_skills: SkillSet,
    pub jd_skills: SkillSet,
    pub gap: GapReport,
}

/// LLM-path analysis keeps the per-skill metadata alongside the gap
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmMethodAnalysis {
    pub resume_skills: SkillMap,
    pub jd_skills: SkillMap,
    pub gap: GapReport,
}

/// Complete result of one analysis run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Whole-document semantic closeness in [0.0, 1.0]
    pub similarity: f32,
    pub nlp: MethodAnalysis,
    /// Present when the LLM path ran; extraction failures inside the path
    /// degrade to empty skill maps rather than removing it
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm: Option<LlmMethodAnalysis>,
    /// Taxonomy category for every skill the NLP path saw, for reporting
    pub categories: BTreeMap<String, String>,
}

/// Coordinates the extractors, matcher, and gap resolver.
///
/// Built once at startup from read-only parts (taxonomy, embedding weights);
/// each `analyze` call is an independent, self-contained run with no state
/// shared across runs.
pub struct AnalysisEngine<C: ChatCompletion> {
    taxonomy: SkillTaxonomy,
    normalizer: TextNormalizer,
    nlp_extractor: NlpSkillExtractor,
    matcher: SemanticMatcher,
    llm_extractor: Option<LlmSkillExtractor<C>>,
}

impl<C: ChatCompletion> AnalysisEngine<C> {
    pub fn new(
        taxonomy: SkillTaxonomy,
        matcher: SemanticMatcher,
        llm_extractor: Option<LlmSkillExtractor<C>>,
    ) -> Result<Self> {
        let nlp_extractor = NlpSkillExtractor::new(&taxonomy)?;

        Ok(Self {
            taxonomy,
            normalizer: TextNormalizer::new(),
            nlp_extractor,
            matcher,
            llm_extractor,
        })
    }

    /// Run the full pipeline over one resume / job description pair.
    ///
    /// The NLP and LLM extraction paths are independent; the LLM path is
    /// skipped entirely when no extractor was injected, and degrades to
    /// empty skill maps when its backend fails.
    pub async fn analyze(&self, resume_text: &str, jd_text: &str) -> Result<AnalysisReport> {
        let nlp = self.analyze_nlp(resume_text, jd_text)?;

        let llm = match &self.llm_extractor {
            Some(extractor) => Some(self.analyze_llm(extractor, resume_text, jd_text).await?),
            None => None,
        };

        let similarity = self.matcher.document_similarity(
            &self.normalizer.normalize(resume_text),
            &self.normalizer.normalize(jd_text),
        )?;

        let mut categories = BTreeMap::new();
        for skill in nlp.resume_skills.iter().chain(nlp.jd_skills.iter()) {
            categories.insert(skill.clone(), self.taxonomy.category_of(skill).to_string());
        }

        Ok(AnalysisReport {
            similarity,
            nlp,
            llm,
            categories,
        })
    }

    fn analyze_nlp(&self, resume_text: &str, jd_text: &str) -> Result<MethodAnalysis> {
        let resume_skills = ExtractedSkills::Bare(
            self.nlp_extractor.extract(resume_text).into_iter().collect(),
        );
        let jd_skills = ExtractedSkills::Bare(self.nlp_extractor.extract(jd_text).into_iter().collect());

        let gap = self.resolve_gap(&resume_skills, &jd_skills)?;

        Ok(MethodAnalysis {
            resume_skills: resume_skills.names(),
            jd_skills: jd_skills.names(),
            gap,
        })
    }

    async fn analyze_llm(
        &self,
        extractor: &LlmSkillExtractor<C>,
        resume_text: &str,
        jd_text: &str,
    ) -> Result<LlmMethodAnalysis> {
        let resume_map = extractor.extract_resume_skills(resume_text).await;
        let jd_map = extractor.extract_job_skills(jd_text).await;

        let resume_skills = ExtractedSkills::Annotated(resume_map.clone());
        let jd_skills = ExtractedSkills::Annotated(jd_map.clone());

        let gap = self.resolve_gap(&resume_skills, &jd_skills)?;

        Ok(LlmMethodAnalysis {
            resume_skills: resume_map,
            jd_skills: jd_map,
            gap,
        })
    }

    /// Semantic match on the key sets of either skill-set shape, then plain
    /// set-difference extras
    fn resolve_gap(&self, resume: &ExtractedSkills, jd: &ExtractedSkills) -> Result<GapReport> {
        let resume_names = resume.names();
        let jd_names = jd.names();

        let match_result = self.matcher.match_skills(&resume_names, &jd_names)?;
        Ok(gap::resolve(match_result, &resume_names, &jd_names))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::error::SkillGapError;
    use crate::llm::client::{ChatCompletion, ChatRequest};
    use crate::processing::embeddings::TextEncoder;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    struct OrthogonalEncoder {
        axes: Mutex<HashMap<String, usize>>,
    }

    impl OrthogonalEncoder {
        fn new() -> Self {
            Self {
                axes: Mutex::new(HashMap::new()),
            }
        }
    }

    impl TextEncoder for OrthogonalEncoder {
        fn encode(&self, texts: &[String]) -> Vec<Vec<f32>> {
            let mut axes = self.axes.lock().unwrap();
            texts
                .iter()
                .map(|text| {
                    let next = axes.len() % 64;
                    let axis = *axes.entry(text.clone()).or_insert(next);
                    let mut vec = vec![0.0; 64];
                    vec[axis] = 1.0;
                    vec
                })
                .collect()
        }
    }

    /// Backend whose extraction calls always fail
    struct DownChat;

    impl ChatCompletion for DownChat {
        async fn complete(&self, _request: ChatRequest) -> crate::error::Result<String> {
            Err(SkillGapError::Network("backend down".to_string()))
        }
    }

    fn engine(llm: Option<LlmSkillExtractor<DownChat>>) -> AnalysisEngine<DownChat> {
        let matcher = SemanticMatcher::new(Arc::new(OrthogonalEncoder::new()), 0.75);
        AnalysisEngine::new(SkillTaxonomy::new(), matcher, llm).unwrap()
    }

    #[tokio::test]
    async fn test_nlp_only_pipeline() {
        let engine = engine(None);
        let report = engine
            .analyze(
                "Data analyst skilled in Python, SQL and Docker.",
                "Looking for someone with Python and Tableau.",
            )
            .await
            .unwrap();

        assert!(report.llm.is_none());
        assert!(report.nlp.gap.matched.contains("python"));
        assert!(report.nlp.gap.missing.contains("tableau"));
        assert!(report.nlp.gap.extra.contains("sql"));
        assert!(report.nlp.gap.extra.contains("docker"));
        assert_eq!(report.categories.get("python").unwrap(), "Programming Languages");
    }

    #[tokio::test]
    async fn test_llm_backend_failure_degrades_to_empty_maps() {
        let config = Config::default();
        let extractor = LlmSkillExtractor::new(DownChat, config.llm);
        let engine = engine(Some(extractor));

        let report = engine
            .analyze("Python developer", "Python shop hiring")
            .await
            .unwrap();

        // The LLM path still reports, with empty skill maps and all-empty gap
        let llm = report.llm.unwrap();
        assert!(llm.resume_skills.is_empty());
        assert!(llm.jd_skills.is_empty());
        assert!(llm.gap.matched.is_empty());
        assert!(llm.gap.missing.is_empty());

        // The NLP path is unaffected
        assert!(report.nlp.gap.matched.contains("python"));
    }

    #[tokio::test]
    async fn test_empty_documents_give_degenerate_report() {
        let engine = engine(None);
        let report = engine.analyze("", "").await.unwrap();

        assert_eq!(report.similarity, 0.0);
        assert!(report.nlp.resume_skills.is_empty());
        assert!(report.nlp.jd_skills.is_empty());
        assert!(report.nlp.gap.missing.is_empty());
        assert!(report.nlp.gap.extra.is_empty());
    }
}
