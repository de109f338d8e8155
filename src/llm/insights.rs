//! Free-text analysis generation: candidate summaries, requirement analyses,
//! and skill recommendations

use crate::config::LlmConfig;
use crate::llm::client::{ChatCompletion, ChatMessage, ChatRequest};
use crate::llm::extractor::SkillMap;
use crate::llm::prompts;
use crate::processing::gap::SkillSet;

const SUMMARY_FALLBACK: &str =
    "Professional summary could not be generated due to processing constraints.";
const REQUIREMENTS_FALLBACK: &str =
    "Job requirements analysis could not be completed due to processing constraints.";
const RECOMMENDATION_FALLBACK: &str = "No recommendation available.";
const COMPREHENSIVE_FALLBACK: &str =
    "Comprehensive skill gap analysis could not be generated at this time.";
const DEVELOPMENT_FALLBACK: &str =
    "Skill development recommendations could not be generated due to processing constraints.";

/// Generates human-readable analysis text through the chat-completion
/// backend. Every helper is a single round trip with its own temperature and
/// token budget, and every helper returns a fixed fallback string on failure
/// instead of propagating an error.
pub struct InsightGenerator<C: ChatCompletion> {
    client: C,
    config: LlmConfig,
}

impl<C: ChatCompletion> InsightGenerator<C> {
    pub fn new(client: C, config: LlmConfig) -> Self {
        Self { client, config }
    }

    /// Executive summary of the candidate from resume text and extracted
    /// skills
    pub async fn candidate_summary(&self, resume_text: &str, skills: &SkillMap) -> String {
        let prompt = prompts::summary_prompt(resume_text, &skills_json(skills));
        self.generate(prompts::SUMMARY_SYSTEM, prompt, 0.2, self.config.max_tokens, SUMMARY_FALLBACK)
            .await
    }

    /// Analysis of a job description's requirements and priorities
    pub async fn job_requirements_analysis(&self, jd_text: &str, skills: &SkillMap) -> String {
        let prompt = prompts::requirements_prompt(jd_text, &skills_json(skills));
        self.generate(
            prompts::REQUIREMENTS_SYSTEM,
            prompt,
            0.2,
            self.config.max_tokens,
            REQUIREMENTS_FALLBACK,
        )
        .await
    }

    /// Learning recommendation for one missing skill
    pub async fn skill_recommendation(&self, skill: &str, jd_context: &str) -> String {
        let prompt = prompts::recommendation_prompt(skill, jd_context);
        self.generate(prompts::RECOMMENDATION_SYSTEM, prompt, 0.7, 300, RECOMMENDATION_FALLBACK)
            .await
    }

    /// Gap-wide development plan: learning priorities over the whole missing
    /// skill set, grounded in both sides' extracted skills
    pub async fn skill_development_plan(
        &self,
        resume_skills: &SkillMap,
        jd_skills: &SkillMap,
        missing: &SkillSet,
    ) -> String {
        let gap: Vec<&str> = missing.iter().map(|s| s.as_str()).collect();
        let prompt = prompts::development_plan_prompt(
            &skills_json(resume_skills),
            &skills_json(jd_skills),
            &gap,
        );
        self.generate(
            prompts::DEVELOPMENT_SYSTEM,
            prompt,
            0.3,
            self.config.max_tokens,
            DEVELOPMENT_FALLBACK,
        )
        .await
    }

    /// Free-form gap analysis from a caller-assembled task description
    pub async fn comprehensive_analysis(&self, task: &str) -> String {
        let prompt = prompts::comprehensive_prompt(task);
        self.generate(prompts::COMPREHENSIVE_SYSTEM, prompt, 0.6, 600, COMPREHENSIVE_FALLBACK)
            .await
    }

    async fn generate(
        &self,
        system: &str,
        prompt: String,
        temperature: f32,
        max_tokens: u32,
        fallback: &str,
    ) -> String {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature,
            max_tokens,
        };

        match self.client.complete(request).await {
            Ok(text) => text.trim().to_string(),
            Err(e) => {
                log::warn!("Analysis generation failed, using fallback: {}", e);
                fallback.to_string()
            }
        }
    }
}

fn skills_json(skills: &SkillMap) -> String {
    serde_json::to_string_pretty(skills).unwrap_or_else(|_| "{}".to_string())
}
