//! LLM-based structured skill extraction

use crate::config::LlmConfig;
use crate::error::{Result, SkillGapError};
use crate::llm::client::{ChatCompletion, ChatMessage, ChatRequest};
use crate::llm::prompts;
use crate::processing::gap::SkillRecord;
use std::collections::BTreeMap;

/// Skill name to metadata mapping returned by the LLM path
pub type SkillMap = BTreeMap<String, SkillRecord>;

/// Extracts categorized skills from document text through a chat-completion
/// backend.
///
/// Failure policy: any network failure, malformed JSON, or missing JSON
/// object degrades to an empty mapping with a warning log. Callers always
/// receive a usable (possibly empty) result, never an error, and own any
/// retry policy.
pub struct LlmSkillExtractor<C: ChatCompletion> {
    client: C,
    config: LlmConfig,
}

impl<C: ChatCompletion> LlmSkillExtractor<C> {
    pub fn new(client: C, config: LlmConfig) -> Self {
        Self { client, config }
    }

    /// Required skills from a job description, with importance and must-have
    /// metadata
    pub async fn extract_job_skills(&self, jd_text: &str) -> SkillMap {
        let prompt = prompts::job_extraction_prompt(jd_text, self.config.jd_truncate_chars);
        match self.request_skill_map(prompts::JOB_EXTRACTION_SYSTEM, prompt).await {
            Ok(map) => {
                log::info!("LLM job description analysis found {} skills", map.len());
                map
            }
            Err(e) => {
                log::warn!("LLM job skill extraction degraded to empty: {}", e);
                SkillMap::new()
            }
        }
    }

    /// Demonstrated skills from a resume, with proficiency metadata
    pub async fn extract_resume_skills(&self, resume_text: &str) -> SkillMap {
        let prompt = prompts::resume_extraction_prompt(resume_text, self.config.resume_truncate_chars);
        match self.request_skill_map(prompts::RESUME_EXTRACTION_SYSTEM, prompt).await {
            Ok(map) => {
                log::info!("LLM resume analysis found {} skills", map.len());
                map
            }
            Err(e) => {
                log::warn!("LLM resume skill extraction degraded to empty: {}", e);
                SkillMap::new()
            }
        }
    }

    async fn request_skill_map(&self, system: &str, prompt: String) -> Result<SkillMap> {
        let request = ChatRequest {
            model: self.config.model.clone(),
            messages: vec![ChatMessage::system(system), ChatMessage::user(prompt)],
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
        };

        let response = self.client.complete(request).await?;
        parse_skill_map(&response)
    }
}

/// Decode the model response into a skill map.
///
/// Tries a strict parse of the whole body first; models often wrap the JSON
/// in prose or code fences, so the fallback locates the outermost balanced
/// `{...}` with a bracket-depth counter before giving up.
pub fn parse_skill_map(response: &str) -> Result<SkillMap> {
    let trimmed = response.trim();

    if let Ok(map) = serde_json::from_str::<SkillMap>(trimmed) {
        return Ok(fold_keys(map));
    }

    let candidate = balanced_object(response).ok_or_else(|| {
        SkillGapError::LlmResponse("No JSON object found in model response".to_string())
    })?;

    let map: SkillMap = serde_json::from_str(candidate)?;
    Ok(fold_keys(map))
}

/// Case-fold skill names; duplicates differing only in case collapse
fn fold_keys(map: SkillMap) -> SkillMap {
    map.into_iter()
        .map(|(name, record)| (name.to_lowercase(), record))
        .collect()
}

/// Outermost balanced `{...}` region, tracked with a depth counter that is
/// aware of string literals and escapes. A greedy regex would over-match
/// nested braces; this does not.
fn balanced_object(text: &str) -> Option<&str> {
    let start = text.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&text[start..start + offset + c.len_utf8()]);
                }
            }
            _ => {}
        }
    }

    None
}
