//! Chat-completion backend boundary

use crate::config::LlmConfig;
use crate::error::{Result, SkillGapError};
use serde::{Deserialize, Serialize};
use std::future::Future;

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// One opaque round trip to a chat-completion endpoint
#[derive(Debug, Clone, Serialize)]
pub struct ChatRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Chat-completion backend: send a request, get the generated text body.
///
/// Implementations perform a single blocking round trip. Retry and timeout
/// policy belong to the caller, not the backend.
pub trait ChatCompletion: Send + Sync {
    fn complete(&self, request: ChatRequest) -> impl Future<Output = Result<String>> + Send;
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ChatChoiceMessage {
    content: Option<String>,
}

/// OpenAI-compatible chat-completion client
#[derive(Clone)]
pub struct OpenAiChatClient {
    http: reqwest::Client,
    api_base: String,
    api_key: String,
}

impl OpenAiChatClient {
    /// Build a client from config plus the `OPENAI_API_KEY` environment
    /// variable. A missing key is a fatal configuration error.
    pub fn from_env(config: &LlmConfig) -> Result<Self> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                SkillGapError::Configuration(
                    "OpenAI API key not set. Please configure the OPENAI_API_KEY environment variable."
                        .to_string(),
                )
            })?;

        Ok(Self::new(api_key, config.api_base.clone()))
    }

    pub fn new(api_key: String, api_base: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            api_key,
        }
    }
}

impl ChatCompletion for OpenAiChatClient {
    async fn complete(&self, request: ChatRequest) -> Result<String> {
        let url = format!("{}/chat/completions", self.api_base);

        let response = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| SkillGapError::Network(format!("Chat completion request failed: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SkillGapError::Network(format!("Failed to read chat completion body: {}", e)))?;

        if !status.is_success() {
            return Err(SkillGapError::Network(format!(
                "Chat completion returned {}: {}",
                status, body
            )));
        }

        let parsed: ChatResponse = serde_json::from_str(&body)?;
        parsed
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| SkillGapError::LlmResponse("Response carried no message content".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_to_wire_format() {
        let request = ChatRequest {
            model: "gpt-4o".to_string(),
            messages: vec![ChatMessage::system("You are a recruiter."), ChatMessage::user("Hi")],
            temperature: 0.1,
            max_tokens: 2000,
        };

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "gpt-4o");
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["content"], "Hi");
        assert_eq!(value["max_tokens"], 2000);
    }

    #[test]
    fn test_chat_response_content_extraction() {
        let body = r#"{"choices":[{"message":{"role":"assistant","content":"hello"}}]}"#;
        let parsed: ChatResponse = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.choices[0].message.content.as_deref(), Some("hello"));
    }

    #[test]
    fn test_api_base_trailing_slash_is_trimmed() {
        let client = OpenAiChatClient::new("key".to_string(), "https://api.openai.com/v1/".to_string());
        assert_eq!(client.api_base, "https://api.openai.com/v1");
    }
}
