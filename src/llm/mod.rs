//! LLM integration module

pub mod client;
pub mod extractor;
pub mod insights;
pub mod prompts;
