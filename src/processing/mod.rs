//! Text processing, extraction, and matching module

pub mod analyzer;
pub mod embeddings;
pub mod gap;
pub mod matcher;
pub mod nlp_extractor;
pub mod text_processor;
