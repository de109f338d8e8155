//! Skill gap analyzer library

pub mod cli;
pub mod config;
pub mod error;
pub mod llm;
pub mod processing;
pub mod taxonomy;

pub use config::Config;
pub use error::{Result, SkillGapError};
