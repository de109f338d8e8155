//! CLI interface for the skill gap analyzer

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillgap")]
#[command(about = "Resume and job description skill gap analyzer")]
#[command(long_about = "Analyze how a resume matches a job description: extract skills with \
taxonomy-based NLP and LLM extraction, match them semantically, and report matched, missing, \
and extra skills")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a resume against a job description
    Analyze {
        /// Path to plain-text resume file
        #[arg(short, long)]
        resume: PathBuf,

        /// Path to plain-text job description file
        #[arg(short, long)]
        job: PathBuf,

        /// Override the semantic similarity threshold
        #[arg(short, long)]
        threshold: Option<f32>,

        /// Skip LLM extraction (taxonomy NLP path only)
        #[arg(long)]
        no_llm: bool,

        /// Also generate candidate summary and requirements analysis
        #[arg(long)]
        insights: bool,

        /// Emit the full report as JSON instead of a console summary
        #[arg(long)]
        json: bool,
    },

    /// Show or reset configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Reset configuration to defaults
    Reset,
}
