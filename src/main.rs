//! Skill gap analyzer: resume vs. job description skill matching

use clap::Parser;
use log::{error, info};
use skillgap::cli::{Cli, Commands, ConfigAction};
use skillgap::config::Config;
use skillgap::error::{Result, SkillGapError};
use skillgap::llm::client::OpenAiChatClient;
use skillgap::llm::extractor::LlmSkillExtractor;
use skillgap::llm::insights::InsightGenerator;
use skillgap::processing::analyzer::{AnalysisEngine, AnalysisReport};
use skillgap::processing::embeddings::StaticEncoder;
use skillgap::processing::gap::SkillSet;
use skillgap::processing::matcher::SemanticMatcher;
use skillgap::taxonomy::SkillTaxonomy;
use std::path::PathBuf;
use std::process;
use std::sync::Arc;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

async fn run_command(command: Commands, mut config: Config) -> Result<()> {
    match command {
        Commands::Analyze {
            resume,
            job,
            threshold,
            no_llm,
            insights,
            json,
        } => {
            if let Some(threshold) = threshold {
                config.matching.similarity_threshold = threshold;
                config.validate()?;
            }

            info!("Starting skill gap analysis");

            let resume_text = read_document(&resume)?;
            let jd_text = read_document(&job)?;

            // Read-only parts, loaded once up front
            let taxonomy = SkillTaxonomy::new();
            let encoder = StaticEncoder::load(&config.models.embedding_model)?;
            let matcher = SemanticMatcher::new(Arc::new(encoder), config.matching.similarity_threshold);

            let llm_client = if no_llm {
                None
            } else {
                Some(OpenAiChatClient::from_env(&config.llm)?)
            };
            let llm_extractor = llm_client
                .clone()
                .map(|client| LlmSkillExtractor::new(client, config.llm.clone()));

            let engine = AnalysisEngine::new(taxonomy, matcher, llm_extractor)?;
            let report = engine.analyze(&resume_text, &jd_text).await?;

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }

            if insights {
                if let (Some(client), Some(llm)) = (llm_client, &report.llm) {
                    let generator = InsightGenerator::new(client, config.llm.clone());

                    println!("\n📋 Candidate summary");
                    println!("{}", generator.candidate_summary(&resume_text, &llm.resume_skills).await);

                    println!("\n🎯 Job requirements analysis");
                    println!(
                        "{}",
                        generator.job_requirements_analysis(&jd_text, &llm.jd_skills).await
                    );

                    if !llm.gap.missing.is_empty() {
                        println!("\n📈 Skill development plan");
                        println!(
                            "{}",
                            generator
                                .skill_development_plan(&llm.resume_skills, &llm.jd_skills, &llm.gap.missing)
                                .await
                        );
                    }

                    for skill in llm.gap.missing.iter().take(3) {
                        println!("\n💡 How to close the gap on '{}'", skill);
                        println!("{}", generator.skill_recommendation(skill, &jd_text).await);
                    }
                } else {
                    println!("\n⚠️  Insights require the LLM path; rerun without --no-llm");
                }
            }

            Ok(())
        }

        Commands::Config { action } => {
            match action.unwrap_or(ConfigAction::Show) {
                ConfigAction::Show => {
                    let content = toml::to_string_pretty(&config).map_err(|e| {
                        SkillGapError::Configuration(format!("Failed to serialize config: {}", e))
                    })?;
                    println!("{}", content);
                }
                ConfigAction::Reset => {
                    let config = Config::default();
                    config.save()?;
                    println!("Configuration reset to defaults");
                }
            }
            Ok(())
        }
    }
}

fn read_document(path: &PathBuf) -> Result<String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| SkillGapError::InvalidInput(format!("Cannot read {}: {}", path.display(), e)))?;
    if text.trim().is_empty() {
        info!("Document {} is empty; analysis will be degenerate", path.display());
    }
    Ok(text)
}

fn print_report(report: &AnalysisReport) {
    println!("\n📊 Document similarity: {:.1}%", report.similarity * 100.0);

    println!("\n🔎 Taxonomy extraction");
    print_skill_line("Matched", &report.nlp.gap.matched);
    print_skill_line("Missing", &report.nlp.gap.missing);
    print_skill_line("Extra", &report.nlp.gap.extra);

    if let Some(llm) = &report.llm {
        println!("\n🤖 LLM extraction");
        print_skill_line("Matched", &llm.gap.matched);
        print_skill_line("Missing", &llm.gap.missing);
        print_skill_line("Extra", &llm.gap.extra);

        let must_have_missing: Vec<&str> = llm
            .gap
            .missing
            .iter()
            .filter(|skill| {
                llm.jd_skills
                    .get(*skill)
                    .and_then(|record| record.must_have)
                    .unwrap_or(false)
            })
            .map(|s| s.as_str())
            .collect();
        if !must_have_missing.is_empty() {
            println!("  ⚠️  Missing must-have skills: {}", must_have_missing.join(", "));
        }
    }
}

fn print_skill_line(label: &str, skills: &SkillSet) {
    if skills.is_empty() {
        println!("  {}: (none)", label);
    } else {
        let names: Vec<&str> = skills.iter().map(|s| s.as_str()).collect();
        println!("  {} ({}): {}", label, names.len(), names.join(", "));
    }
}
