mod cli;
mod config;
mod error;
mod report;
mod score;
mod segment;
mod telemetry;
mod types;

use crate::error::{Result, ScoreError};
use clap::Parser;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_PROPOSAL: i32 = 1;
    pub const BELOW_THRESHOLD: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn run() -> Result<i32> {
    let cli = cli::Cli::parse();
    telemetry::init(cli.verbose, cli.quiet)?;

    match cli.command {
        cli::Commands::Score(cmd) => {
            if !cmd.file.exists() {
                return Err(ScoreError::PathNotFound(cmd.file.display().to_string()));
            }
            let text = std::fs::read_to_string(&cmd.file)?;
            info!("scoring {}", cmd.file.display());
            score_and_report(
                &text,
                cmd.rubric.as_deref(),
                cmd.format,
                cmd.output.as_deref(),
                cmd.min_score,
            )
        }
        cli::Commands::Interactive(cmd) => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            info!("scoring {} bytes from stdin", text.len());
            score_and_report(
                &text,
                cmd.rubric.as_deref(),
                cmd.format,
                cmd.output.as_deref(),
                cmd.min_score,
            )
        }
        cli::Commands::Rubric(cmd) => {
            let rubric = config::load_rubric(cmd.rubric.as_deref())?;
            println!("rubric categories:");
            for category in &rubric.categories {
                println!(
                    "- {} [weight {}, {} keywords]",
                    category.id.as_str(),
                    category.weight,
                    category.keywords.len()
                );
            }
            Ok(exit_code::SUCCESS)
        }
    }
}

fn score_and_report(
    text: &str,
    rubric_path: Option<&Path>,
    format: cli::ReportFormat,
    output: Option<&Path>,
    min_score: Option<f64>,
) -> Result<i32> {
    let rubric = config::load_rubric(rubric_path)?;
    let engine = score::Engine::new(rubric);
    let result = engine.score(text)?;

    let output_format = match format {
        cli::ReportFormat::Text => report::OutputFormat::Text,
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    };
    let rendered = report::render(&result, output_format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)?;
            println!("report saved to: {}", path.display());
        }
        None => println!("{rendered}"),
    }

    let total = types::report::round1(result.total_score);
    if let Some(min) = min_score {
        if total < min {
            eprintln!("score {total:.1} is below required minimum {min:.1}");
            return Ok(exit_code::BELOW_THRESHOLD);
        }
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = match e {
                ScoreError::Validation(_) => exit_code::INVALID_PROPOSAL,
                _ => exit_code::RUNTIME_FAILURE,
            };
            std::process::exit(code);
        }
    }
}
