use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "propscore",
    version,
    about = "Adoption proposal scoring and gap analysis CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a proposal file
    Score(ScoreCommand),
    /// Read a proposal from stdin and score it
    Interactive(InteractiveCommand),
    /// Print the active rubric
    Rubric(RubricCommand),
}

#[derive(Args)]
pub struct ScoreCommand {
    pub file: PathBuf,

    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Rubric TOML overriding the built-in categories
    #[arg(long)]
    pub rubric: Option<PathBuf>,

    /// Exit with a non-zero status when the total score is below this value
    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Args)]
pub struct InteractiveCommand {
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,

    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[arg(long)]
    pub rubric: Option<PathBuf>,

    #[arg(long)]
    pub min_score: Option<f64>,
}

#[derive(Args)]
pub struct RubricCommand {
    #[arg(long)]
    pub rubric: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
    Md,
}
