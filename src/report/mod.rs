pub mod json;
pub mod md;
pub mod text;

use crate::error::ScoreError;
use crate::types::report::ScoringResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Text,
    Json,
    Md,
}

pub fn render(result: &ScoringResult, format: OutputFormat) -> Result<String, ScoreError> {
    match format {
        OutputFormat::Text => Ok(text::to_text(result)),
        OutputFormat::Json => json::to_json(result).map_err(ScoreError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
