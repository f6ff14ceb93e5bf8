use crate::error::{Result, ScoreError};
use crate::types::rubric::Rubric;
use std::path::Path;

pub fn load_rubric(path: Option<&Path>) -> Result<Rubric> {
    let mut rubric = match path {
        Some(path) => {
            if !path.exists() {
                return Err(ScoreError::PathNotFound(path.display().to_string()));
            }
            let content = std::fs::read_to_string(path)?;
            toml::from_str::<Rubric>(&content).map_err(|e| {
                ScoreError::RubricInvalid(format!("{}: {}", path.display(), e))
            })?
        }
        None => Rubric::builtin(),
    };

    rubric.normalize_keywords();
    rubric.validate()?;
    Ok(rubric)
}
