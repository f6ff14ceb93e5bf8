use crate::types::report::{round1, CategoryResult};
use crate::types::rubric::RubricCategory;

const KEYWORD_WEIGHT: f64 = 0.4;
const SENTENCE_WEIGHT: f64 = 0.3;
const DEPTH_WEIGHT: f64 = 0.3;
const FULL_DEPTH_SENTENCES: f64 = 3.0;

// Keywords are matched as substrings of the lowercased text, not as word
// tokens. Phrases with spaces or hyphens match naturally; so do keywords
// embedded in longer words. The looseness is part of the scoring calibration.
pub fn score_category(
    text_lower: &str,
    sentences: &[String],
    category: &RubricCategory,
) -> CategoryResult {
    let keywords_matched = category
        .keywords
        .iter()
        .filter(|keyword| text_lower.contains(keyword.as_str()))
        .count();
    let keyword_coverage =
        (keywords_matched as f64 / category.keywords.len() as f64).min(1.0);

    let relevant_sentences = sentences
        .iter()
        .filter(|sentence| {
            category
                .keywords
                .iter()
                .any(|keyword| sentence.contains(keyword.as_str()))
        })
        .count();
    let sentence_coverage = if sentences.is_empty() {
        0.0
    } else {
        relevant_sentences as f64 / sentences.len() as f64
    };

    let depth_score = (relevant_sentences as f64 / FULL_DEPTH_SENTENCES).min(1.0);

    let coverage_score = keyword_coverage * KEYWORD_WEIGHT
        + sentence_coverage * SENTENCE_WEIGHT
        + depth_score * DEPTH_WEIGHT;

    CategoryResult {
        id: category.id,
        score: coverage_score * f64::from(category.weight),
        max_score: category.weight,
        keywords_matched,
        total_keywords: category.keywords.len(),
        relevant_sentences,
        coverage: round1(coverage_score * 100.0),
    }
}
