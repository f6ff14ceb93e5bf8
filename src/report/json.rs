use crate::types::report::{round1, ScoringResult};
use serde_json::{json, Map};

pub fn to_json(result: &ScoringResult) -> Result<String, serde_json::Error> {
    let mut category_scores = Map::new();
    let mut category_details = Map::new();
    for category in &result.categories {
        category_scores.insert(category.id.as_str().to_string(), json!(category.score));
        category_details.insert(
            category.id.as_str().to_string(),
            json!({
                "max_score": category.max_score,
                "keywords_matched": category.keywords_matched,
                "total_keywords": category.total_keywords,
                "relevant_sentences": category.relevant_sentences,
                "coverage": category.coverage,
            }),
        );
    }

    let document = json!({
        "total_score": round1(result.total_score),
        "grade": result.grade.as_str(),
        "percentile": result.percentile,
        "category_scores": category_scores,
        "category_details": category_details,
        "gaps": result.gaps,
        "recommendations": result.recommendations,
        "contradictions": result.contradictions,
        "word_count": result.word_count,
        "sentence_count": result.sentence_count,
    });

    serde_json::to_string_pretty(&document)
}
