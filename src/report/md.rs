use crate::types::report::{round1, ScoringResult};
use chrono::Utc;

pub fn to_markdown(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str("# Proposal Score Report\n\n");
    output.push_str(&format!(
        "Overall score: {:.1}/100 (grade {}, {})\n",
        round1(result.total_score),
        result.grade,
        result.percentile
    ));
    output.push_str(&format!(
        "Generated: {}\n\n",
        Utc::now().to_rfc3339()
    ));
    output.push_str(&format!(
        "Stats: {} words, {} sentences\n\n",
        result.word_count, result.sentence_count
    ));

    output.push_str("## Category Scores\n\n");
    for category in &result.categories {
        output.push_str(&format!(
            "- {}: {:.1}/{} ({:.1}% coverage, {}/{} keywords, {} relevant sentences)\n",
            category.id.display_name(),
            category.score,
            category.max_score,
            category.coverage,
            category.keywords_matched,
            category.total_keywords,
            category.relevant_sentences
        ));
    }
    output.push('\n');

    output.push_str("## Gaps\n\n");
    if result.gaps.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for gap in &result.gaps {
            output.push_str(&format!(
                "- {}: {:.1}/{} ({:.1} points short, {:.1}% coverage)\n",
                gap.category, gap.current_score, gap.max_score, gap.gap, gap.coverage
            ));
        }
        output.push('\n');
    }

    output.push_str("## Recommendations\n\n");
    if result.recommendations.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for recommendation in &result.recommendations {
            output.push_str(&format!("- {recommendation}\n"));
        }
        output.push('\n');
    }

    output.push_str("## Contradictions\n\n");
    if result.contradictions.is_empty() {
        output.push_str("- none\n");
    } else {
        for contradiction in &result.contradictions {
            output.push_str(&format!(
                "- sentence {}: {}\n",
                contradiction.sentence_num, contradiction.text
            ));
        }
    }

    output
}
