use crate::types::report::{round1, Grade, ScoringResult};

const RULE: &str = "============================================================";
const THIN_RULE: &str = "------------------------------------------------------------";

pub fn to_text(result: &ScoringResult) -> String {
    let mut output = String::new();
    output.push_str(RULE);
    output.push_str("\nADOPTION PROPOSAL SCORE\n");
    output.push_str(RULE);
    output.push_str(&format!(
        "\n\nOverall Score: {:.1}/100 (Grade: {})\n",
        round1(result.total_score),
        result.grade
    ));
    output.push_str(&format!("Percentile: {}\n", result.percentile));
    output.push_str("\nProposal Stats:\n");
    output.push_str(&format!("  - {} words\n", result.word_count));
    output.push_str(&format!("  - {} sentences\n", result.sentence_count));

    output.push_str(&format!("\n{:<25} {:<10} Coverage\n", "Category", "Score"));
    output.push_str(THIN_RULE);
    output.push('\n');
    for category in &result.categories {
        let score_cell = format!("{:.1}/{}", category.score, category.max_score);
        output.push_str(&format!(
            "{:<25} {:<10} {:.1}%\n",
            category.id.display_name(),
            score_cell,
            category.coverage
        ));
    }

    if !result.gaps.is_empty() {
        output.push_str(&format!("\n{RULE}\nGAPS IDENTIFIED\n{RULE}\n"));
        for gap in &result.gaps {
            output.push_str(&format!("\n{}:\n", gap.category));
            output.push_str(&format!(
                "  Current: {:.1}/{}\n",
                gap.current_score, gap.max_score
            ));
            output.push_str(&format!("  Gap: {:.1} points\n", gap.gap));
            output.push_str(&format!("  Coverage: {:.1}%\n", gap.coverage));
        }
    }

    if !result.recommendations.is_empty() {
        output.push_str(&format!("\n{RULE}\nRECOMMENDATIONS\n{RULE}\n"));
        for (index, recommendation) in result.recommendations.iter().enumerate() {
            output.push_str(&format!("\n{}. {}\n", index + 1, recommendation));
        }
    }

    if !result.contradictions.is_empty() {
        output.push_str(&format!("\n{RULE}\nPOTENTIAL CONTRADICTIONS\n{RULE}\n"));
        for contradiction in &result.contradictions {
            output.push_str(&format!("\nSentence {}:\n", contradiction.sentence_num));
            output.push_str(&format!("  {}\n", contradiction.text));
        }
    }

    output.push_str(&format!("\n{RULE}\nSCORING INTERPRETATION\n{RULE}\n"));
    output.push_str(&format!(
        "\nGrade {} - {}\n",
        result.grade,
        interpretation(result.grade)
    ));
    output.push_str("\nMinimum 75/100 recommended for pilot success\n");
    output.push_str(RULE);
    output.push('\n');

    output
}

fn interpretation(grade: Grade) -> &'static str {
    match grade {
        Grade::A => "Excellent! Ready for implementation.",
        Grade::B => "Good. Minor improvements recommended.",
        Grade::C => "Acceptable. Address key gaps before proceeding.",
        Grade::D => "Needs work. Significant improvements required.",
        Grade::F => "Insufficient. Major revision needed.",
    }
}
