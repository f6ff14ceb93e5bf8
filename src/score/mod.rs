pub mod category;
pub mod contradiction;
pub mod gaps;
pub mod grade;

use crate::error::{Result, ScoreError};
use crate::segment::{PunctSegmenter, Segmenter};
use crate::types::report::ScoringResult;
use crate::types::rubric::Rubric;
use tracing::debug;

pub const MIN_PROPOSAL_CHARS: usize = 100;

pub struct Engine {
    rubric: Rubric,
    segmenter: Box<dyn Segmenter>,
}

impl Engine {
    pub fn new(rubric: Rubric) -> Self {
        Engine::with_segmenter(rubric, Box::new(PunctSegmenter::default()))
    }

    pub fn with_segmenter(rubric: Rubric, segmenter: Box<dyn Segmenter>) -> Self {
        Engine { rubric, segmenter }
    }

    pub fn score(&self, text: &str) -> Result<ScoringResult> {
        if text.trim().chars().count() < MIN_PROPOSAL_CHARS {
            return Err(ScoreError::Validation(format!(
                "text is too short (minimum {MIN_PROPOSAL_CHARS} characters)"
            )));
        }

        let text_lower = text.to_lowercase();
        let segmentation = self.segmenter.segment(text);

        let categories: Vec<_> = self
            .rubric
            .categories
            .iter()
            .map(|category| {
                let result =
                    category::score_category(&text_lower, &segmentation.sentences, category);
                debug!(
                    "{}: score {:.1}/{} coverage {:.1}% keywords {}/{} relevant sentences {}",
                    category.id.as_str(),
                    result.score,
                    result.max_score,
                    result.coverage,
                    result.keywords_matched,
                    result.total_keywords,
                    result.relevant_sentences,
                );
                result
            })
            .collect();

        let total_score: f64 = categories.iter().map(|result| result.score).sum();
        let gaps = gaps::identify_gaps(&categories);
        let recommendations = gaps::recommendations(&gaps, total_score);
        let contradictions = contradiction::detect(&segmentation.sentences);

        Ok(ScoringResult {
            total_score,
            grade: grade::grade_for(total_score),
            percentile: grade::percentile_for(total_score),
            categories,
            gaps,
            recommendations,
            contradictions,
            word_count: segmentation.content_words.len(),
            sentence_count: segmentation.sentences.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::report::Grade;

    fn engine() -> Engine {
        Engine::new(Rubric::builtin())
    }

    // Six paragraphs, one per rubric category, three sentences each, every
    // keyword of the category present.
    fn strong_proposal() -> String {
        [
            "The roi and return on investment case rests on cost savings, new revenue, and efficiency gains. \
             Productivity and competitive advantage define the market opportunity we pursue. \
             The business value and bottom-line impact are quantified per site.",
            "Our infrastructure and systems run on a managed technology platform with integration via a documented api. \
             The database and overall architecture were audited for technical capability last quarter. \
             In-house expertise and dedicated resources cover deployment and maintenance.",
            "We maintain data on every unit, including a labeled dataset and ten years of historical records for analytics. \
             Data quality audits and data collection runbooks keep sensor measurements trustworthy. \
             Operational metrics flow into reporting dashboards from our information systems.",
            "Each kpi is a named metric with a measurement plan, a baseline, and a target. \
             Every goal and objective maps to a performance indicator with weekly tracking. \
             Evaluation against success criteria uses an external benchmark.",
            "The risk register covers mitigation and contingency plans for each challenge. \
             Governance, compliance, security, and privacy reviews are scheduled quarterly. \
             A backup plan and failsafe procedure close out the risk assessment.",
            "Training and adoption are driven by a communication plan for every stakeholder group. \
             Buy-in follows our change management playbook and user acceptance testing. \
             Engagement, support, and transition milestones respect the existing culture.",
        ]
        .join(" ")
    }

    #[test]
    fn rejects_text_under_one_hundred_chars() {
        let text = "x".repeat(99);
        let err = engine().score(&text).expect_err("validation should fail");
        assert!(matches!(err, ScoreError::Validation(_)));
        assert!(err.to_string().contains("too short"));
    }

    #[test]
    fn accepts_text_at_exactly_one_hundred_chars() {
        let base = "data quality matters here. ";
        let mut text = base.repeat(4).trim_end().to_string(); // 107 chars
        text.truncate(100);
        assert_eq!(text.chars().count(), 100);
        assert!(engine().score(&text).is_ok());
    }

    #[test]
    fn whitespace_padding_does_not_rescue_short_text() {
        let text = format!("{}{}", " ".repeat(200), "too short.");
        let err = engine().score(&text).expect_err("validation should fail");
        assert!(matches!(err, ScoreError::Validation(_)));
    }

    #[test]
    fn scoring_is_deterministic() {
        let text = strong_proposal();
        let first = engine().score(&text).expect("scoring should succeed");
        let second = engine().score(&text).expect("scoring should succeed");
        assert_eq!(first.total_score, second.total_score);
        assert_eq!(first.grade, second.grade);
        assert_eq!(first.gaps.len(), second.gaps.len());
        assert_eq!(first.recommendations, second.recommendations);
        assert_eq!(first.contradictions.len(), second.contradictions.len());
    }

    #[test]
    fn total_and_category_scores_stay_in_bounds() {
        let text = strong_proposal();
        let result = engine().score(&text).expect("scoring should succeed");
        assert!(result.total_score >= 0.0 && result.total_score <= 100.0);
        for category in &result.categories {
            assert!(category.score >= 0.0);
            assert!(category.score <= f64::from(category.max_score) + 1e-9);
        }
    }

    #[test]
    fn strong_proposal_scores_seventy_five_plus() {
        let text = strong_proposal();
        let result = engine().score(&text).expect("scoring should succeed");
        assert!(
            result.total_score >= 75.0,
            "expected >= 75, got {}",
            result.total_score
        );
        assert!(result.grade <= Grade::C);
        assert!(result.gaps.len() <= 1);
    }

    #[test]
    fn irrelevant_text_scores_near_zero_with_grade_f() {
        let sentence = "The quiet garden waited beneath an overcast sky while sparrows argued. ";
        let text = sentence.repeat(4);
        let result = engine().score(&text).expect("scoring should succeed");
        assert!(result.total_score < 10.0);
        assert_eq!(result.grade, Grade::F);
        assert!(result.recommendations[0].starts_with("Priority:"));
    }

    #[test]
    fn repeated_unrelated_sentence_yields_low_scores_everywhere() {
        let sentence = "Bright yellow boats drifted slowly past the old lighthouse pier. ";
        let text = sentence.repeat(50);
        let result = engine().score(&text).expect("scoring should succeed");
        assert_eq!(result.sentence_count, 50);
        assert!(result.contradictions.is_empty());
        for category in &result.categories {
            assert!(category.score < f64::from(category.max_score) * 0.5);
        }
    }

    #[test]
    fn superset_text_never_scores_a_category_lower() {
        let base = strong_proposal();
        let base_result = engine().score(&base).expect("scoring should succeed");
        let richer = format!(
            "{base} The roi impact compounds as efficiency and revenue climb together."
        );
        let richer_result = engine().score(&richer).expect("scoring should succeed");
        let business = |result: &ScoringResult| result.categories[0].score;
        assert!(business(&richer_result) >= business(&base_result) - 1e-9);
    }

    #[test]
    fn counts_come_from_the_segmenter() {
        let text = strong_proposal();
        let result = engine().score(&text).expect("scoring should succeed");
        assert_eq!(result.sentence_count, 18);
        assert!(result.word_count > 100);
    }

    #[test]
    fn contradictions_cap_holds_through_the_engine() {
        let mixed = "We have the tools in place but need external help to run them well. ";
        let text = mixed.repeat(10);
        let result = engine().score(&text).expect("scoring should succeed");
        assert_eq!(result.contradictions.len(), 5);
    }
}
