use crate::types::rubric::CategoryId;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone)]
pub struct CategoryResult {
    pub id: CategoryId,
    pub score: f64,
    pub max_score: u32,
    pub keywords_matched: usize,
    pub total_keywords: usize,
    pub relevant_sentences: usize,
    pub coverage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Gap {
    #[serde(skip_serializing)]
    pub id: CategoryId,
    pub category: String,
    pub current_score: f64,
    pub max_score: u32,
    pub gap: f64,
    pub coverage: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contradiction {
    pub sentence_num: usize,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone)]
pub struct ScoringResult {
    pub total_score: f64,
    pub grade: Grade,
    pub percentile: &'static str,
    pub categories: Vec<CategoryResult>,
    pub gaps: Vec<Gap>,
    pub recommendations: Vec<String>,
    pub contradictions: Vec<Contradiction>,
    pub word_count: usize,
    pub sentence_count: usize,
}

pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round1_rounds_to_one_decimal() {
        assert_eq!(round1(12.34), 12.3);
        assert_eq!(round1(12.35), 12.4);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn grade_ordering_matches_quality() {
        assert!(Grade::A < Grade::B);
        assert!(Grade::D < Grade::F);
    }

    #[test]
    fn contradiction_serializes_type_tag() {
        let contradiction = Contradiction {
            sentence_num: 3,
            text: "we have staff but lack data".to_string(),
            kind: "mixed_signals",
        };
        let rendered = serde_json::to_string(&contradiction).expect("contradiction should serialize");
        assert!(rendered.contains("\"type\":\"mixed_signals\""));
        assert!(rendered.contains("\"sentence_num\":3"));
    }

    #[test]
    fn gap_omits_internal_id() {
        let gap = Gap {
            id: CategoryId::RiskManagement,
            category: "Risk Management".to_string(),
            current_score: 2.5,
            max_score: 10,
            gap: 7.5,
            coverage: 25.0,
        };
        let rendered = serde_json::to_string(&gap).expect("gap should serialize");
        assert!(rendered.contains("\"category\":\"Risk Management\""));
        assert!(!rendered.contains("risk_management"));
    }
}
