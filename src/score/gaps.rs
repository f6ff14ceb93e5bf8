use crate::types::report::{round1, CategoryResult, Gap};
use crate::types::rubric::CategoryId;
use std::cmp::Ordering;

const GAP_THRESHOLD: f64 = 0.7;
const TOP_GAPS: usize = 3;
const PRIORITY_FLOOR: f64 = 75.0;

pub fn identify_gaps(categories: &[CategoryResult]) -> Vec<Gap> {
    let mut gaps: Vec<Gap> = categories
        .iter()
        .filter(|result| result.score < f64::from(result.max_score) * GAP_THRESHOLD)
        .map(|result| Gap {
            id: result.id,
            category: result.id.display_name().to_string(),
            current_score: round1(result.score),
            max_score: result.max_score,
            gap: round1(f64::from(result.max_score) - result.score),
            coverage: result.coverage,
        })
        .collect();

    // stable sort keeps rubric order on equal point gaps
    gaps.sort_by(|a, b| b.gap.partial_cmp(&a.gap).unwrap_or(Ordering::Equal));
    gaps
}

pub fn recommendations(gaps: &[Gap], total: f64) -> Vec<String> {
    let mut recommendations: Vec<String> = gaps
        .iter()
        .take(TOP_GAPS)
        .map(|gap| recommendation_for(gap.id).to_string())
        .collect();

    if total < PRIORITY_FLOOR {
        recommendations.insert(
            0,
            "Priority: reach the 75+ score threshold for pilot success. \
             Focus on the largest gaps first."
                .to_string(),
        );
    }

    recommendations
}

fn recommendation_for(id: CategoryId) -> &'static str {
    match id {
        CategoryId::BusinessCase => {
            "Add quantifiable business outcomes with specific ROI projections. \
             Include baseline metrics and target improvements."
        }
        CategoryId::TechnicalReadiness => {
            "Detail your existing technical infrastructure and integration plans. \
             Address system compatibility and technical resource availability."
        }
        CategoryId::DataFoundation => {
            "Document your current data landscape including quality, volume, and accessibility. \
             Outline data collection and preparation strategies."
        }
        CategoryId::SuccessMetrics => {
            "Define specific, measurable KPIs with baseline and target values. \
             Include measurement methodology and reporting frequency."
        }
        CategoryId::RiskManagement => {
            "Identify potential risks and develop mitigation strategies. \
             Address data privacy, security, and compliance requirements."
        }
        CategoryId::ChangeManagement => {
            "Create a stakeholder engagement plan with training strategy. \
             Address adoption challenges and communication approaches."
        }
    }
}
