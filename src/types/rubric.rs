use crate::error::{Result, ScoreError};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const WEIGHT_TOTAL: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryId {
    BusinessCase,
    TechnicalReadiness,
    DataFoundation,
    SuccessMetrics,
    RiskManagement,
    ChangeManagement,
}

impl CategoryId {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryId::BusinessCase => "business_case",
            CategoryId::TechnicalReadiness => "technical_readiness",
            CategoryId::DataFoundation => "data_foundation",
            CategoryId::SuccessMetrics => "success_metrics",
            CategoryId::RiskManagement => "risk_management",
            CategoryId::ChangeManagement => "change_management",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CategoryId::BusinessCase => "Business Case",
            CategoryId::TechnicalReadiness => "Technical Readiness",
            CategoryId::DataFoundation => "Data Foundation",
            CategoryId::SuccessMetrics => "Success Metrics",
            CategoryId::RiskManagement => "Risk Management",
            CategoryId::ChangeManagement => "Change Management",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RubricCategory {
    pub id: CategoryId,
    pub weight: u32,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Rubric {
    pub categories: Vec<RubricCategory>,
}

impl Rubric {
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(ScoreError::RubricInvalid(
                "rubric must declare at least one category".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for category in &self.categories {
            if !seen.insert(category.id) {
                return Err(ScoreError::RubricInvalid(format!(
                    "duplicate category: {}",
                    category.id.as_str()
                )));
            }
            if category.keywords.is_empty() {
                return Err(ScoreError::RubricInvalid(format!(
                    "category {} has an empty keyword list",
                    category.id.as_str()
                )));
            }
            if category
                .keywords
                .iter()
                .any(|keyword| keyword.trim().is_empty())
            {
                return Err(ScoreError::RubricInvalid(format!(
                    "category {} contains a blank keyword",
                    category.id.as_str()
                )));
            }
        }

        let weight_sum: u32 = self.categories.iter().map(|category| category.weight).sum();
        if weight_sum != WEIGHT_TOTAL {
            return Err(ScoreError::RubricInvalid(format!(
                "category weights must sum to {WEIGHT_TOTAL} (found {weight_sum})"
            )));
        }

        Ok(())
    }

    pub fn normalize_keywords(&mut self) {
        for category in &mut self.categories {
            for keyword in &mut category.keywords {
                *keyword = keyword.trim().to_lowercase();
            }
        }
    }

    pub fn builtin() -> Self {
        fn category(id: CategoryId, weight: u32, keywords: &[&str]) -> RubricCategory {
            RubricCategory {
                id,
                weight,
                keywords: keywords.iter().map(|keyword| keyword.to_string()).collect(),
            }
        }

        Rubric {
            categories: vec![
                category(
                    CategoryId::BusinessCase,
                    25,
                    &[
                        "roi",
                        "return on investment",
                        "cost savings",
                        "revenue",
                        "efficiency",
                        "productivity",
                        "competitive advantage",
                        "market opportunity",
                        "business value",
                        "impact",
                    ],
                ),
                category(
                    CategoryId::TechnicalReadiness,
                    20,
                    &[
                        "infrastructure",
                        "systems",
                        "technology",
                        "platform",
                        "integration",
                        "api",
                        "database",
                        "architecture",
                        "technical capability",
                        "expertise",
                        "resources",
                    ],
                ),
                category(
                    CategoryId::DataFoundation,
                    20,
                    &[
                        "data",
                        "dataset",
                        "historical records",
                        "analytics",
                        "data quality",
                        "data collection",
                        "measurements",
                        "metrics",
                        "reporting",
                        "information systems",
                    ],
                ),
                category(
                    CategoryId::SuccessMetrics,
                    15,
                    &[
                        "kpi",
                        "metric",
                        "measurement",
                        "baseline",
                        "target",
                        "goal",
                        "objective",
                        "performance indicator",
                        "tracking",
                        "evaluation",
                        "success criteria",
                        "benchmark",
                    ],
                ),
                category(
                    CategoryId::RiskManagement,
                    10,
                    &[
                        "risk",
                        "mitigation",
                        "contingency",
                        "challenge",
                        "governance",
                        "compliance",
                        "security",
                        "privacy",
                        "backup plan",
                        "failsafe",
                        "risk assessment",
                    ],
                ),
                category(
                    CategoryId::ChangeManagement,
                    10,
                    &[
                        "training",
                        "adoption",
                        "communication",
                        "stakeholder",
                        "buy-in",
                        "change management",
                        "user acceptance",
                        "engagement",
                        "support",
                        "transition",
                        "culture",
                    ],
                ),
            ],
        }
    }
}
