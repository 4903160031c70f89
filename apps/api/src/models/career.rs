use serde::{Deserialize, Serialize};

/// Projected demand tier. Only used to break ties between equal match scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GrowthProspects {
    Low,
    Medium,
    High,
    VeryHigh,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Career {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub interest_keywords: Vec<String>,
    pub degree_requirements: Vec<String>,
    pub salary_range: String,
    pub growth_prospects: GrowthProspects,
    pub work_environment: String,
}
