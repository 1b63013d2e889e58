use serde::{Deserialize, Serialize};

/// Compatibility report returned by the ATS route. Response-only, never
/// persisted. Every field is defaulted so a partially-populated model
/// response never produces a missing-field error downstream.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AtsReport {
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub picked_skills: Vec<String>,
    #[serde(default)]
    pub picked_experience: Vec<String>,
    #[serde(default)]
    pub missing_keywords: Vec<String>,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub improvement_tips: Vec<String>,
}

impl AtsReport {
    /// Clamps the score into 0–100. Applied once, right after parsing.
    pub fn normalized(mut self) -> Self {
        self.score = self.score.clamp(0, 100);
        self
    }
}
