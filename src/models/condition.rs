use serde::{Deserialize, Serialize};
use validator::Validate;

/// Condition reported by a patient in the booking flow
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct PatientCondition {
    #[validate(length(min = 1))]
    #[serde(rename = "painArea")]
    pub pain_area: String,
    #[validate(range(min = 1, max = 10))]
    pub severity: u8,
    #[serde(default)]
    pub duration: String,
    #[serde(rename = "previousInjury", default)]
    pub previous_injury: bool,
    #[serde(rename = "ageGroup", default)]
    pub age_group: String,
    #[serde(rename = "preferredLanguage", default, skip_serializing_if = "Option::is_none")]
    pub preferred_language: Option<String>,
}

impl PatientCondition {
    /// Pain area as used for lookups and bonus rules
    pub fn normalized_pain_area(&self) -> String {
        self.pain_area.to_lowercase()
    }
}
