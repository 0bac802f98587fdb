use serde::{Deserialize, Serialize};
use std::fmt;
use validator::Validate;

/// Treatment specialties offered by the clinic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    #[serde(rename = "Sports Rehabilitation")]
    SportsRehabilitation,
    #[serde(rename = "Neurological Rehabilitation")]
    NeurologicalRehabilitation,
    #[serde(rename = "Manual Therapy")]
    ManualTherapy,
    #[serde(rename = "Chronic Pain")]
    ChronicPain,
    #[serde(rename = "Post-Surgical")]
    PostSurgical,
    #[serde(rename = "Strength Conditioning")]
    StrengthConditioning,
}

impl Specialization {
    pub fn as_str(&self) -> &'static str {
        match self {
            Specialization::SportsRehabilitation => "Sports Rehabilitation",
            Specialization::NeurologicalRehabilitation => "Neurological Rehabilitation",
            Specialization::ManualTherapy => "Manual Therapy",
            Specialization::ChronicPain => "Chronic Pain",
            Specialization::PostSurgical => "Post-Surgical",
            Specialization::StrengthConditioning => "Strength Conditioning",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Roster entry for a practising physiotherapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Doctor {
    #[validate(length(min = 1))]
    pub id: String,
    pub name: String,
    pub specialization: Specialization,
    #[serde(rename = "experienceYears")]
    pub experience_years: u32,
    #[validate(range(min = 0.0, max = 5.0))]
    pub rating: f64,
    #[serde(rename = "treatmentsPerformed")]
    pub treatments_performed: u32,
    #[validate(length(min = 1))]
    pub languages: Vec<String>,
}

impl Doctor {
    /// Whether the doctor lists `language` among spoken languages (exact match)
    pub fn speaks(&self, language: &str) -> bool {
        self.languages.iter().any(|l| l == language)
    }
}

/// Candidate paired with its computed match score
///
/// Only lives for the duration of a ranking pass; callers of
/// `Matcher::find_matches` never see it.
#[derive(Debug, Clone, Copy)]
pub struct ScoredDoctor<'a> {
    pub doctor: &'a Doctor,
    pub score: f64,
}

/// Numeric constants of the match score formula
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringRules {
    /// Years of experience beyond this add nothing
    pub experience_cap: f64,
    /// Treatments performed per volume point
    pub volume_divisor: f64,
    pub volume_cap: f64,
    /// Flat bump for a specialization-affinity match
    pub affinity_bonus: f64,
}

impl Default for ScoringRules {
    fn default() -> Self {
        Self {
            experience_cap: 20.0,
            volume_divisor: 500.0,
            volume_cap: 5.0,
            affinity_bonus: 10.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_doctor() -> Doctor {
        Doctor {
            id: "d1".to_string(),
            name: "Dr. Test".to_string(),
            specialization: Specialization::ManualTherapy,
            experience_years: 5,
            rating: 4.5,
            treatments_performed: 600,
            languages: vec!["English".to_string(), "Hindi".to_string()],
        }
    }

    #[test]
    fn test_specialization_serializes_as_display_name() {
        let json = serde_json::to_string(&Specialization::PostSurgical).unwrap();
        assert_eq!(json, "\"Post-Surgical\"");

        let parsed: Specialization = serde_json::from_str("\"Chronic Pain\"").unwrap();
        assert_eq!(parsed, Specialization::ChronicPain);
        assert_eq!(parsed.to_string(), "Chronic Pain");
    }

    #[test]
    fn test_doctor_json_uses_camel_case() {
        let value = serde_json::to_value(create_doctor()).unwrap();

        assert_eq!(value["experienceYears"], 5);
        assert_eq!(value["treatmentsPerformed"], 600);
        assert_eq!(value["specialization"], "Manual Therapy");
        assert!(value.get("score").is_none());
    }

    #[test]
    fn test_doctor_validation() {
        let doctor = create_doctor();
        assert!(doctor.validate().is_ok());

        let mut bad_rating = create_doctor();
        bad_rating.rating = 5.5;
        assert!(bad_rating.validate().is_err());

        let mut no_languages = create_doctor();
        no_languages.languages.clear();
        assert!(no_languages.validate().is_err());
    }

    #[test]
    fn test_speaks_is_exact() {
        let doctor = create_doctor();
        assert!(doctor.speaks("Hindi"));
        assert!(!doctor.speaks("hindi"));
        assert!(!doctor.speaks("Tamil"));
    }
}
