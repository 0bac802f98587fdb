use crate::models::{Doctor, PatientCondition, ScoringRules, Specialization};
use serde::{Deserialize, Serialize};

/// Condition side of a specialization-affinity rule
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AffinityTrigger {
    /// Patient reports pain in this area
    PainArea(String),
    /// Patient severity is at least this value
    MinSeverity(u8),
    /// Patient has a previous injury
    PreviousInjury,
}

/// A specialization considered an especially strong fit when its trigger holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffinityRule {
    pub when: AffinityTrigger,
    pub specialization: Specialization,
}

impl AffinityRule {
    pub fn new(when: AffinityTrigger, specialization: Specialization) -> Self {
        Self { when, specialization }
    }

    /// `pain_area` must already be normalized
    pub fn applies(&self, doctor: &Doctor, condition: &PatientCondition, pain_area: &str) -> bool {
        if doctor.specialization != self.specialization {
            return false;
        }

        match &self.when {
            AffinityTrigger::PainArea(area) => area.to_lowercase() == pain_area,
            AffinityTrigger::MinSeverity(min) => condition.severity >= *min,
            AffinityTrigger::PreviousInjury => condition.previous_injury,
        }
    }
}

/// The clinic's standard affinity table
pub fn default_affinity_rules() -> Vec<AffinityRule> {
    vec![
        AffinityRule::new(
            AffinityTrigger::PainArea("knee".to_string()),
            Specialization::SportsRehabilitation,
        ),
        AffinityRule::new(
            AffinityTrigger::PainArea("back".to_string()),
            Specialization::ChronicPain,
        ),
        AffinityRule::new(
            AffinityTrigger::PainArea("neck".to_string()),
            Specialization::ManualTherapy,
        ),
        AffinityRule::new(AffinityTrigger::MinSeverity(7), Specialization::ChronicPain),
        AffinityRule::new(AffinityTrigger::PreviousInjury, Specialization::PostSurgical),
    ]
}

/// Whether any affinity rule favours this doctor for the condition
pub fn has_affinity(
    doctor: &Doctor,
    condition: &PatientCondition,
    affinity_rules: &[AffinityRule],
) -> bool {
    let pain_area = condition.normalized_pain_area();
    affinity_rules
        .iter()
        .any(|rule| rule.applies(doctor, condition, &pain_area))
}

/// Calculate the match score of a doctor for a patient condition
///
/// Scoring formula:
/// score = min(experience_years, 20)
///       + rating
///       + min(treatments_performed / 500, 5)
///       + 10 if any affinity rule applies (never stacked)
pub fn calculate_match_score(
    doctor: &Doctor,
    condition: &PatientCondition,
    rules: &ScoringRules,
    affinity_rules: &[AffinityRule],
) -> f64 {
    let experience = experience_score(doctor.experience_years, rules);
    let volume = volume_score(doctor.treatments_performed, rules);

    let bonus = if has_affinity(doctor, condition, affinity_rules) {
        rules.affinity_bonus
    } else {
        0.0
    };

    experience + doctor.rating + volume + bonus
}

#[inline]
fn experience_score(experience_years: u32, rules: &ScoringRules) -> f64 {
    (experience_years as f64).min(rules.experience_cap)
}

#[inline]
fn volume_score(treatments_performed: u32, rules: &ScoringRules) -> f64 {
    if rules.volume_divisor <= 0.0 {
        return 0.0;
    }

    (treatments_performed as f64 / rules.volume_divisor).min(rules.volume_cap)
}
