use crate::core::{
    filters::{filter_by_language, filter_by_specialization},
    scoring::{calculate_match_score, default_affinity_rules, AffinityRule},
    specialization::SpecializationMap,
};
use crate::models::{Doctor, PatientCondition, ScoredDoctor, ScoringRules};
use std::cmp::Ordering;

/// Main matching orchestrator - implements the doctor recommendation pipeline
///
/// # Pipeline Stages
/// 1. Specialization filter (pain area lookup, fallback for unknown areas)
/// 2. Soft language filter
/// 3. Scoring
/// 4. Stable sort by score, descending
///
/// The matcher holds only read-only tables, so one instance can serve
/// any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct Matcher {
    specializations: SpecializationMap,
    affinity_rules: Vec<AffinityRule>,
    rules: ScoringRules,
}

impl Matcher {
    pub fn new(
        specializations: SpecializationMap,
        affinity_rules: Vec<AffinityRule>,
        rules: ScoringRules,
    ) -> Self {
        Self {
            specializations,
            affinity_rules,
            rules,
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(
            SpecializationMap::default(),
            default_affinity_rules(),
            ScoringRules::default(),
        )
    }

    pub fn specializations(&self) -> &SpecializationMap {
        &self.specializations
    }

    /// Score and order the candidate pool for a condition
    ///
    /// Doctors with equal scores keep their roster order.
    pub fn rank<'a>(&self, condition: &PatientCondition, roster: &'a [Doctor]) -> Vec<ScoredDoctor<'a>> {
        // Stage 1: Specialization filter
        let pool = filter_by_specialization(roster, condition, &self.specializations);
        tracing::debug!(
            "{} of {} doctors treat pain area '{}'",
            pool.len(),
            roster.len(),
            condition.pain_area
        );

        // Stage 2: Language filter
        let pool = filter_by_language(pool, condition.preferred_language.as_deref());

        // Stage 3: Scoring
        let mut scored: Vec<ScoredDoctor<'a>> = pool
            .into_iter()
            .map(|doctor| ScoredDoctor {
                doctor,
                score: calculate_match_score(doctor, condition, &self.rules, &self.affinity_rules),
            })
            .collect();

        // Stage 4: Sort by score (descending); sort_by is stable
        scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        scored
    }

    /// Find the doctors best suited to a patient's condition
    ///
    /// # Arguments
    /// * `condition` - The patient's reported condition
    /// * `roster` - All doctors available for matching
    ///
    /// # Returns
    /// Matching doctors, best first. An empty vector means no doctor treats
    /// the condition, which is a normal outcome.
    pub fn find_matches(&self, condition: &PatientCondition, roster: &[Doctor]) -> Vec<Doctor> {
        self.rank(condition, roster)
            .into_iter()
            .map(|scored| scored.doctor.clone())
            .collect()
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{sample_roster, Specialization};

    fn create_condition(pain_area: &str, severity: u8, previous_injury: bool) -> PatientCondition {
        PatientCondition {
            pain_area: pain_area.to_string(),
            severity,
            duration: "2 weeks".to_string(),
            previous_injury,
            age_group: "adult".to_string(),
            preferred_language: None,
        }
    }

    fn create_doctor(id: &str, specialization: Specialization, years: u32) -> Doctor {
        Doctor {
            id: id.to_string(),
            name: format!("Dr. {}", id),
            specialization,
            experience_years: years,
            rating: 4.5,
            treatments_performed: 1000,
            languages: vec!["English".to_string()],
        }
    }

    fn ids(doctors: &[Doctor]) -> Vec<&str> {
        doctors.iter().map(|d| d.id.as_str()).collect()
    }

    #[test]
    fn test_knee_ranks_sports_rehabilitation_first() {
        let matcher = Matcher::with_defaults();
        let roster = sample_roster();

        let result = matcher.find_matches(&create_condition("knee", 5, false), &roster);

        assert_eq!(ids(&result), vec!["1", "5", "3"]);
        assert_eq!(result[0].specialization, Specialization::SportsRehabilitation);
    }

    #[test]
    fn test_scores_descend() {
        let matcher = Matcher::with_defaults();
        let roster = sample_roster();

        for area in ["knee", "back", "neck", "shoulder", "hip", "toe"] {
            let ranked = matcher.rank(&create_condition(area, 8, true), &roster);
            for pair in ranked.windows(2) {
                assert!(pair[0].score >= pair[1].score, "unsorted for {}", area);
            }
        }
    }

    #[test]
    fn test_ties_keep_roster_order() {
        let matcher = Matcher::with_defaults();
        let roster = vec![
            create_doctor("a", Specialization::ManualTherapy, 5),
            create_doctor("b", Specialization::ManualTherapy, 9),
            create_doctor("c", Specialization::ManualTherapy, 5),
            create_doctor("d", Specialization::ManualTherapy, 5),
        ];

        let result = matcher.find_matches(&create_condition("wrist", 2, false), &roster);

        assert_eq!(ids(&result), vec!["b", "a", "c", "d"]);
    }

    #[test]
    fn test_no_specialization_match_is_empty() {
        let matcher = Matcher::with_defaults();
        let roster = vec![create_doctor("n", Specialization::NeurologicalRehabilitation, 10)];

        let result = matcher.find_matches(&create_condition("knee", 5, false), &roster);
        assert!(result.is_empty());
    }

    #[test]
    fn test_empty_roster() {
        let matcher = Matcher::with_defaults();
        assert!(matcher.find_matches(&create_condition("knee", 5, false), &[]).is_empty());
    }

    #[test]
    fn test_roster_is_not_mutated() {
        let matcher = Matcher::with_defaults();
        let roster = sample_roster();
        let before = roster.clone();

        let _ = matcher.find_matches(&create_condition("back", 9, true), &roster);

        assert_eq!(roster, before);
    }

    #[test]
    fn test_custom_tables() {
        let specializations = SpecializationMap::new(
            vec![("jaw".to_string(), vec![Specialization::ManualTherapy])],
            vec![Specialization::NeurologicalRehabilitation],
        );
        let matcher = Matcher::new(specializations, vec![], ScoringRules::default());
        let roster = sample_roster();

        assert_eq!(ids(&matcher.find_matches(&create_condition("jaw", 5, false), &roster)), vec!["3"]);
        assert_eq!(ids(&matcher.find_matches(&create_condition("knee", 5, false), &roster)), vec!["2"]);
    }
}
