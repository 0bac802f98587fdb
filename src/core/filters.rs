use crate::core::specialization::SpecializationMap;
use crate::models::{Doctor, PatientCondition};

/// Keep roster doctors whose specialization treats the patient's pain area
///
/// This is Stage 1 of the matching pipeline. Roster order is preserved.
pub fn filter_by_specialization<'a>(
    roster: &'a [Doctor],
    condition: &PatientCondition,
    specializations: &SpecializationMap,
) -> Vec<&'a Doctor> {
    let accepted = specializations.lookup(&condition.pain_area);

    roster
        .iter()
        .filter(|doctor| accepted.contains(&doctor.specialization))
        .collect()
}

/// Narrow the pool to doctors speaking the preferred language
///
/// This is Stage 2 - a soft filter. When nobody in the pool speaks the
/// language the pool is returned unchanged, so it never empties the pool.
pub fn filter_by_language<'a>(
    pool: Vec<&'a Doctor>,
    preferred_language: Option<&str>,
) -> Vec<&'a Doctor> {
    let Some(language) = preferred_language else {
        return pool;
    };

    let speakers: Vec<&Doctor> = pool
        .iter()
        .copied()
        .filter(|doctor| doctor.speaks(language))
        .collect();

    if speakers.is_empty() {
        tracing::debug!("No candidate speaks {}, ignoring language preference", language);
        pool
    } else {
        speakers
    }
}
