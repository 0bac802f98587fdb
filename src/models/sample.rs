use crate::models::domain::{Doctor, Specialization};

fn doctor(
    id: &str,
    name: &str,
    specialization: Specialization,
    experience_years: u32,
    rating: f64,
    treatments_performed: u32,
    languages: &[&str],
) -> Doctor {
    Doctor {
        id: id.to_string(),
        name: name.to_string(),
        specialization,
        experience_years,
        rating,
        treatments_performed,
        languages: languages.iter().map(|l| l.to_string()).collect(),
    }
}

/// The clinic's reference roster, used until the practitioner directory is
/// backed by a real data source
pub fn sample_roster() -> Vec<Doctor> {
    vec![
        doctor("1", "Dr. Priya Sharma", Specialization::SportsRehabilitation, 12, 4.9, 1500, &["English", "Hindi"]),
        doctor("2", "Dr. Arjun Mehta", Specialization::NeurologicalRehabilitation, 15, 4.8, 2000, &["English", "Hindi", "Gujarati"]),
        doctor("3", "Dr. Sarah Wilson", Specialization::ManualTherapy, 8, 4.7, 1200, &["English", "French"]),
        doctor("4", "Dr. Rajesh Kumar", Specialization::ChronicPain, 20, 4.9, 3000, &["English", "Hindi", "Punjabi"]),
        doctor("5", "Dr. Ananya Iyer", Specialization::PostSurgical, 10, 4.8, 1800, &["English", "Hindi", "Tamil"]),
        doctor("6", "Dr. Michael Chen", Specialization::StrengthConditioning, 7, 4.6, 900, &["English", "Mandarin"]),
    ]
}
