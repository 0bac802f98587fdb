// Model exports
pub mod condition;
pub mod domain;
pub mod sample;

pub use condition::PatientCondition;
pub use domain::{Doctor, Specialization, ScoredDoctor, ScoringRules};
pub use sample::sample_roster;
