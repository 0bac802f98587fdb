//! Physio Match - doctor recommendation engine for the physiotherapy clinic portal
//!
//! Given a patient's reported condition and the clinic's roster, the matcher
//! filters doctors by specialization and spoken language, scores them on
//! experience, rating, case volume and specialization affinity, and returns
//! them best first.

pub mod config;
pub mod core;
pub mod models;
pub mod services;

// Re-export commonly used types
pub use self::core::{Matcher, SpecializationMap, AffinityRule, AffinityTrigger};
pub use models::{Doctor, PatientCondition, Specialization, ScoringRules, sample_roster};
pub use services::{RecommendationService, RecommendationError, RosterSource, RosterError};
