// Core algorithm exports
pub mod filters;
pub mod matcher;
pub mod scoring;
pub mod specialization;

pub use filters::{filter_by_specialization, filter_by_language};
pub use matcher::Matcher;
pub use scoring::{calculate_match_score, default_affinity_rules, has_affinity, AffinityRule, AffinityTrigger};
pub use specialization::SpecializationMap;
