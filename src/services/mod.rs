// Service exports
pub mod recommendation;
pub mod roster;

pub use recommendation::{RecommendationError, RecommendationService};
pub use roster::{validate_roster, RosterError, RosterSource};
