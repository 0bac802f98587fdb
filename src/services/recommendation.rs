use crate::core::Matcher;
use crate::models::{Doctor, PatientCondition};
use crate::services::roster::{RosterError, RosterSource};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Errors that can occur while producing a recommendation
#[derive(Debug, Error)]
pub enum RecommendationError {
    #[error("Invalid patient condition: {0}")]
    InvalidCondition(#[from] ValidationErrors),

    #[error("Roster unavailable: {0}")]
    Roster(#[from] RosterError),
}

/// Asynchronous front for the matcher
///
/// Mirrors how the booking flow consumes recommendations: a call that may
/// take a while and may fail. The ranking itself is done synchronously by
/// `Matcher`. Dropping the returned future abandons the request.
#[derive(Clone)]
pub struct RecommendationService {
    roster: Arc<RosterSource>,
    matcher: Matcher,
    simulated_latency: Duration,
    max_results: Option<usize>,
}

impl RecommendationService {
    pub fn new(roster: RosterSource, matcher: Matcher) -> Self {
        Self {
            roster: Arc::new(roster),
            matcher,
            simulated_latency: Duration::ZERO,
            max_results: None,
        }
    }

    pub fn with_simulated_latency(mut self, latency: Duration) -> Self {
        self.simulated_latency = latency;
        self
    }

    pub fn with_max_results(mut self, max_results: Option<usize>) -> Self {
        self.max_results = max_results;
        self
    }

    /// Recommend doctors for a patient condition, best first
    pub async fn recommend(
        &self,
        condition: &PatientCondition,
    ) -> Result<Vec<Doctor>, RecommendationError> {
        condition.validate()?;

        let roster = self.roster.load().await?;

        if !self.simulated_latency.is_zero() {
            tokio::time::sleep(self.simulated_latency).await;
        }

        let mut doctors = self.matcher.find_matches(condition, &roster);

        if let Some(limit) = self.max_results {
            doctors.truncate(limit);
        }

        tracing::info!(
            "Recommending {} doctors for pain area '{}' (from {} on roster)",
            doctors.len(),
            condition.pain_area,
            roster.len()
        );

        Ok(doctors)
    }
}
