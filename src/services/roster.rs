use crate::models::Doctor;
use std::collections::HashSet;
use std::path::PathBuf;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Errors that can occur when loading the doctor roster
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid roster JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid doctor {id}: {source}")]
    InvalidDoctor {
        id: String,
        #[source]
        source: ValidationErrors,
    },

    #[error("Duplicate doctor id: {0}")]
    DuplicateId(String),
}

/// Where the matcher's roster comes from
///
/// Stands in for the practitioner directory query: either a fixed list held
/// in memory or a JSON array of doctors on disk.
#[derive(Debug, Clone)]
pub enum RosterSource {
    InMemory(Vec<Doctor>),
    JsonFile(PathBuf),
}

impl RosterSource {
    /// Load and validate the roster
    pub async fn load(&self) -> Result<Vec<Doctor>, RosterError> {
        let doctors = match self {
            RosterSource::InMemory(doctors) => doctors.clone(),
            RosterSource::JsonFile(path) => {
                tracing::debug!("Loading roster from {}", path.display());
                let bytes = tokio::fs::read(path).await?;
                serde_json::from_slice(&bytes)?
            }
        };

        validate_roster(&doctors)?;
        Ok(doctors)
    }
}

/// Check every doctor's fields and that ids are unique
pub fn validate_roster(doctors: &[Doctor]) -> Result<(), RosterError> {
    let mut seen = HashSet::with_capacity(doctors.len());

    for doctor in doctors {
        doctor.validate().map_err(|source| RosterError::InvalidDoctor {
            id: doctor.id.clone(),
            source,
        })?;

        if !seen.insert(doctor.id.as_str()) {
            return Err(RosterError::DuplicateId(doctor.id.clone()));
        }
    }

    Ok(())
}
