use crate::core::{default_affinity_rules, AffinityRule, Matcher, SpecializationMap};
use crate::models::{sample_roster, ScoringRules, Specialization};
use crate::services::{RecommendationService, RosterSource};
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub matching: MatchingSettings,
    #[serde(default)]
    pub roster: RosterSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub specializations: Option<SpecializationSettings>,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MatchingSettings {
    /// Artificial delay before answering, in milliseconds
    pub simulated_latency_ms: Option<u64>,
    pub max_results: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RosterSettings {
    /// JSON roster file; the built-in roster is used when unset
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default = "default_experience_cap")]
    pub experience_cap: f64,
    #[serde(default = "default_volume_divisor")]
    pub volume_divisor: f64,
    #[serde(default = "default_volume_cap")]
    pub volume_cap: f64,
    #[serde(default = "default_affinity_bonus")]
    pub affinity_bonus: f64,
    /// Replaces the standard affinity table when present
    #[serde(default)]
    pub affinity: Option<Vec<AffinityRule>>,
}

impl Default for ScoringSettings {
    fn default() -> Self {
        Self {
            experience_cap: default_experience_cap(),
            volume_divisor: default_volume_divisor(),
            volume_cap: default_volume_cap(),
            affinity_bonus: default_affinity_bonus(),
            affinity: None,
        }
    }
}

fn default_experience_cap() -> f64 { 20.0 }
fn default_volume_divisor() -> f64 { 500.0 }
fn default_volume_cap() -> f64 { 5.0 }
fn default_affinity_bonus() -> f64 { 10.0 }

impl ScoringSettings {
    pub fn rules(&self) -> ScoringRules {
        ScoringRules {
            experience_cap: self.experience_cap,
            volume_divisor: self.volume_divisor,
            volume_cap: self.volume_cap,
            affinity_bonus: self.affinity_bonus,
        }
    }

    pub fn affinity_rules(&self) -> Vec<AffinityRule> {
        self.affinity.clone().unwrap_or_else(default_affinity_rules)
    }
}

/// Replacement pain area table
#[derive(Debug, Clone, Deserialize)]
pub struct SpecializationSettings {
    #[serde(default)]
    pub areas: HashMap<String, Vec<Specialization>>,
    #[serde(default = "default_fallback")]
    pub fallback: Vec<Specialization>,
}

fn default_fallback() -> Vec<Specialization> {
    vec![Specialization::ManualTherapy, Specialization::ChronicPain]
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "full".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with PHYSIO)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., PHYSIO__MATCHING__MAX_RESULTS -> matching.max_results
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(environment())
            .build()?
            .try_deserialize()
    }

    pub fn specialization_map(&self) -> SpecializationMap {
        match &self.specializations {
            Some(table) => SpecializationMap::new(table.areas.clone(), table.fallback.clone()),
            None => SpecializationMap::default(),
        }
    }

    pub fn matcher(&self) -> Matcher {
        Matcher::new(
            self.specialization_map(),
            self.scoring.affinity_rules(),
            self.scoring.rules(),
        )
    }

    pub fn roster_source(&self) -> RosterSource {
        match &self.roster.path {
            Some(path) => RosterSource::JsonFile(path.clone()),
            None => RosterSource::InMemory(sample_roster()),
        }
    }

    /// Build the recommendation service described by these settings
    pub fn recommendation_service(&self) -> RecommendationService {
        let latency = Duration::from_millis(self.matching.simulated_latency_ms.unwrap_or(0));

        RecommendationService::new(self.roster_source(), self.matcher())
            .with_simulated_latency(latency)
            .with_max_results(self.matching.max_results)
    }
}

fn environment() -> Environment {
    Environment::with_prefix("PHYSIO")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}
