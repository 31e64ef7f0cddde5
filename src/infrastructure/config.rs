use crate::domain::error::{AnalysisError, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_TEMP_THRESHOLD: f64 = 15.0;
pub const DEFAULT_TIME_BETWEEN_EVENTS: usize = 30;
pub const DEFAULT_WEIGHT_THRESHOLD: f64 = 0.2;

/// Detection thresholds shared by every analysis of a study.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum stove temperature (degrees) for a peak to count as cooking.
    #[serde(default = "default_temp_threshold")]
    pub temp_threshold: f64,
    /// Minimum number of samples between two cooking peaks.
    #[serde(default = "default_time_between_events")]
    pub time_between_events: usize,
    /// Smallest fuel weight change (kg) that is not treated as noise.
    #[serde(default = "default_weight_threshold")]
    pub weight_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            temp_threshold: DEFAULT_TEMP_THRESHOLD,
            time_between_events: DEFAULT_TIME_BETWEEN_EVENTS,
            weight_threshold: DEFAULT_WEIGHT_THRESHOLD,
        }
    }
}

impl Thresholds {
    pub fn validate(&self) -> Result<()> {
        if !self.temp_threshold.is_finite() || self.temp_threshold < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "temperature threshold must be a non-negative number, got {}",
                self.temp_threshold
            )));
        }
        if !self.weight_threshold.is_finite() || self.weight_threshold < 0.0 {
            return Err(AnalysisError::InvalidConfig(format!(
                "weight threshold must be a non-negative number, got {}",
                self.weight_threshold
            )));
        }
        Ok(())
    }
}

fn default_temp_threshold() -> f64 {
    DEFAULT_TEMP_THRESHOLD
}

fn default_time_between_events() -> usize {
    DEFAULT_TIME_BETWEEN_EVENTS
}

fn default_weight_threshold() -> f64 {
    DEFAULT_WEIGHT_THRESHOLD
}

#[derive(Debug, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    #[default]
    Json,
    Text,
}

/// Everything needed to analyse one household study.
#[derive(Debug, Deserialize, Clone)]
pub struct StudyConfig {
    pub dataset_path: PathBuf,
    pub stoves: Vec<String>,
    pub fuels: Vec<String>,
    #[serde(default)]
    pub thresholds: Thresholds,
    #[serde(default)]
    pub format: ReportFormat,
}

/// Load `config/analysis.*` (optional) overlaid with `COOKSTOVE__*`
/// environment variables, e.g. `COOKSTOVE__THRESHOLDS__TEMP_THRESHOLD=20`.
pub fn load_study_config() -> anyhow::Result<StudyConfig> {
    load_study_config_from("config/analysis")
}

pub fn load_study_config_from(path: &str) -> anyhow::Result<StudyConfig> {
    let settings = config::Config::builder()
        .add_source(config::File::with_name(path).required(false))
        .add_source(
            config::Environment::with_prefix("COOKSTOVE")
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("stoves")
                .with_list_parse_key("fuels")
                .try_parsing(true),
        )
        .build()?;

    let study: StudyConfig = settings.try_deserialize()?;
    study.thresholds.validate()?;
    Ok(study)
}
