//! Preset table and application configuration.
//!
//! Configuration is read from `config.toml` in the platform config directory.
//! A missing file means defaults; every section may be given partially.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::workouts::types::LiftName;

/// Default location of the generated plan, relative to the working directory.
pub const DEFAULT_PLAN_PATH: &str = "content/plans/starting_strength.json";

/// Default values used when building exercises.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Presets {
    /// Repetitions per set
    pub reps: u32,
    /// Sets per exercise
    pub sets: u32,
    /// Rest between sets in seconds
    pub rest_seconds: u32,
    /// Weight added per cycle in kilograms
    pub overload: f64,
    /// Weekday names on which workouts are scheduled
    pub training_days: Vec<String>,
    /// Starting weight per lift
    pub starting_weights: StartingWeights,
}

impl Default for Presets {
    fn default() -> Self {
        Self {
            reps: 5,
            sets: 3,
            rest_seconds: 180,
            overload: 2.5,
            training_days: vec!["Mon".to_string(), "Wed".to_string(), "Fri".to_string()],
            starting_weights: StartingWeights::default(),
        }
    }
}

impl Presets {
    /// Starting weight for a lift in kilograms.
    pub fn starting_weight(&self, lift: LiftName) -> f64 {
        self.starting_weights.get(lift)
    }
}

/// Starting weight in kilograms for each main lift.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StartingWeights {
    #[serde(rename = "Squat")]
    pub squat: f64,
    #[serde(rename = "DeadLift")]
    pub dead_lift: f64,
    #[serde(rename = "BenchPress")]
    pub bench_press: f64,
    #[serde(rename = "ShoulderPress")]
    pub shoulder_press: f64,
    #[serde(rename = "Row")]
    pub row: f64,
}

impl Default for StartingWeights {
    fn default() -> Self {
        Self {
            squat: 100.0,
            dead_lift: 120.0,
            bench_press: 80.0,
            shoulder_press: 50.0,
            row: 70.0,
        }
    }
}

impl StartingWeights {
    pub fn get(&self, lift: LiftName) -> f64 {
        match lift {
            LiftName::Squat => self.squat,
            LiftName::DeadLift => self.dead_lift,
            LiftName::BenchPress => self.bench_press,
            LiftName::ShoulderPress => self.shoulder_press,
            LiftName::Row => self.row,
        }
    }
}

/// Settings for the generated plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanSettings {
    /// First day the plan may schedule a workout
    pub start_date: NaiveDate,
    /// Number of times the workout sequence repeats
    pub cycles: u32,
    /// Where the plan JSON is written
    pub output_path: PathBuf,
}

impl Default for PlanSettings {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2021, 1, 22).unwrap_or_default(),
            cycles: 4,
            output_path: PathBuf::from(DEFAULT_PLAN_PATH),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Exercise defaults and training days
    pub presets: Presets,
    /// Plan generation settings
    pub plan: PlanSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            presets: Presets::default(),
            plan: PlanSettings::default(),
        }
    }
}

/// Get the application configuration directory.
pub fn get_config_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "strengthplan", "StrengthPlan")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_config_dir().join("config.toml")
}

/// Load application configuration from the default location.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    load_config_from(&get_config_path())
}

/// Load application configuration from `path`, falling back to defaults if
/// the file does not exist.
pub fn load_config_from(path: &Path) -> Result<AppConfig, ConfigError> {
    if !path.exists() {
        tracing::debug!("No config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    tracing::info!("Loaded config from {}", path.display());
    Ok(config)
}

/// Save application configuration to `path`.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
