//! Storage module for configuration and plan files.

pub mod config;
pub mod plan_store;

pub use config::{AppConfig, ConfigError, PlanSettings, Presets, StartingWeights};
pub use plan_store::{load_plan, save_plan};
