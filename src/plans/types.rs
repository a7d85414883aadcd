//! Schedule rows and plan errors.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::workouts::types::{Exercise, LiftName};

/// One scheduled exercise occurrence: a (cycle, workout, exercise) triple
/// pinned to a calendar date.
///
/// Field names on disk are fixed for compatibility with existing plan files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Day the workout is scheduled
    #[serde(with = "plan_date")]
    pub date: NaiveDate,
    /// Tag of the workout this row belongs to
    #[serde(rename = "id")]
    pub workout_id: String,
    /// Lift performed
    #[serde(rename = "name")]
    pub exercise_name: LiftName,
    /// Exercise category
    pub tag: String,
    /// Zero-based repetition of the workout sequence
    pub cycle: u32,
    /// Working weight in kilograms
    pub weight: f64,
    /// Repetitions per set
    pub reps: u32,
    /// Number of sets
    pub sets: u32,
    /// Rest between sets in seconds
    pub rest: u32,
    /// Performed as part of a superset
    pub superset: bool,
    /// Weight added per cycle in kilograms
    pub overload: f64,
    /// Free-form note
    #[serde(rename = "Note")]
    pub note: Option<String>,
}

impl ScheduleRow {
    /// Build a row from an exercise's current values.
    ///
    /// The weight is copied unchanged; overload is applied as a separate pass.
    pub fn from_exercise(
        exercise: &Exercise,
        date: NaiveDate,
        workout_id: &str,
        cycle: u32,
    ) -> Self {
        Self {
            date,
            workout_id: workout_id.to_string(),
            exercise_name: exercise.name,
            tag: exercise.tag.clone(),
            cycle,
            weight: exercise.weight,
            reps: exercise.reps,
            sets: exercise.sets,
            rest: exercise.rest,
            superset: exercise.superset,
            overload: exercise.overload,
            note: None,
        }
    }
}

/// Errors related to plan generation, adjustment and persistence.
#[derive(Debug, Error)]
pub enum PlanError {
    /// Training days or cycle count unusable
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Operation needs a schedule that does not exist yet
    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    /// Plan file could not be read or written
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Plan file contents could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Plan dates are written as midnight local date-times.
///
/// Reading also accepts plain dates and epoch milliseconds.
pub mod plan_date {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

    pub fn serialize<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let formatted = date.and_hms_opt(0, 0, 0).unwrap_or_default().format(FORMAT);
        serializer.collect_str(&formatted)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(PlanDateVisitor)
    }

    /// Parse a textual plan date.
    pub fn parse(value: &str) -> Option<NaiveDate> {
        let value = value.trim();
        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|dt| dt.date())
            .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
            .or_else(|_| NaiveDate::parse_from_str(value, "%Y-%m-%d"))
            .ok()
    }

    fn from_millis(millis: i64) -> Option<NaiveDate> {
        DateTime::from_timestamp_millis(millis).map(|dt| dt.date_naive())
    }

    struct PlanDateVisitor;

    impl<'de> Visitor<'de> for PlanDateVisitor {
        type Value = NaiveDate;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a date string or epoch milliseconds")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<NaiveDate, E> {
            parse(value).ok_or_else(|| E::custom(format!("invalid plan date: {value}")))
        }

        fn visit_i64<E: de::Error>(self, value: i64) -> Result<NaiveDate, E> {
            from_millis(value).ok_or_else(|| E::custom(format!("timestamp out of range: {value}")))
        }

        fn visit_u64<E: de::Error>(self, value: u64) -> Result<NaiveDate, E> {
            let millis = i64::try_from(value)
                .map_err(|_| E::custom(format!("timestamp out of range: {value}")))?;
            self.visit_i64(millis)
        }
    }
}
