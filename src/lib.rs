//! StrengthPlan - periodized strength-training schedules
//!
//! Expands a rotation of barbell workouts over a number of cycles on the
//! configured training days, applies linear progressive overload, supports
//! correcting a lift with cascading re-projection, and stores the schedule as
//! JSON.

pub mod plans;
pub mod storage;
pub mod workouts;

// Re-export commonly used types
pub use plans::{Paradigm, PlanError, ScheduleRow, TrainingPlan};
pub use storage::config::{AppConfig, Presets};
pub use workouts::{Exercise, LiftName, Workout};
