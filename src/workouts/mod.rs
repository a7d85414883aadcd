//! Lifts and the workouts built from them.

pub mod types;

pub use types::{Exercise, LiftName, Workout, MAIN_LIFT_TAG};
