//! Lift and workout types.

use serde::{Deserialize, Serialize};

use crate::storage::config::Presets;

/// Tag carried by every main barbell lift.
pub const MAIN_LIFT_TAG: &str = "main_lift";

/// One of the five main barbell lifts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LiftName {
    Squat,
    DeadLift,
    BenchPress,
    ShoulderPress,
    Row,
}

impl LiftName {
    /// Name as written to plan files.
    pub fn as_str(&self) -> &'static str {
        match self {
            LiftName::Squat => "Squat",
            LiftName::DeadLift => "DeadLift",
            LiftName::BenchPress => "BenchPress",
            LiftName::ShoulderPress => "ShoulderPress",
            LiftName::Row => "Row",
        }
    }
}

impl std::fmt::Display for LiftName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single lift with its working parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Which lift this is
    pub name: LiftName,
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
    /// Exercise category
    pub tag: String,
}

impl Exercise {
    /// Create an exercise using the preset defaults for reps, sets, rest,
    /// overload and the lift's starting weight.
    pub fn new(name: LiftName, presets: &Presets) -> Self {
        Self {
            name,
            weight: presets.starting_weight(name),
            reps: presets.reps,
            sets: presets.sets,
            rest: presets.rest_seconds,
            superset: false,
            overload: presets.overload,
            tag: MAIN_LIFT_TAG.to_string(),
        }
    }

    /// Override the starting weight.
    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    /// Override the per-cycle overload.
    pub fn with_overload(mut self, overload: f64) -> Self {
        self.overload = overload;
        self
    }

    /// Override reps and sets.
    pub fn with_volume(mut self, reps: u32, sets: u32) -> Self {
        self.reps = reps;
        self.sets = sets;
        self
    }

    /// Override the rest period.
    pub fn with_rest(mut self, rest: u32) -> Self {
        self.rest = rest;
        self
    }

    /// Mark the exercise as part of a superset.
    pub fn in_superset(mut self) -> Self {
        self.superset = true;
        self
    }
}

impl std::fmt::Display for Exercise {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {} kg for {} reps. {} sets.",
            self.name, self.weight, self.reps, self.sets
        )
    }
}

/// An ordered collection of exercises performed in one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    /// Identifier, e.g. "Leg"
    pub tag: String,
    /// Exercises in execution order
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create a workout with no exercises.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            exercises: Vec::new(),
        }
    }

    /// Create a workout from a list of exercises.
    pub fn with_exercises(tag: impl Into<String>, exercises: Vec<Exercise>) -> Self {
        Self {
            tag: tag.into(),
            exercises,
        }
    }

    /// Append an exercise to the end of the session.
    pub fn add_exercise(&mut self, exercise: Exercise) {
        self.exercises.push(exercise);
    }

    /// Remove the first exercise equal to `exercise`.
    ///
    /// Returns `false` if the workout did not contain it.
    pub fn remove_exercise(&mut self, exercise: &Exercise) -> bool {
        match self.exercises.iter().position(|e| e == exercise) {
            Some(index) => {
                self.exercises.remove(index);
                true
            }
            None => false,
        }
    }

    /// Number of exercises in the session.
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }
}

impl std::fmt::Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for exercise in &self.exercises {
            writeln!(f, "{}", exercise)?;
        }
        Ok(())
    }
}
