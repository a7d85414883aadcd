//! Training paradigms.
//!
//! A paradigm decides the default workout rotation and how a rotation is
//! expanded into a dated schedule.

use chrono::NaiveDate;

use super::progression::apply_overload;
use super::types::ScheduleRow;
use crate::storage::config::Presets;
use crate::workouts::types::{Exercise, LiftName, Workout};

/// Overload used for the lower-body pulls and squats on leg day.
const LEG_DAY_OVERLOAD: f64 = 5.0;

/// Plan-generation strategy, chosen when the plan is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Paradigm {
    /// Linear progression: every cycle adds one overload step to every lift.
    #[default]
    StartingStrength,
}

impl std::fmt::Display for Paradigm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Paradigm::StartingStrength => write!(f, "Starting Strength"),
        }
    }
}

impl Paradigm {
    /// Default workout rotation for this paradigm.
    pub fn default_workouts(&self, presets: &Presets) -> Vec<Workout> {
        match self {
            Paradigm::StartingStrength => vec![
                Workout::with_exercises(
                    "Leg",
                    vec![
                        Exercise::new(LiftName::Squat, presets).with_overload(LEG_DAY_OVERLOAD),
                        Exercise::new(LiftName::DeadLift, presets).with_overload(LEG_DAY_OVERLOAD),
                    ],
                ),
                Workout::with_exercises(
                    "Overhead",
                    vec![Exercise::new(LiftName::ShoulderPress, presets)],
                ),
                Workout::with_exercises(
                    "Bench",
                    vec![
                        Exercise::new(LiftName::Squat, presets),
                        Exercise::new(LiftName::BenchPress, presets),
                        Exercise::new(LiftName::Row, presets),
                    ],
                ),
            ],
        }
    }

    /// Expand `workouts` over pre-computed `dates` (one per workout
    /// occurrence, cycle-major) into a schedule table with overload applied.
    pub fn expand(&self, workouts: &[Workout], dates: &[NaiveDate]) -> Vec<ScheduleRow> {
        match self {
            Paradigm::StartingStrength => {
                let per_cycle: usize = workouts.iter().map(Workout::len).sum();
                let cycles = if workouts.is_empty() {
                    0
                } else {
                    dates.len() / workouts.len()
                };

                let mut rows = Vec::with_capacity(cycles * per_cycle);
                let mut dates = dates.iter();

                for cycle in 0..cycles {
                    for workout in workouts {
                        let Some(&date) = dates.next() else {
                            break;
                        };
                        for exercise in &workout.exercises {
                            rows.push(ScheduleRow::from_exercise(
                                exercise,
                                date,
                                &workout.tag,
                                cycle as u32,
                            ));
                        }
                    }
                }

                apply_overload(&mut rows);
                rows
            }
        }
    }
}
