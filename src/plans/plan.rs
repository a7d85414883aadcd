//! Training plan: workout rotation, training days and the generated schedule.

use chrono::NaiveDate;
use std::path::Path;

use super::calendar::{training_dates, TrainingDays};
use super::paradigm::Paradigm;
use super::progression;
use super::types::{PlanError, ScheduleRow};
use crate::storage::config::Presets;
use crate::storage::plan_store;
use crate::workouts::types::{LiftName, Workout};

/// A periodized plan built from a rotation of workouts.
#[derive(Debug, Clone)]
pub struct TrainingPlan {
    /// Generation strategy
    paradigm: Paradigm,
    /// Workout rotation, executed in order every cycle
    workouts: Vec<Workout>,
    /// Weekdays eligible for a workout
    training_days: TrainingDays,
    /// Generated schedule, `None` until expanded or loaded
    training: Option<Vec<ScheduleRow>>,
}

impl TrainingPlan {
    /// Create a plan with no workouts.
    pub fn new(paradigm: Paradigm, training_days: TrainingDays) -> Self {
        Self {
            paradigm,
            workouts: Vec::new(),
            training_days,
            training: None,
        }
    }

    /// Create a plan with the paradigm's default rotation and the preset
    /// training days.
    pub fn from_presets(paradigm: Paradigm, presets: &Presets) -> Result<Self, PlanError> {
        let training_days = TrainingDays::parse(&presets.training_days)?;
        let mut plan = Self::new(paradigm, training_days);
        plan.workouts = paradigm.default_workouts(presets);

        tracing::info!(
            "Created {} plan with {} workouts on {:?}",
            paradigm,
            plan.workouts.len(),
            training_days.weekdays()
        );
        Ok(plan)
    }

    pub fn paradigm(&self) -> Paradigm {
        self.paradigm
    }

    pub fn training_days(&self) -> &TrainingDays {
        &self.training_days
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Look up a workout by tag.
    pub fn workout(&self, tag: &str) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.tag == tag)
    }

    /// Look up a workout by tag for editing.
    pub fn workout_mut(&mut self, tag: &str) -> Option<&mut Workout> {
        self.workouts.iter_mut().find(|w| w.tag == tag)
    }

    /// Register a workout under its tag.
    ///
    /// A workout with the same tag is replaced in place, keeping its position
    /// in the rotation; otherwise the workout is appended.
    pub fn add_workout(&mut self, workout: Workout) {
        match self.workouts.iter().position(|w| w.tag == workout.tag) {
            Some(index) => self.workouts[index] = workout,
            None => self.workouts.push(workout),
        }
    }

    /// The generated schedule, if any.
    pub fn training(&self) -> Option<&[ScheduleRow]> {
        self.training.as_deref()
    }

    /// Expand the rotation over `cycles` repetitions starting at `start` and
    /// store the result, replacing any previous schedule.
    pub fn expand(&mut self, start: NaiveDate, cycles: u32) -> Result<&[ScheduleRow], PlanError> {
        if self.training_days.is_empty() {
            return Err(PlanError::InvalidConfiguration(
                "no training days configured".to_string(),
            ));
        }

        let rows = if self.workouts.is_empty() {
            Vec::new()
        } else {
            let dates = training_dates(start, cycles, self.workouts.len(), &self.training_days)?;
            let rows = self.paradigm.expand(&self.workouts, &dates);

            if let (Some(first), Some(last)) = (dates.first(), dates.last()) {
                tracing::info!(
                    "Expanded {} cycles into {} rows ({} to {})",
                    cycles,
                    rows.len(),
                    first,
                    last
                );
            }
            rows
        };

        Ok(self.training.insert(rows).as_slice())
    }

    /// Correct the weight for `lift` on `date`.
    ///
    /// With `cascade`, later occurrences of the lift are re-projected from the
    /// new weight. A date/lift pair that matches nothing leaves the schedule
    /// unchanged. Non-finite weights are rejected since plan files cannot
    /// represent them.
    pub fn adjust_weight(
        &mut self,
        date: NaiveDate,
        lift: LiftName,
        new_weight: f64,
        cascade: bool,
    ) -> Result<(), PlanError> {
        let rows = self.training.as_mut().ok_or_else(|| {
            PlanError::InvalidReference("no schedule has been generated".to_string())
        })?;

        if !new_weight.is_finite() {
            return Err(PlanError::InvalidConfiguration(format!(
                "weight must be a finite number, got {new_weight}"
            )));
        }

        let changed = progression::adjust_weight(rows, date, lift, new_weight, cascade);
        if changed == 0 {
            tracing::debug!("No {} scheduled on {}, nothing adjusted", lift, date);
        } else {
            tracing::debug!("Adjusted {} {} rows from {}", changed, lift, date);
        }
        Ok(())
    }

    /// Write the schedule to `path`.
    pub fn save_training(&self, path: &Path) -> Result<(), PlanError> {
        let rows = self.training().ok_or_else(|| {
            PlanError::InvalidReference("no schedule has been generated".to_string())
        })?;
        plan_store::save_plan(path, rows)
    }

    /// Replace the schedule with the one stored at `path`.
    pub fn load_training(&mut self, path: &Path) -> Result<&[ScheduleRow], PlanError> {
        let rows = plan_store::load_plan(path)?;
        Ok(self.training.insert(rows).as_slice())
    }
}
