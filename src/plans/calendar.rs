//! Training-day calendar.
//!
//! Dates are generated like a business-day calendar with a custom weekmask:
//! the weekmask decides which weekdays count, and a start date that is not a
//! training day rolls forward to the next one.

use chrono::{Datelike, NaiveDate, Weekday};

use super::types::PlanError;

/// The set of weekdays on which workouts may be scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrainingDays {
    /// Bit `n` set means `Weekday::from_num_days_from_monday(n)` is a training day.
    mask: u8,
}

impl TrainingDays {
    /// Build from a list of weekdays. Duplicates collapse.
    pub fn new(days: impl IntoIterator<Item = Weekday>) -> Self {
        let mask = days
            .into_iter()
            .fold(0u8, |mask, day| mask | 1 << day.num_days_from_monday());
        Self { mask }
    }

    /// Parse weekday names such as `"Mon"` or `"wednesday"`.
    pub fn parse<S: AsRef<str>>(names: &[S]) -> Result<Self, PlanError> {
        let days = names
            .iter()
            .map(|name| {
                let name = name.as_ref();
                name.trim().parse::<Weekday>().map_err(|_| {
                    PlanError::InvalidConfiguration(format!("unknown weekday: {name:?}"))
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self::new(days))
    }

    /// Check whether `day` is a training day.
    pub fn contains(&self, day: Weekday) -> bool {
        self.mask & (1 << day.num_days_from_monday()) != 0
    }

    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }

    /// Number of training days per week.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Training days in Monday-first order.
    pub fn weekdays(&self) -> Vec<Weekday> {
        (0..7u8)
            .filter(|n| self.mask & (1 << n) != 0)
            .filter_map(|n| Weekday::try_from(n).ok())
            .collect()
    }

    /// First training day on or after `date`.
    pub fn roll_forward(&self, date: NaiveDate) -> Option<NaiveDate> {
        if self.is_empty() {
            return None;
        }
        date.iter_days().find(|d| self.contains(d.weekday()))
    }
}

/// Produce one date per workout occurrence, `cycles * workouts_per_cycle`
/// dates in total, in cycle-major order.
pub fn training_dates(
    start: NaiveDate,
    cycles: u32,
    workouts_per_cycle: usize,
    days: &TrainingDays,
) -> Result<Vec<NaiveDate>, PlanError> {
    if days.is_empty() {
        return Err(PlanError::InvalidConfiguration(
            "no training days configured".to_string(),
        ));
    }
    if cycles == 0 {
        return Err(PlanError::InvalidConfiguration(
            "cycle count must be positive".to_string(),
        ));
    }

    let count = cycles as usize * workouts_per_cycle;
    let dates: Vec<NaiveDate> = std::iter::successors(days.roll_forward(start), |date| {
        date.succ_opt().and_then(|next| days.roll_forward(next))
    })
    .take(count)
    .collect();

    if dates.len() < count {
        return Err(PlanError::InvalidConfiguration(format!(
            "calendar ran out of dates after {}",
            dates.len()
        )));
    }

    Ok(dates)
}
