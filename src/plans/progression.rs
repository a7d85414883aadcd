//! Progressive overload and weight corrections on a schedule table.

use chrono::NaiveDate;

use super::types::ScheduleRow;
use crate::workouts::types::LiftName;

/// Add one overload increment per completed cycle to every row.
///
/// Rows must still hold their base weight; this runs exactly once, right
/// after expansion.
pub(crate) fn apply_overload(rows: &mut [ScheduleRow]) {
    for row in rows.iter_mut() {
        row.weight += row.cycle as f64 * row.overload;
    }
}

/// Set `lift` to `new_weight` on `date`.
///
/// With `cascade`, every later occurrence of the lift is re-projected from the
/// new weight, one overload step per occurrence. Returns the number of rows
/// changed; no matching rows is not an error.
pub fn adjust_weight(
    rows: &mut [ScheduleRow],
    date: NaiveDate,
    lift: LiftName,
    new_weight: f64,
    cascade: bool,
) -> usize {
    let mut changed = 0;

    if cascade {
        for row in rows
            .iter_mut()
            .filter(|row| row.exercise_name == lift && row.date >= date)
        {
            row.weight = new_weight + changed as f64 * row.overload;
            changed += 1;
        }
    } else {
        for row in rows
            .iter_mut()
            .filter(|row| row.exercise_name == lift && row.date == date)
        {
            row.weight = new_weight;
            changed += 1;
        }
    }

    changed
}
