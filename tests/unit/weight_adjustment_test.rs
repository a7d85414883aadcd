//! Unit tests for weight corrections.

use chrono::NaiveDate;
use strength_plan::plans::{Paradigm, PlanError, ScheduleRow, TrainingPlan};
use strength_plan::storage::config::Presets;
use strength_plan::workouts::LiftName;

fn expanded_plan() -> TrainingPlan {
    let mut plan =
        TrainingPlan::from_presets(Paradigm::StartingStrength, &Presets::default()).unwrap();
    plan.expand(NaiveDate::from_ymd_opt(2021, 1, 22).unwrap(), 4)
        .unwrap();
    plan
}

fn snapshot(plan: &TrainingPlan) -> Vec<ScheduleRow> {
    plan.training().expect("Plan should be expanded").to_vec()
}

#[test]
fn test_cascade_reprojects_from_new_weight() {
    let mut plan = expanded_plan();
    let before = snapshot(&plan);
    // Wednesday, first Bench day
    let adjusted_on = NaiveDate::from_ymd_opt(2021, 1, 27).unwrap();

    plan.adjust_weight(adjusted_on, LiftName::Squat, 95.0, true)
        .unwrap();
    let after = snapshot(&plan);

    let cascaded: Vec<&ScheduleRow> = after
        .iter()
        .filter(|r| r.exercise_name == LiftName::Squat && r.date >= adjusted_on)
        .collect();
    assert_eq!(cascaded.len(), 7);
    for (k, row) in cascaded.iter().enumerate() {
        assert_eq!(row.weight, 95.0 + k as f64 * row.overload);
    }

    // Everything else is untouched
    for (old, new) in before.iter().zip(&after) {
        if !(new.exercise_name == LiftName::Squat && new.date >= adjusted_on) {
            assert_eq!(old, new);
        }
    }
}

#[test]
fn test_single_adjustment_changes_only_matching_rows() {
    let mut plan = expanded_plan();
    let before = snapshot(&plan);
    let adjusted_on = NaiveDate::from_ymd_opt(2021, 2, 3).unwrap();

    plan.adjust_weight(adjusted_on, LiftName::BenchPress, 77.5, false)
        .unwrap();
    let after = snapshot(&plan);

    let changed: Vec<usize> = before
        .iter()
        .zip(&after)
        .enumerate()
        .filter(|(_, (old, new))| old != new)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(changed.len(), 1);

    let row = &after[changed[0]];
    assert_eq!(row.exercise_name, LiftName::BenchPress);
    assert_eq!(row.date, adjusted_on);
    assert_eq!(row.weight, 77.5);
}

#[test]
fn test_adjustment_on_missing_date_is_noop() {
    let mut plan = expanded_plan();
    let before = snapshot(&plan);
    // A Tuesday, never a training day
    let missing = NaiveDate::from_ymd_opt(2021, 1, 26).unwrap();

    plan.adjust_weight(missing, LiftName::Squat, 50.0, false)
        .expect("Missing dates are not an error");

    assert_eq!(snapshot(&plan), before);
}

#[test]
fn test_cascade_after_last_date_is_noop() {
    let mut plan = expanded_plan();
    let before = snapshot(&plan);
    let later = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();

    plan.adjust_weight(later, LiftName::DeadLift, 200.0, true)
        .unwrap();

    assert_eq!(snapshot(&plan), before);
}

#[test]
fn test_non_finite_weight_rejected() {
    let mut plan = expanded_plan();
    let before = snapshot(&plan);
    let date = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();

    for weight in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        for cascade in [true, false] {
            let result = plan.adjust_weight(date, LiftName::Squat, weight, cascade);
            assert!(matches!(result, Err(PlanError::InvalidConfiguration(_))));
        }
    }

    assert_eq!(snapshot(&plan), before);
}

#[test]
fn test_adjustment_before_expansion_fails() {
    let mut plan =
        TrainingPlan::from_presets(Paradigm::StartingStrength, &Presets::default()).unwrap();

    let result = plan.adjust_weight(
        NaiveDate::from_ymd_opt(2021, 1, 22).unwrap(),
        LiftName::Squat,
        100.0,
        true,
    );
    assert!(matches!(result, Err(PlanError::InvalidReference(_))));
}
