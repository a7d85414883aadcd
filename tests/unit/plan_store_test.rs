//! Unit tests for plan persistence.

use chrono::{NaiveDate, Weekday};
use strength_plan::plans::{Paradigm, TrainingDays, TrainingPlan};
use strength_plan::storage::config::{Presets, DEFAULT_PLAN_PATH};
use strength_plan::storage::plan_store::{from_json, load_plan, to_json};
use strength_plan::workouts::{Exercise, LiftName, Workout};
use tempfile::TempDir;

fn expanded_plan() -> TrainingPlan {
    let mut plan =
        TrainingPlan::from_presets(Paradigm::StartingStrength, &Presets::default()).unwrap();
    plan.expand(NaiveDate::from_ymd_opt(2021, 1, 22).unwrap(), 4)
        .unwrap();
    plan
}

#[test]
fn test_round_trip_preserves_rows() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(DEFAULT_PLAN_PATH);

    let mut plan = expanded_plan();
    plan.adjust_weight(
        NaiveDate::from_ymd_opt(2021, 2, 1).unwrap(),
        LiftName::ShoulderPress,
        52.3,
        true,
    )
    .unwrap();
    plan.adjust_weight(
        NaiveDate::from_ymd_opt(2021, 1, 27).unwrap(),
        LiftName::Row,
        70.1,
        true,
    )
    .unwrap();
    plan.save_training(&path).expect("Should save plan");

    let mut reloaded =
        TrainingPlan::from_presets(Paradigm::StartingStrength, &Presets::default()).unwrap();
    let rows = reloaded.load_training(&path).expect("Should load plan");

    assert_eq!(Some(rows), plan.training());
}

#[test]
fn test_round_trip_preserves_inexact_weights() {
    let presets = Presets::default();
    let start = NaiveDate::from_ymd_opt(2021, 1, 22).unwrap();

    for overload in [0.3, 1.1, 1.7, 2.2] {
        for step in 0..300u32 {
            let base = step as f64 * 0.1;
            let mut plan = TrainingPlan::new(
                Paradigm::StartingStrength,
                TrainingDays::new([Weekday::Mon, Weekday::Thu]),
            );
            plan.add_workout(Workout::with_exercises(
                "A",
                vec![
                    Exercise::new(LiftName::Squat, &presets)
                        .with_weight(base)
                        .with_overload(overload),
                    Exercise::new(LiftName::Row, &presets)
                        .with_weight(base * 0.7)
                        .with_overload(overload / 3.0),
                ],
            ));
            plan.add_workout(Workout::with_exercises(
                "B",
                vec![Exercise::new(LiftName::BenchPress, &presets)
                    .with_weight(base + 0.1)
                    .with_overload(overload)],
            ));

            let adjusted_on = plan.expand(start, 6).unwrap()[6].date;
            plan.adjust_weight(adjusted_on, LiftName::Squat, base + 1.3, true)
                .unwrap();
            plan.adjust_weight(adjusted_on, LiftName::Row, base * 0.9, false)
                .unwrap();

            let rows = plan.training().unwrap();
            let reloaded = from_json(&to_json(rows).unwrap()).unwrap();
            assert_eq!(reloaded, rows, "overload {overload}, base {base}");
        }
    }
}

#[test]
fn test_load_replaces_existing_schedule() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("short.json");

    let mut short = expanded_plan();
    short
        .expand(NaiveDate::from_ymd_opt(2021, 1, 22).unwrap(), 1)
        .unwrap();
    short.save_training(&path).unwrap();

    let mut plan = expanded_plan();
    assert_eq!(plan.training().map(<[_]>::len), Some(24));
    plan.load_training(&path).unwrap();
    assert_eq!(plan.training().map(<[_]>::len), Some(6));
}

#[test]
fn test_file_uses_expected_keys() {
    let plan = expanded_plan();
    let json = to_json(plan.training().unwrap()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let first = &value[0];
    for key in [
        "date", "id", "name", "tag", "cycle", "weight", "reps", "sets", "rest", "superset",
        "overload", "Note",
    ] {
        assert!(first.get(key).is_some(), "missing key {key}");
    }
    assert_eq!(first["date"], "2021-01-22T00:00:00");
    assert_eq!(first["id"], "Leg");
    assert_eq!(first["name"], "Squat");
}

#[test]
fn test_reads_epoch_millisecond_dates() {
    let json = r#"[
    {
        "date": 1611273600000,
        "id": "Leg",
        "name": "DeadLift",
        "tag": "main_lift",
        "cycle": 0,
        "weight": 120.0,
        "reps": 5,
        "sets": 3,
        "rest": 180,
        "superset": false,
        "overload": 5.0,
        "Note": null
    }
]"#;

    let rows = from_json(json).expect("Should read epoch dates");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].date, NaiveDate::from_ymd_opt(2021, 1, 22).unwrap());
    assert_eq!(rows[0].exercise_name, LiftName::DeadLift);
}

#[test]
fn test_load_plan_missing_file_errors() {
    let dir = TempDir::new().unwrap();
    assert!(load_plan(&dir.path().join("nope.json")).is_err());
}
