//! JSON persistence for generated schedules.
//!
//! Plans are stored as a UTF-8 JSON array with one object per schedule row,
//! indented with four spaces. Non-ASCII text is written as-is.

use serde::Serialize;
use std::path::Path;

use crate::plans::types::{PlanError, ScheduleRow};

/// Encode rows as a pretty-printed JSON array.
pub fn to_json(rows: &[ScheduleRow]) -> Result<String, PlanError> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    rows.serialize(&mut serializer)?;

    // serde_json only emits valid UTF-8
    Ok(String::from_utf8_lossy(&buffer).into_owned())
}

/// Decode rows from a JSON array.
pub fn from_json(content: &str) -> Result<Vec<ScheduleRow>, PlanError> {
    Ok(serde_json::from_str(content)?)
}

/// Write `rows` to `path`, creating parent directories as needed.
pub fn save_plan(path: &Path, rows: &[ScheduleRow]) -> Result<(), PlanError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    std::fs::write(path, to_json(rows)?)?;

    tracing::info!("Saved {} plan rows to {}", rows.len(), path.display());
    Ok(())
}

/// Read the rows stored at `path`.
pub fn load_plan(path: &Path) -> Result<Vec<ScheduleRow>, PlanError> {
    let content = std::fs::read_to_string(path)?;
    let rows = from_json(&content)?;

    tracing::info!("Loaded {} plan rows from {}", rows.len(), path.display());
    Ok(rows)
}
