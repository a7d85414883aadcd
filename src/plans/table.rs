//! Plain-text rendering of a schedule table.

use super::types::ScheduleRow;

const HEADER: [&str; 13] = [
    "", "date", "id", "name", "tag", "cycle", "weight", "reps", "sets", "rest", "superset",
    "overload", "Note",
];

/// Render `rows` as a right-aligned text table with a leading row index.
pub fn render_table(rows: &[ScheduleRow]) -> String {
    let mut cells: Vec<Vec<String>> = Vec::with_capacity(rows.len() + 1);
    cells.push(HEADER.iter().map(|h| h.to_string()).collect());

    for (index, row) in rows.iter().enumerate() {
        cells.push(vec![
            index.to_string(),
            row.date.to_string(),
            row.workout_id.clone(),
            row.exercise_name.to_string(),
            row.tag.clone(),
            row.cycle.to_string(),
            format!("{:.1}", row.weight),
            row.reps.to_string(),
            row.sets.to_string(),
            row.rest.to_string(),
            row.superset.to_string(),
            format!("{:.1}", row.overload),
            row.note.clone().unwrap_or_else(|| "-".to_string()),
        ]);
    }

    let columns = cells[0].len();
    let widths: Vec<usize> = (0..columns)
        .map(|c| cells.iter().map(|r| r[c].chars().count()).max().unwrap_or(0))
        .collect();

    let mut output = String::new();
    for row in &cells {
        let line = row
            .iter()
            .zip(&widths)
            .map(|(cell, width)| format!("{:>width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ");
        output.push_str(line.trim_end());
        output.push('\n');
    }
    output.push_str(&format!("\n[{} rows x {} columns]", rows.len(), columns - 1));
    output
}
