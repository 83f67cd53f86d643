//! JSON planner input.
//!
//! Expected shape:
//! {
//!   "tasks": [{"id": "A1", "title": "...", "due": "2026-01-05T23:59:00",
//!              "est_minutes": 300, "importance": 5}],
//!   "free_slots": [{"start": "2026-01-02T20:00:00", "end": "2026-01-02T23:00:00"}]
//! }

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::types::{PlannerInput, SlotRecord, TaskRecord};

pub fn parse_input_json(text: &str) -> Result<PlannerInput> {
    let input: PlannerInput = serde_json::from_str(text).context("parse planner input JSON")?;
    tracing::debug!(
        tasks = input.tasks.len(),
        free_slots = input.free_slots.len(),
        "planner input parsed"
    );
    Ok(input)
}

pub fn load_input_file(path: impl AsRef<Path>) -> Result<PlannerInput> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    parse_input_json(&text).with_context(|| format!("load {}", path.display()))
}

/// Built-in sample used when no input file is given.
pub fn demo_input() -> PlannerInput {
    let task = |id: &str, title: &str, due: &str, est: i64, importance: i32| TaskRecord {
        id: id.to_string(),
        title: title.to_string(),
        due: due.to_string(),
        est_minutes: est,
        remaining_minutes: None,
        importance: Some(importance),
        subject: None,
    };
    let slot = |start: &str, end: &str| SlotRecord {
        start: start.to_string(),
        end: end.to_string(),
    };

    PlannerInput {
        tasks: vec![
            task("A1", "NLP Assignment", "2026-01-05T23:59:00", 300, 5),
            task("Q1", "Quiz Revision", "2026-01-04T18:00:00", 120, 4),
        ],
        free_slots: vec![
            slot("2026-01-02T20:00:00", "2026-01-02T23:00:00"),
            slot("2026-01-03T14:00:00", "2026-01-03T18:00:00"),
        ],
    }
}
