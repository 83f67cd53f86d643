use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use studyplan_core::task::DEFAULT_IMPORTANCE;
use studyplan_core::{FreeInterval, Task};

use crate::time::parse_local_timestamp;

/// Raw task as it appears in planner input files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskRecord {
    pub id: String,
    pub title: String,
    /// ISO-8601 local timestamp.
    pub due: String,
    #[serde(alias = "estimated_minutes")]
    pub est_minutes: i64,
    /// Defaults to `est_minutes`.
    #[serde(default)]
    pub remaining_minutes: Option<i64>,
    /// Defaults to 3.
    #[serde(default)]
    pub importance: Option<i32>,
    #[serde(default)]
    pub subject: Option<String>,
}

impl TaskRecord {
    /// Parse and validate into a core task.
    pub fn into_task(self) -> Result<Task> {
        let due = parse_local_timestamp(&self.due)
            .with_context(|| format!("due date of task {}", self.id))?;

        let mut task = Task::new(self.id, self.title, due, self.est_minutes)
            .with_remaining(self.remaining_minutes.unwrap_or(self.est_minutes))
            .with_importance(self.importance.unwrap_or(DEFAULT_IMPORTANCE));
        task.subject = self.subject;

        task.validate()?;
        Ok(task)
    }
}

/// Raw free slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotRecord {
    pub start: String,
    pub end: String,
}

impl SlotRecord {
    pub fn into_interval(self) -> Result<FreeInterval> {
        let start = parse_local_timestamp(&self.start).context("slot start")?;
        let end = parse_local_timestamp(&self.end).context("slot end")?;
        Ok(FreeInterval::new(start, end)?)
    }
}

/// Top-level planner input document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlannerInput {
    #[serde(default)]
    pub tasks: Vec<TaskRecord>,
    #[serde(default)]
    pub free_slots: Vec<SlotRecord>,
}

impl PlannerInput {
    /// Convert every task record; fails on the first bad record.
    pub fn tasks(&self) -> Result<Vec<Task>> {
        self.tasks
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.clone()
                    .into_task()
                    .with_context(|| format!("task record #{i} ({})", r.id))
            })
            .collect()
    }

    /// Convert every slot record; fails on the first bad record.
    pub fn intervals(&self) -> Result<Vec<FreeInterval>> {
        self.free_slots
            .iter()
            .enumerate()
            .map(|(i, r)| {
                r.clone()
                    .into_interval()
                    .with_context(|| format!("free slot #{i}"))
            })
            .collect()
    }
}
