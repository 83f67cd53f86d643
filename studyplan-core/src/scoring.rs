//! Priority scoring for study tasks.
//!
//! Higher score = study first. Factors, from coarsest to finest:
//! - Urgency: inverse hours until due, capped for overdue tasks (x100)
//! - Importance: 1..=5 (x10)
//! - Workload: remaining hours (x1)

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::time::hours_between;

/// Urgency assigned once a task is due or overdue.
pub const OVERDUE_URGENCY: f64 = 9999.0;
pub const URGENCY_WEIGHT: f64 = 100.0;
pub const IMPORTANCE_WEIGHT: f64 = 10.0;
pub const MINUTES_PER_WORKLOAD_UNIT: f64 = 60.0;

/// Per-factor contributions to a task's score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub hours_left: f64,
    pub urgency: f64,
    pub importance: f64,
    pub workload: f64,
    pub total: f64,
}

/// Urgency for a task due in `hours_left` hours.
pub fn urgency(hours_left: f64) -> f64 {
    if hours_left <= 0.0 {
        OVERDUE_URGENCY
    } else {
        1.0 / hours_left
    }
}

pub fn score_breakdown(task: &Task, reference: NaiveDateTime) -> ScoreBreakdown {
    let hours_left = hours_between(reference, task.due);
    let urgency = urgency(hours_left) * URGENCY_WEIGHT;
    let importance = f64::from(task.importance) * IMPORTANCE_WEIGHT;
    let workload = (task.remaining_minutes as f64) / MINUTES_PER_WORKLOAD_UNIT;

    ScoreBreakdown {
        hours_left,
        urgency,
        importance,
        workload,
        total: urgency + importance + workload,
    }
}

/// Priority score of `task` at `reference`. Completed tasks are scored too;
/// filtering them is up to the caller.
pub fn priority_score(task: &Task, reference: NaiveDateTime) -> f64 {
    score_breakdown(task, reference).total
}
