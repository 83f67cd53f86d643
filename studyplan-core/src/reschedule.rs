//! Progress updates and rescheduling.
//!
//! Progress never triggers a reschedule on its own; callers that want the
//! plan to reflect new remaining minutes call [`reschedule`] afterwards.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::plan::Plan;
use crate::state::PlanningState;

/// Outcome of a progress update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressUpdate {
    pub task_id: String,
    pub before: i64,
    pub after: i64,
}

impl ProgressUpdate {
    pub fn completed(&self) -> bool {
        self.after == 0
    }
}

/// Subtract `minutes_done` from a task's remaining minutes, floored at zero.
///
/// Negative minutes are rejected rather than growing the workload.
pub fn apply_progress(
    state: &mut PlanningState,
    task_id: &str,
    minutes_done: i64,
) -> Result<ProgressUpdate> {
    if minutes_done < 0 {
        return Err(PlanError::duration(
            format!("progress on task {task_id}"),
            minutes_done,
        ));
    }

    let task = state.task_mut(task_id)?;
    let before = task.remaining_minutes;
    task.remaining_minutes = (before - minutes_done).max(0);

    Ok(ProgressUpdate {
        task_id: task_id.to_string(),
        before,
        after: task.remaining_minutes,
    })
}

/// Re-rank over current remaining minutes, reallocate over the current
/// intervals and replace the stored plan.
pub fn reschedule(state: &mut PlanningState, reference: NaiveDateTime) -> &Plan {
    state.build_plan(reference)
}
