//! Task ranking by priority score.

use chrono::NaiveDateTime;

use crate::scoring::priority_score;
use crate::task::Task;

/// Tasks paired with their score, highest first.
///
/// The sort is stable: tasks with exactly equal scores keep their input
/// order. Completed tasks are ranked like any other.
pub fn rank_scored<'a, I>(tasks: I, reference: NaiveDateTime) -> Vec<(f64, &'a Task)>
where
    I: IntoIterator<Item = &'a Task>,
{
    let mut scored: Vec<(f64, &Task)> = tasks
        .into_iter()
        .map(|t| (priority_score(t, reference), t))
        .collect();

    // score desc
    scored.sort_by(|a, b| b.0.total_cmp(&a.0));
    scored
}

pub fn rank_tasks<'a, I>(tasks: I, reference: NaiveDateTime) -> Vec<&'a Task>
where
    I: IntoIterator<Item = &'a Task>,
{
    rank_scored(tasks, reference)
        .into_iter()
        .map(|(_, t)| t)
        .collect()
}
