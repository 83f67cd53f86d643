//! Study sessions and plans produced by the allocator.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::time::whole_minutes_between;

/// One block of study for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudySession {
    pub task_id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub minutes: i64,
}

impl StudySession {
    pub(crate) fn for_task(task: &Task, start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self {
            task_id: task.id.clone(),
            title: task.title.clone(),
            start,
            end,
            minutes: whole_minutes_between(start, end),
        }
    }

    pub fn overlaps(&self, other: &StudySession) -> bool {
        self.start < other.end && other.start < self.end
    }
}

/// Sessions in the order they were allocated, plus the instant the plan was
/// generated for. A plan is always regenerated whole.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    pub generated_at: NaiveDateTime,
    pub sessions: Vec<StudySession>,
}

impl Plan {
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn sessions_for<'a>(&'a self, task_id: &'a str) -> impl Iterator<Item = &'a StudySession> {
        self.sessions.iter().filter(move |s| s.task_id == task_id)
    }

    pub fn minutes_for(&self, task_id: &str) -> i64 {
        self.sessions_for(task_id).map(|s| s.minutes).sum()
    }

    pub fn total_minutes(&self) -> i64 {
        self.sessions.iter().map(|s| s.minutes).sum()
    }
}
