//! Task model for the study planner.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

pub const DEFAULT_IMPORTANCE: i32 = 3;
pub const MIN_IMPORTANCE: i32 = 1;
pub const MAX_IMPORTANCE: i32 = 5;

/// A unit of coursework competing for study time.
///
/// `remaining_minutes` is the only field that changes after loading; it is
/// floored at zero and a task with nothing remaining is complete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,

    /// Local wall-clock deadline.
    pub due: NaiveDateTime,

    /// Minutes, as estimated when the task was created.
    pub estimated_minutes: i64,

    /// Minutes still to do.
    pub remaining_minutes: i64,

    /// 1-5, higher means more important.
    pub importance: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
}

impl Task {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        due: NaiveDateTime,
        estimated_minutes: i64,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            due,
            estimated_minutes,
            remaining_minutes: estimated_minutes,
            importance: DEFAULT_IMPORTANCE,
            subject: None,
        }
    }

    pub fn with_remaining(mut self, minutes: i64) -> Self {
        self.remaining_minutes = minutes;
        self
    }

    pub fn with_importance(mut self, importance: i32) -> Self {
        self.importance = importance;
        self
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }

    pub fn is_complete(&self) -> bool {
        self.remaining_minutes <= 0
    }

    /// Load-time checks. Remaining may exceed the estimate.
    pub fn validate(&self) -> Result<()> {
        if self.estimated_minutes <= 0 {
            return Err(PlanError::duration(
                format!("estimated minutes of task {}", self.id),
                self.estimated_minutes,
            ));
        }
        if self.remaining_minutes < 0 {
            return Err(PlanError::duration(
                format!("remaining minutes of task {}", self.id),
                self.remaining_minutes,
            ));
        }
        if !(MIN_IMPORTANCE..=MAX_IMPORTANCE).contains(&self.importance) {
            return Err(PlanError::InvalidImportance {
                task_id: self.id.clone(),
                importance: self.importance,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn due() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(23, 59, 0)
            .unwrap()
    }

    #[test]
    fn new_defaults_remaining_and_importance() {
        let t = Task::new("A1", "NLP Assignment", due(), 300);
        assert_eq!(t.remaining_minutes, 300);
        assert_eq!(t.importance, DEFAULT_IMPORTANCE);
        assert!(t.subject.is_none());
        assert!(t.validate().is_ok());
    }

    #[test]
    fn rejects_non_positive_estimate() {
        let t = Task::new("x", "zero", due(), 0);
        assert!(matches!(
            t.validate(),
            Err(PlanError::InvalidDuration { minutes: 0, .. })
        ));
    }

    #[test]
    fn rejects_negative_remaining() {
        let t = Task::new("x", "neg", due(), 60).with_remaining(-5);
        assert!(matches!(t.validate(), Err(PlanError::InvalidDuration { .. })));
    }

    #[test]
    fn remaining_may_exceed_estimate() {
        let t = Task::new("x", "overrun", due(), 60).with_remaining(90);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn importance_bounds() {
        for bad in [0, 6, -1] {
            let t = Task::new("x", "t", due(), 60).with_importance(bad);
            assert_eq!(
                t.validate(),
                Err(PlanError::InvalidImportance {
                    task_id: "x".into(),
                    importance: bad
                })
            );
        }
        for ok in MIN_IMPORTANCE..=MAX_IMPORTANCE {
            assert!(Task::new("x", "t", due(), 60).with_importance(ok).validate().is_ok());
        }
    }

    #[test]
    fn completion_follows_remaining() {
        let t = Task::new("x", "t", due(), 60).with_remaining(0);
        assert!(t.is_complete());
        assert!(!t.with_remaining(1).is_complete());
    }
}
