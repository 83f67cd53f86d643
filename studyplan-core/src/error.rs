//! Planning errors.

use chrono::NaiveDateTime;
use thiserror::Error;

/// Errors raised by loads, lookups and progress updates.
///
/// Every operation validates before it mutates, so an `Err` means the
/// planning state is exactly as it was before the call.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PlanError {
    #[error("task not found: {0}")]
    NotFound(String),

    #[error("invalid interval: end {end} is not after start {start}")]
    InvalidInterval {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    #[error("invalid importance {importance} for task {task_id} (expected 1..=5)")]
    InvalidImportance { task_id: String, importance: i32 },

    #[error("invalid duration for {what}: {minutes} min")]
    InvalidDuration { what: String, minutes: i64 },
}

impl PlanError {
    pub(crate) fn duration(what: impl Into<String>, minutes: i64) -> Self {
        Self::InvalidDuration {
            what: what.into(),
            minutes,
        }
    }
}

pub type Result<T, E = PlanError> = std::result::Result<T, E>;
