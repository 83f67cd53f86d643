//! Reminder levels for open tasks, by time left until due.

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::task::Task;
use crate::time::hours_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderLevel {
    High,
    Medium,
    Low,
    Info,
}

impl ReminderLevel {
    /// Suggested nudge cadence.
    pub fn cadence(&self) -> &'static str {
        match self {
            ReminderLevel::High => "every 30-60 min",
            ReminderLevel::Medium => "every 2-3 hours",
            ReminderLevel::Low => "daily",
            ReminderLevel::Info => "every few days",
        }
    }
}

impl fmt::Display for ReminderLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ReminderLevel::High => "HIGH",
            ReminderLevel::Medium => "MEDIUM",
            ReminderLevel::Low => "LOW",
            ReminderLevel::Info => "INFO",
        };
        write!(f, "{label} ({})", self.cadence())
    }
}

/// Upper bounds (hours left, inclusive) for each level.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReminderPolicy {
    pub high_hours: f64,
    pub medium_hours: f64,
    pub low_hours: f64,
}

impl Default for ReminderPolicy {
    fn default() -> Self {
        Self {
            high_hours: 6.0,
            medium_hours: 24.0,
            low_hours: 72.0,
        }
    }
}

impl ReminderPolicy {
    pub fn level(&self, hours_left: f64) -> ReminderLevel {
        if hours_left <= self.high_hours {
            ReminderLevel::High
        } else if hours_left <= self.medium_hours {
            ReminderLevel::Medium
        } else if hours_left <= self.low_hours {
            ReminderLevel::Low
        } else {
            ReminderLevel::Info
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reminder {
    pub task_id: String,
    pub title: String,
    pub level: ReminderLevel,
    pub hours_left: f64,
    pub remaining_minutes: i64,
}

impl fmt::Display for Reminder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | due in {:.1}h | remaining {}min",
            self.level, self.title, self.hours_left, self.remaining_minutes
        )
    }
}

/// One reminder per open task, in the order given.
pub fn generate_reminders(
    ranked: &[&Task],
    reference: NaiveDateTime,
    policy: &ReminderPolicy,
) -> Vec<Reminder> {
    ranked
        .iter()
        .filter(|t| !t.is_complete())
        .map(|t| {
            let hours_left = hours_between(reference, t.due);
            Reminder {
                task_id: t.id.clone(),
                title: t.title.clone(),
                level: policy.level(hours_left),
                hours_left,
                remaining_minutes: t.remaining_minutes,
            }
        })
        .collect()
}
