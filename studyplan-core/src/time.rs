//! Time utilities: free intervals and whole-minute arithmetic.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Fractional hours from `from` to `to`; negative when `to` is earlier.
pub fn hours_between(from: NaiveDateTime, to: NaiveDateTime) -> f64 {
    let millis = (to - from).num_milliseconds();
    (millis as f64) / 3_600_000.0
}

/// Whole minutes from `from` to `to`, rounded down. Never negative.
pub fn whole_minutes_between(from: NaiveDateTime, to: NaiveDateTime) -> i64 {
    (to - from).num_seconds().max(0) / 60
}

/// A window of free time. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct FreeInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

#[derive(Deserialize)]
struct RawInterval {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TryFrom<RawInterval> for FreeInterval {
    type Error = PlanError;

    fn try_from(raw: RawInterval) -> Result<Self, Self::Error> {
        FreeInterval::new(raw.start, raw.end)
    }
}

impl FreeInterval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, PlanError> {
        if end <= start {
            return Err(PlanError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn minutes(&self) -> i64 {
        whole_minutes_between(self.start, self.end)
    }

    /// First instant usable at `reference`: the past is never scheduled.
    pub fn clipped_start(&self, reference: NaiveDateTime) -> NaiveDateTime {
        self.start.max(reference)
    }

    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at <= self.end
    }
}
