//! Session allocator: greedy slot filling.
//!
//! Algorithm (deterministic, single pass):
//! 1) walk free intervals in the order given, starting each at
//!    max(interval start, reference)
//! 2) pick the highest-ranked task that still has minutes left
//! 3) study min(chunk, remaining, time left in interval); drop anything
//!    shorter than the minimum session
//! 4) insert a break after every session and continue
//!
//! Lower-ranked tasks get nothing if higher-ranked ones use up the intervals.

use std::collections::HashMap;

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::plan::{Plan, StudySession};
use crate::task::Task;
use crate::time::{FreeInterval, whole_minutes_between};

/// Upper bound for every allocator setting: one day.
pub const MAX_CONFIG_MINUTES: i64 = 24 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AllocatorConfig {
    /// Longest single session (minutes).
    pub chunk_minutes: i64,
    /// Rest inserted after every session (minutes).
    pub break_minutes: i64,
    /// Shortest session worth scheduling (minutes).
    pub min_session_minutes: i64,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            chunk_minutes: 50,
            break_minutes: 10,
            min_session_minutes: 15,
        }
    }
}

impl AllocatorConfig {
    /// Chunk and minimum session in `1..=MAX_CONFIG_MINUTES`, break in
    /// `0..=MAX_CONFIG_MINUTES`.
    pub fn validate(&self) -> Result<()> {
        let fields = [
            ("chunk_minutes", self.chunk_minutes, 1),
            ("min_session_minutes", self.min_session_minutes, 1),
            ("break_minutes", self.break_minutes, 0),
        ];
        for (what, minutes, min) in fields {
            if !(min..=MAX_CONFIG_MINUTES).contains(&minutes) {
                return Err(PlanError::duration(what, minutes));
            }
        }
        Ok(())
    }
}

/// Fill `intervals` with sessions for `ranked` tasks, highest rank first.
///
/// Caller order is authoritative for both tasks and intervals. Tasks with no
/// remaining minutes are skipped.
pub fn allocate(
    ranked: &[&Task],
    intervals: &[FreeInterval],
    reference: NaiveDateTime,
    config: &AllocatorConfig,
) -> Plan {
    // Zero-length sessions would never advance the cursor without a break.
    let min_session = config.min_session_minutes.max(1);

    let mut remaining: HashMap<&str, i64> = ranked
        .iter()
        .map(|t| (t.id.as_str(), t.remaining_minutes))
        .collect();

    let mut sessions = Vec::new();

    'intervals: for interval in intervals {
        let end = interval.end();
        let mut cursor = interval.clipped_start(reference);

        while cursor < end {
            let Some(pick) = ranked
                .iter()
                .copied()
                .find(|t| remaining.get(t.id.as_str()).copied().unwrap_or(0) > 0)
            else {
                // Nothing left to place anywhere.
                break 'intervals;
            };

            let available = whole_minutes_between(cursor, end);
            if available < min_session {
                break;
            }

            let left = remaining.get(pick.id.as_str()).copied().unwrap_or(0);
            let study = config.chunk_minutes.min(left).min(available);
            if study < min_session {
                break;
            }

            let Some(session_end) = advance(cursor, study) else {
                break;
            };
            sessions.push(StudySession::for_task(pick, cursor, session_end));

            if let Some(left) = remaining.get_mut(pick.id.as_str()) {
                *left -= study;
            }
            // A break past the representable range ends the interval.
            match advance(session_end, config.break_minutes) {
                Some(next) => cursor = next,
                None => break,
            }
        }
    }

    Plan {
        generated_at: reference,
        sessions,
    }
}

fn advance(from: NaiveDateTime, minutes: i64) -> Option<NaiveDateTime> {
    from.checked_add_signed(Duration::try_minutes(minutes)?)
}
