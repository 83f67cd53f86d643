//! Local timestamp parsing and formatting.
//!
//! Input timestamps are ISO-8601 local wall-clock times without an offset,
//! e.g. "2026-01-05T23:59:00". The planner never converts between zones; the
//! only zone-aware operation is reading "now".

use anyhow::{Result, anyhow};
use chrono::{NaiveDateTime, Utc};
use chrono_tz::Tz;

const LOCAL_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Parse "YYYY-MM-DDTHH:MM[:SS[.fff]]" (a space works in place of `T`).
pub fn parse_local_timestamp(s: &str) -> Result<NaiveDateTime> {
    let s = s.trim();
    LOCAL_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .ok_or_else(|| anyhow!("invalid local timestamp '{s}' (expected YYYY-MM-DDTHH:MM[:SS])"))
}

/// Format for display: "2026-01-05 23:59".
pub fn format_local(dt: NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M").to_string()
}

/// Current wall-clock time in an IANA zone like "America/Chicago".
pub fn now_in_timezone(tz: &str) -> Result<NaiveDateTime> {
    let zone: Tz = tz
        .parse()
        .map_err(|_| anyhow!("invalid timezone: {tz}"))?;
    Ok(Utc::now().with_timezone(&zone).naive_local())
}
