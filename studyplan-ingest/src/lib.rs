//! studyplan-ingest: planner input records, JSON loading, and local timestamp handling.

pub mod json;
pub mod time;
pub mod types;

pub use json::{demo_input, load_input_file, parse_input_json};
pub use time::{format_local, now_in_timezone, parse_local_timestamp};
pub use types::{PlannerInput, SlotRecord, TaskRecord};
