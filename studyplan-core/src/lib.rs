//! studyplan-core: priority scoring, ranking and greedy session allocation
//! for a study planner.

pub mod allocator;
pub mod error;
pub mod plan;
pub mod planner;
pub mod ranking;
pub mod registry;
pub mod reminders;
pub mod reschedule;
pub mod scoring;
pub mod state;
pub mod task;
pub mod time;

pub use allocator::{AllocatorConfig, allocate};
pub use error::{PlanError, Result};
pub use plan::{Plan, StudySession};
pub use planner::{ActivityLog, PlanningCycle, PlanningOutcome, RankedTask, StudyPlanner};
pub use ranking::{rank_scored, rank_tasks};
pub use registry::TaskRegistry;
pub use reminders::{Reminder, ReminderLevel, ReminderPolicy, generate_reminders};
pub use reschedule::{ProgressUpdate, apply_progress, reschedule};
pub use scoring::{ScoreBreakdown, priority_score, score_breakdown};
pub use state::PlanningState;
pub use task::Task;
pub use time::FreeInterval;
