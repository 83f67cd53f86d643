//! Study planner: orchestration over the planning state.
//!
//! Runs the fixed sequence load → rank → allocate → [progress] → [reschedule]
//! and keeps an activity log of what happened. The scoring, ranking and
//! allocation functions stay pure; logging happens only here.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::allocator::AllocatorConfig;
use crate::error::Result;
use crate::plan::Plan;
use crate::ranking::rank_scored;
use crate::reminders::{Reminder, ReminderPolicy, generate_reminders};
use crate::reschedule::{ProgressUpdate, apply_progress, reschedule};
use crate::state::PlanningState;
use crate::task::Task;
use crate::time::FreeInterval;

/// Ordered, append-only record of planner activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityLog {
    entries: Vec<String>,
}

impl ActivityLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::info!(target: "studyplan::activity", "{message}");
        self.entries.push(message);
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// A task snapshot at its position in a ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedTask {
    /// 1-based.
    pub rank: usize,
    pub score: f64,
    pub task: Task,
}

/// Inputs for one pass of [`StudyPlanner::run`].
#[derive(Debug, Clone)]
pub struct PlanningCycle {
    pub tasks: Vec<Task>,
    pub intervals: Vec<FreeInterval>,
    pub reference: NaiveDateTime,
    /// `(task_id, minutes_done)`; ignored unless minutes are positive.
    pub progress: Option<(String, i64)>,
    pub reschedule: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanningOutcome {
    pub ranked: Vec<RankedTask>,
    pub plan: Plan,
    pub reminders: Vec<Reminder>,
    pub progress: Option<ProgressUpdate>,
}

#[derive(Debug, Clone, Default)]
pub struct StudyPlanner {
    state: PlanningState,
    log: ActivityLog,
    reminder_policy: ReminderPolicy,
}

impl StudyPlanner {
    pub fn new(config: AllocatorConfig, reminder_policy: ReminderPolicy) -> Result<Self> {
        Ok(Self {
            state: PlanningState::with_config(config)?,
            log: ActivityLog::new(),
            reminder_policy,
        })
    }

    pub fn state(&self) -> &PlanningState {
        &self.state
    }

    pub fn log(&self) -> &ActivityLog {
        &self.log
    }

    pub fn load_tasks(&mut self, tasks: Vec<Task>) -> Result<usize> {
        let n = self.state.load_tasks(tasks)?;
        self.log.record(format!("Loaded tasks: {n}"));
        Ok(n)
    }

    pub fn load_intervals(&mut self, intervals: Vec<FreeInterval>) -> usize {
        let n = self.state.load_intervals(intervals);
        self.log.record(format!("Loaded free slots: {n}"));
        n
    }

    pub fn rank(&mut self, reference: NaiveDateTime) -> Vec<RankedTask> {
        let ranked: Vec<RankedTask> = rank_scored(self.state.tasks(), reference)
            .into_iter()
            .enumerate()
            .map(|(i, (score, task))| RankedTask {
                rank: i + 1,
                score,
                task: task.clone(),
            })
            .collect();
        self.log.record("Ranked tasks by priority score");
        ranked
    }

    pub fn build_plan(&mut self, reference: NaiveDateTime) -> Plan {
        let plan = self.state.build_plan(reference).clone();
        self.log
            .record(format!("Generated plan with {} sessions", plan.len()));
        plan
    }

    pub fn mark_progress(&mut self, task_id: &str, minutes_done: i64) -> Result<ProgressUpdate> {
        let update = apply_progress(&mut self.state, task_id, minutes_done)?;
        self.log
            .record(format!("Progress updated: {task_id} -{minutes_done} min"));
        Ok(update)
    }

    pub fn reschedule(&mut self, reference: NaiveDateTime) -> Plan {
        self.log.record("Ranked tasks by priority score");
        let plan = reschedule(&mut self.state, reference).clone();
        self.log
            .record(format!("Generated plan with {} sessions", plan.len()));
        self.log.record("Rescheduling completed");
        plan
    }

    pub fn reminders(&self, reference: NaiveDateTime) -> Vec<Reminder> {
        let ranked = self.state.ranked(reference);
        generate_reminders(&ranked, reference, &self.reminder_policy)
    }

    /// One full planning pass.
    ///
    /// Not all-or-nothing: each step commits on its own, so if the progress
    /// update fails the loaded tasks, intervals and first plan stay in place.
    pub fn run(&mut self, cycle: PlanningCycle) -> Result<PlanningOutcome> {
        let PlanningCycle {
            tasks,
            intervals,
            reference,
            progress,
            reschedule,
        } = cycle;

        self.load_tasks(tasks)?;
        self.load_intervals(intervals);

        let mut ranked = self.rank(reference);
        let mut plan = self.build_plan(reference);

        let mut update = None;
        if let Some((task_id, minutes)) = progress.filter(|(_, m)| *m > 0) {
            update = Some(self.mark_progress(&task_id, minutes)?);
            if reschedule {
                plan = self.reschedule(reference);
                ranked = self.rank(reference);
            }
        }

        let reminders = self.reminders(reference);

        Ok(PlanningOutcome {
            ranked,
            plan,
            reminders,
            progress: update,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PlanError;
    use chrono::NaiveDate;

    fn at(d: u32, h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, d)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn demo_cycle() -> PlanningCycle {
        PlanningCycle {
            tasks: vec![
                Task::new("A1", "NLP Assignment", at(5, 23, 59), 300).with_importance(5),
                Task::new("Q1", "Quiz Revision", at(4, 18, 0), 120).with_importance(4),
            ],
            intervals: vec![
                FreeInterval::new(at(2, 20, 0), at(2, 23, 0)).unwrap(),
                FreeInterval::new(at(3, 14, 0), at(3, 18, 0)).unwrap(),
            ],
            reference: at(2, 12, 0),
            progress: None,
            reschedule: false,
        }
    }

    #[test]
    fn run_plans_in_rank_order() {
        let mut p = StudyPlanner::default();
        let out = p.run(demo_cycle()).unwrap();

        // Importance outweighs the quiz's earlier deadline: ~56.2 vs ~43.9.
        let ids: Vec<&str> = out.ranked.iter().map(|r| r.task.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "Q1"]);
        assert_eq!(out.ranked[0].rank, 1);

        assert_eq!(out.plan.minutes_for("A1"), 300);
        assert_eq!(out.plan.minutes_for("Q1"), 50);
        assert_eq!(out.reminders.len(), 2);
        assert!(out.progress.is_none());

        assert_eq!(
            p.log().entries(),
            &[
                "Loaded tasks: 2",
                "Loaded free slots: 2",
                "Ranked tasks by priority score",
                "Generated plan with 7 sessions",
            ]
        );
    }

    #[test]
    fn run_with_progress_and_reschedule() {
        let mut p = StudyPlanner::default();
        let mut cycle = demo_cycle();
        cycle.progress = Some(("A1".to_string(), 120));
        cycle.reschedule = true;

        let out = p.run(cycle).unwrap();
        let update = out.progress.unwrap();
        assert_eq!((update.before, update.after), (300, 180));
        assert_eq!(out.plan.minutes_for("A1"), 180);
        assert_eq!(out.plan.minutes_for("Q1"), 120);
        assert!(p.log().entries().iter().any(|e| e == "Rescheduling completed"));
        assert_eq!(p.state().plan(), Some(&out.plan));
    }

    #[test]
    fn progress_without_reschedule_keeps_old_plan() {
        let mut p = StudyPlanner::default();
        let mut cycle = demo_cycle();
        cycle.progress = Some(("A1".to_string(), 120));

        let out = p.run(cycle).unwrap();
        assert_eq!(out.plan.minutes_for("A1"), 300);
        assert_eq!(p.state().task("A1").unwrap().remaining_minutes, 180);
    }

    #[test]
    fn zero_progress_is_ignored() {
        let mut p = StudyPlanner::default();
        let mut cycle = demo_cycle();
        cycle.progress = Some(("missing".to_string(), 0));
        let out = p.run(cycle).unwrap();
        assert!(out.progress.is_none());
    }

    #[test]
    fn unknown_progress_task_fails() {
        let mut p = StudyPlanner::default();
        let mut cycle = demo_cycle();
        cycle.progress = Some(("missing".to_string(), 30));
        assert_eq!(p.run(cycle), Err(PlanError::NotFound("missing".into())));
    }

    #[test]
    fn failed_progress_keeps_earlier_steps() {
        let mut p = StudyPlanner::default();
        let mut cycle = demo_cycle();
        cycle.progress = Some(("missing".to_string(), 30));
        cycle.reschedule = true;

        assert!(p.run(cycle).is_err());
        assert_eq!(p.state().tasks().len(), 2);
        assert_eq!(p.state().intervals().len(), 2);
        assert_eq!(p.state().plan().map(|plan| plan.len()), Some(7));
        assert_eq!(p.state().task("A1").unwrap().remaining_minutes, 300);
        assert!(!p.log().entries().iter().any(|e| e == "Rescheduling completed"));
    }

    #[test]
    fn reminders_follow_current_ranking() {
        let mut p = StudyPlanner::default();
        let out = p.run(demo_cycle()).unwrap();
        let ids: Vec<&str> = out.reminders.iter().map(|r| r.task_id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "Q1"]);
        assert_eq!(p.reminders(demo_cycle().reference), out.reminders);
    }
}
