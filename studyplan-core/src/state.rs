//! Planning state: the task registry, free intervals and the latest plan.
//!
//! Single owner, no internal locking. Loads validate everything before
//! mutating, so a failed load leaves the state untouched.

use chrono::NaiveDateTime;

use crate::allocator::{AllocatorConfig, allocate};
use crate::error::{PlanError, Result};
use crate::plan::Plan;
use crate::ranking::rank_tasks;
use crate::registry::TaskRegistry;
use crate::task::Task;
use crate::time::FreeInterval;

#[derive(Debug, Default, Clone)]
pub struct PlanningState {
    tasks: TaskRegistry,
    intervals: Vec<FreeInterval>,
    plan: Option<Plan>,
    config: AllocatorConfig,
}

impl PlanningState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: AllocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::default()
        })
    }

    /// Bulk load. Tasks are upserted by id in the order given.
    pub fn load_tasks(&mut self, tasks: Vec<Task>) -> Result<usize> {
        for t in &tasks {
            t.validate()?;
        }
        let n = tasks.len();
        for t in tasks {
            self.tasks.upsert(t);
        }
        tracing::debug!(loaded = n, total = self.tasks.len(), "tasks loaded");
        Ok(n)
    }

    /// Replace the full interval list.
    pub fn load_intervals(&mut self, intervals: Vec<FreeInterval>) -> usize {
        self.intervals = intervals;
        tracing::debug!(count = self.intervals.len(), "free intervals replaced");
        self.intervals.len()
    }

    pub fn set_config(&mut self, config: AllocatorConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn tasks(&self) -> &TaskRegistry {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Result<&Task> {
        self.tasks
            .get(id)
            .ok_or_else(|| PlanError::NotFound(id.to_string()))
    }

    pub(crate) fn task_mut(&mut self, id: &str) -> Result<&mut Task> {
        self.tasks
            .get_mut(id)
            .ok_or_else(|| PlanError::NotFound(id.to_string()))
    }

    pub fn intervals(&self) -> &[FreeInterval] {
        &self.intervals
    }

    pub fn plan(&self) -> Option<&Plan> {
        self.plan.as_ref()
    }

    pub fn config(&self) -> &AllocatorConfig {
        &self.config
    }

    /// Ranked view of every task at `reference`. Read-only.
    pub fn ranked(&self, reference: NaiveDateTime) -> Vec<&Task> {
        rank_tasks(&self.tasks, reference)
    }

    /// Rank, allocate and store the resulting plan.
    pub fn build_plan(&mut self, reference: NaiveDateTime) -> &Plan {
        let plan = {
            let ranked = rank_tasks(&self.tasks, reference);
            allocate(&ranked, &self.intervals, reference, &self.config)
        };
        tracing::debug!(
            sessions = plan.len(),
            minutes = plan.total_minutes(),
            %reference,
            "plan built"
        );
        self.plan.insert(plan)
    }

    /// Minutes still owed across all incomplete tasks.
    pub fn pending_minutes(&self) -> i64 {
        self.tasks
            .iter()
            .filter(|t| !t.is_complete())
            .map(|t| t.remaining_minutes)
            .sum()
    }
}
