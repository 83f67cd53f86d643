//! Human-readable and JSON rendering of planner results.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use serde::Serialize;
use studyplan_core::{ActivityLog, Plan, PlanningOutcome, RankedTask, Reminder, ScoreBreakdown, Task};
use studyplan_ingest::format_local;

pub fn print_ranked(ranked: &[RankedTask]) {
    println!("\n=== Ranked Tasks ===");
    if ranked.is_empty() {
        println!("(No tasks)");
        return;
    }
    for r in ranked {
        let t = &r.task;
        println!(
            "{}. {} | due={} | importance={} | remaining={}min",
            r.rank,
            t.title,
            format_local(t.due),
            t.importance,
            t.remaining_minutes
        );
    }
}

pub fn print_explained(ranked: &[(ScoreBreakdown, &Task)]) {
    println!("\n=== Ranked Tasks (score breakdown) ===");
    for (i, (b, t)) in ranked.iter().enumerate() {
        println!(
            "{}. {} [{}] score={:.2} (urgency={:.2} importance={:.0} workload={:.2}) due in {:.1}h",
            i + 1,
            t.title,
            t.id,
            b.total,
            b.urgency,
            b.importance,
            b.workload,
            b.hours_left
        );
    }
}

pub fn print_plan(plan: &Plan) {
    println!("\n=== Study Plan ===");
    if plan.is_empty() {
        println!("(No sessions scheduled)");
        return;
    }
    for s in &plan.sessions {
        println!(
            "{} -> {} | {} ({} min)",
            format_local(s.start),
            format_local(s.end),
            s.title,
            s.minutes
        );
    }
    println!("Total: {} min across {} sessions", plan.total_minutes(), plan.len());
}

pub fn print_reminders(reminders: &[Reminder]) {
    println!("\n=== Reminders ===");
    if reminders.is_empty() {
        println!("(No reminders)");
        return;
    }
    for r in reminders {
        println!("{r}");
    }
}

pub fn print_log(log: &ActivityLog) {
    println!("\n=== Activity Log ===");
    for line in log.entries() {
        println!("- {line}");
    }
}

#[derive(Serialize)]
struct PlanReport<'a> {
    reference: NaiveDateTime,
    #[serde(flatten)]
    outcome: &'a PlanningOutcome,
    log: &'a [String],
}

pub fn print_json(outcome: &PlanningOutcome, log: &ActivityLog, reference: NaiveDateTime) -> Result<()> {
    let report = PlanReport {
        reference,
        outcome,
        log: log.entries(),
    };
    let s = serde_json::to_string_pretty(&report).context("serialize plan report")?;
    println!("{s}");
    Ok(())
}
