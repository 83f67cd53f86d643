use chrono::{Duration, NaiveDate, NaiveDateTime};
use studyplan_core::{
    AllocatorConfig, FreeInterval, Plan, PlanningState, Task, allocate, apply_progress,
    priority_score, rank_tasks, reschedule,
};

fn base() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn minutes(m: i64) -> NaiveDateTime {
    base() + Duration::minutes(m)
}

/// A week-ish backlog with mixed deadlines, importance and workloads.
fn backlog() -> Vec<Task> {
    vec![
        Task::new("essay", "History essay", minutes(60 * 30), 240).with_importance(4),
        Task::new("lab", "Chem lab report", minutes(60 * 6), 90).with_importance(5),
        Task::new("read", "Reading ch. 4", minutes(60 * 72), 45).with_importance(2),
        Task::new("overdue", "Late problem set", minutes(-120), 70).with_importance(1),
        Task::new("done", "Finished quiz", minutes(60 * 3), 30).with_remaining(0),
        Task::new("big", "Thesis draft", minutes(60 * 200), 900)
            .with_importance(3)
            .with_subject("Thesis"),
    ]
}

/// Free time with gaps, an interval in the past, and odd lengths.
fn slots() -> Vec<FreeInterval> {
    [(-180, -60), (-30, 95), (120, 121 + 14), (180, 400), (600, 617), (700, 1000)]
        .into_iter()
        .map(|(s, e)| FreeInterval::new(minutes(s), minutes(e)).unwrap())
        .collect()
}

fn source_interval<'a>(
    intervals: &'a [FreeInterval],
    s: &studyplan_core::StudySession,
) -> Option<&'a FreeInterval> {
    intervals
        .iter()
        .find(|iv| iv.contains(s.start) && iv.contains(s.end))
}

fn plan_for(reference: NaiveDateTime, config: &AllocatorConfig) -> (Vec<Task>, Plan) {
    let tasks = backlog();
    let ranked = rank_tasks(&tasks, reference);
    let plan = allocate(&ranked, &slots(), reference, config);
    (tasks, plan)
}

fn configs() -> Vec<AllocatorConfig> {
    vec![
        AllocatorConfig::default(),
        AllocatorConfig {
            chunk_minutes: 25,
            break_minutes: 5,
            min_session_minutes: 10,
        },
        AllocatorConfig {
            chunk_minutes: 90,
            break_minutes: 0,
            min_session_minutes: 30,
        },
    ]
}

#[test]
fn overdue_tasks_outrank_everything_upcoming() {
    let tasks = backlog();
    let reference = base();
    let overdue = priority_score(&tasks[3], reference);
    for t in tasks.iter().filter(|t| t.due > reference) {
        assert!(overdue > priority_score(t, reference), "{} outranks overdue", t.id);
    }
    assert_eq!(rank_tasks(&tasks, reference)[0].id, "overdue");
}

#[test]
fn sessions_stay_inside_intervals_and_after_reference() {
    let intervals = slots();
    for config in configs() {
        for offset in [0, 45, 200] {
            let reference = minutes(offset);
            let (_, plan) = plan_for(reference, &config);
            assert!(!plan.is_empty());

            for s in &plan.sessions {
                assert!(s.end > s.start);
                assert!(s.start >= reference, "session before reference");
                assert_eq!(s.minutes, (s.end - s.start).num_minutes());
                assert!(s.minutes >= config.min_session_minutes);
                assert!(s.minutes <= config.chunk_minutes);
                assert!(
                    source_interval(&intervals, s).is_some(),
                    "session {:?} outside every interval",
                    s
                );
            }
        }
    }
}

#[test]
fn sessions_for_one_task_never_overlap() {
    for config in configs() {
        let (tasks, plan) = plan_for(base(), &config);
        for t in &tasks {
            let mine: Vec<_> = plan.sessions_for(&t.id).collect();
            for (i, a) in mine.iter().enumerate() {
                for b in &mine[i + 1..] {
                    assert!(!a.overlaps(b), "{a:?} overlaps {b:?}");
                }
            }
        }
        // A single learner: no two sessions overlap at all.
        for w in plan.sessions.windows(2) {
            assert!(!w[0].overlaps(&w[1]));
        }
    }
}

#[test]
fn allocation_never_exceeds_remaining() {
    for config in configs() {
        let (tasks, plan) = plan_for(base(), &config);
        for t in &tasks {
            assert!(plan.minutes_for(&t.id) <= t.remaining_minutes.max(0));
        }
        assert_eq!(plan.minutes_for("done"), 0);
    }
}

#[test]
fn allocation_is_idempotent() {
    for config in configs() {
        let (_, first) = plan_for(minutes(17), &config);
        let (_, second) = plan_for(minutes(17), &config);
        assert_eq!(first, second);
    }
}

#[test]
fn worked_example_single_interval() {
    let reference = NaiveDate::from_ymd_opt(2026, 1, 2)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let task = Task::new("A", "Task A", reference + Duration::days(1), 120).with_importance(5);
    let interval = FreeInterval::new(reference, reference + Duration::hours(2)).unwrap();

    let plan = allocate(&[&task], &[interval], reference, &AllocatorConfig::default());

    let spans: Vec<(i64, i64)> = plan
        .sessions
        .iter()
        .map(|s| {
            (
                (s.start - reference).num_minutes(),
                (s.end - reference).num_minutes(),
            )
        })
        .collect();
    assert_eq!(spans, vec![(0, 50), (60, 110)]);
    assert_eq!(task.remaining_minutes - plan.minutes_for("A"), 20);
}

/// Full flow: load, plan, log progress, reschedule.
#[test]
fn progress_then_reschedule_flow() {
    let mut state = PlanningState::new();
    state.load_tasks(backlog()).unwrap();
    state.load_intervals(slots());

    let reference = base();
    let before = state.build_plan(reference).clone();
    assert!(before.minutes_for("overdue") > 0);

    // Finish the overdue set; the lab report should move to the front.
    let up = apply_progress(&mut state, "overdue", 500).unwrap();
    assert_eq!(up.after, 0);
    assert_eq!(state.plan(), Some(&before));

    let after = reschedule(&mut state, reference).clone();
    assert_eq!(after.minutes_for("overdue"), 0);
    assert_eq!(after.sessions[0].task_id, "lab");
    assert_eq!(state.plan(), Some(&after));

    // Repeated progress stays floored at zero.
    for _ in 0..3 {
        let up = apply_progress(&mut state, "lab", 40).unwrap();
        assert_eq!(up.after, (up.before - 40).max(0));
    }
    assert_eq!(state.task("lab").unwrap().remaining_minutes, 0);
}
