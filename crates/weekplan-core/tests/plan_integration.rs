//! Integration tests for weekly plan generation.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use proptest::prelude::*;
use weekplan_core::{
    find_open_slots, generate_weekly_plan, BlockKind, Event, PlanOutcome, PlanRequest, Preferences,
    Task, TaskState, TimeGap, WeekPlan, WellnessGoal,
};

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

fn monday() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 17).unwrap()
}

fn event(name: &str, date: NaiveDate, start: NaiveTime, end: NaiveTime) -> Event {
    Event {
        name: name.to_string(),
        date,
        start_time: start,
        end_time: end,
        category: None,
    }
}

fn task(title: &str, minutes: i64, priority: u8) -> Task {
    Task {
        title: title.to_string(),
        course: None,
        estimated_minutes: minutes,
        priority,
        due_date: monday() + Duration::days(6),
        notes: None,
    }
}

fn plan(events: &[Event], tasks: &[Task], prefs: &Preferences, today: NaiveDate) -> PlanOutcome {
    generate_weekly_plan(PlanRequest {
        events,
        tasks,
        goals: &WellnessGoal::default(),
        prefs,
        today,
    })
}

fn assert_no_overlaps(week: &WeekPlan) {
    for day in &week.days {
        for (i, a) in day.blocks.iter().enumerate() {
            for b in day.blocks.iter().skip(i + 1) {
                assert!(
                    !a.overlaps(b.start, b.end) && !b.overlaps(a.start, a.end),
                    "{:?} overlaps {:?} on {}",
                    a,
                    b,
                    day.date
                );
            }
        }
    }
}

fn assert_sorted(week: &WeekPlan) {
    for day in &week.days {
        assert!(day.blocks.windows(2).all(|w| w[0].start <= w[1].start));
    }
}

#[test]
fn test_gap_scenario_single_lecture() {
    let lecture = event("Lecture", monday(), t(9, 0), t(10, 0)).to_block();
    let gaps = find_open_slots(
        monday(),
        &[lecture],
        Preferences::default().active_window(),
        Duration::minutes(60),
    );
    assert_eq!(
        gaps,
        vec![TimeGap::new(t(8, 0), t(9, 0)), TimeGap::new(t(10, 0), t(22, 0))]
    );
}

#[test]
fn test_single_task_rotates_across_three_days() {
    let prefs = Preferences::default();
    let tasks = vec![task("Essay", 180, 4)];

    let outcome = plan(&[], &tasks, &prefs, monday());

    let days_with_study: Vec<Weekday> = outcome
        .plan
        .days
        .iter()
        .filter(|d| d.blocks.iter().any(|b| b.kind == BlockKind::Study))
        .map(|d| d.date.weekday())
        .collect();
    assert_eq!(days_with_study, vec![Weekday::Mon, Weekday::Tue, Weekday::Wed]);

    let progress = &outcome.report.task_progress[0];
    assert_eq!(progress.blocks, 3);
    assert_eq!(progress.remaining_minutes, 0);
    assert_eq!(progress.state, TaskState::Done);
}

#[test]
fn test_overlapping_events_first_wins() {
    let prefs = Preferences::default();
    let events = vec![
        event("Shift", monday(), t(13, 0), t(17, 0)),
        event("Seminar", monday(), t(16, 0), t(18, 0)),
    ];

    let outcome = plan(&events, &[], &prefs, monday());

    let labels: Vec<_> = outcome.plan.days[0]
        .blocks
        .iter()
        .filter_map(|b| b.label.as_deref())
        .collect();
    assert_eq!(labels, vec!["Shift"]);
    assert_eq!(outcome.report.rejected_events.len(), 1);
    assert_eq!(outcome.report.rejected_events[0].name, "Seminar");
    assert!(!outcome.report.is_complete());
}

#[test]
fn test_week_starts_on_coming_monday() {
    let prefs = Preferences::default();

    let from_monday = plan(&[], &[], &prefs, monday());
    assert_eq!(from_monday.plan.start_date(), Some(monday()));

    let wednesday = monday() + Duration::days(2);
    let from_wednesday = plan(&[], &[], &prefs, wednesday);
    assert_eq!(from_wednesday.plan.start_date(), Some(monday() + Duration::days(7)));
    assert_eq!(from_wednesday.plan.days.len(), 7);
}

#[test]
fn test_full_week_is_sorted_and_non_overlapping() {
    let prefs = Preferences::default();
    let events = vec![
        event("COMP 232 Lecture", monday(), t(9, 0), t(10, 0)),
        event("Lab", monday() + Duration::days(1), t(13, 0), t(16, 0)),
        event("Work", monday() + Duration::days(4), t(8, 0), t(22, 0)),
        event("Late movie", monday() + Duration::days(5), t(22, 30), t(23, 45)),
    ];
    let tasks = vec![
        task("Problem set", 240, 5),
        task("Reading", 120, 2),
        task("Project", 600, 4),
    ];

    let outcome = plan(&events, &tasks, &prefs, monday());

    assert_no_overlaps(&outcome.plan);
    assert_sorted(&outcome.plan);
    assert!(outcome.report.rejected_events.is_empty());
    assert!(outcome
        .plan
        .days
        .iter()
        .all(|d| d.blocks.iter().filter(|b| b.kind == BlockKind::Sleep).count() == 1));
    // Friday is fully booked
    assert_eq!(outcome.plan.days[4].study_minutes(), 0);
    assert!(outcome.report.incomplete_tasks().next().is_none());
}

#[test]
fn test_capacity_shortfall_is_reported_not_fatal() {
    let prefs = Preferences {
        earliest_start: t(18, 0),
        latest_end: t(20, 0),
        study_block_minutes: 60,
        break_minutes: 30,
    };
    let tasks = vec![task("Huge", 30 * 60, 5), task("Small", 60, 1)];

    let outcome = plan(&[], &tasks, &prefs, monday());

    // One block plus a 30 minute break leaves 30 minutes: one block per day
    let placed: usize = outcome.report.task_progress.iter().map(|p| p.blocks).sum();
    assert_eq!(placed, 7);
    let incomplete: Vec<_> = outcome.report.incomplete_tasks().map(|p| p.title.as_str()).collect();
    assert_eq!(incomplete, vec!["Huge"]);
    assert_eq!(tasks[0].estimated_minutes, 30 * 60);
}

#[test]
fn test_same_backlog_plans_identically_twice() {
    let prefs = Preferences::default();
    let tasks = vec![task("A", 300, 3), task("B", 120, 5)];

    let first = plan(&[], &tasks, &prefs, monday());
    let second = plan(&[], &tasks, &prefs, monday());

    assert_eq!(first, second);
}

#[test]
fn test_outcome_serializes_to_json() {
    let prefs = Preferences::default();
    let outcome = plan(
        &[event("Lecture", monday(), t(9, 0), t(10, 0))],
        &[task("Essay", 60, 3)],
        &prefs,
        monday(),
    );
    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["plan"]["days"].as_array().unwrap().len(), 7);
    assert_eq!(json["plan"]["days"][0]["blocks"][0]["kind"], "study");
    assert_eq!(json["report"]["week_start"], "2025-11-17");
}

#[test]
fn test_zero_minute_blocks_leave_backlog_pending() {
    let prefs = Preferences {
        study_block_minutes: 0,
        ..Preferences::default()
    };
    let tasks = vec![task("Essay", 60, 3)];

    let outcome = plan(&[], &tasks, &prefs, monday());

    assert!(outcome
        .plan
        .days
        .iter()
        .all(|d| d.blocks.iter().all(|b| b.kind == BlockKind::Sleep)));
    let progress = &outcome.report.task_progress[0];
    assert_eq!(progress.state, TaskState::Pending);
    assert_eq!(progress.remaining_minutes, 60);
    assert!(!outcome.report.is_complete());
}

fn arb_event() -> impl Strategy<Value = Event> {
    (0i64..9, 6u32..23, 0u32..4, 15u32..180).prop_map(|(day, hour, quarter, len)| {
        let start_minutes = hour * 60 + quarter * 15;
        // Clamp before building the time so the end never wraps past midnight
        let end_minutes = (start_minutes + len).min(23 * 60 + 59);
        let start = t(start_minutes / 60, start_minutes % 60);
        let end = t(end_minutes / 60, end_minutes % 60);
        event("random", monday() + Duration::days(day), start, end)
    })
}

fn arb_task() -> impl Strategy<Value = Task> {
    (1i64..600, 1u8..=5).prop_map(|(minutes, priority)| task("random", minutes, priority))
}

proptest! {
    #[test]
    fn generated_events_stay_within_their_day(event in arb_event()) {
        prop_assert!(event.end_time > event.start_time);
    }

    #[test]
    fn plans_never_overlap_and_never_overschedule(
        events in prop::collection::vec(arb_event(), 0..12),
        tasks in prop::collection::vec(arb_task(), 0..6),
        block in prop::sample::select(vec![30i64, 45, 60, 90]),
        rest in 0i64..30,
    ) {
        let prefs = Preferences {
            earliest_start: t(8, 0),
            latest_end: t(22, 0),
            study_block_minutes: block,
            break_minutes: rest,
        };
        let outcome = plan(&events, &tasks, &prefs, monday());

        assert_no_overlaps(&outcome.plan);
        assert_sorted(&outcome.plan);

        for day in &outcome.plan.days {
            let scheduled = day
                .blocks
                .iter()
                .filter(|b| matches!(b.kind, BlockKind::Study | BlockKind::Break));
            for b in scheduled {
                prop_assert!(b.start >= prefs.earliest_start && b.end <= prefs.latest_end);
            }
        }

        for (progress, task) in outcome.report.task_progress.iter().zip(&tasks) {
            prop_assert_eq!(progress.scheduled_minutes, progress.blocks as i64 * block);
            prop_assert!(progress.scheduled_minutes < task.estimated_minutes + block);
        }

        let placed_events = outcome
            .plan
            .days
            .iter()
            .flat_map(|d| &d.blocks)
            .filter(|b| b.kind == BlockKind::Event)
            .count();
        let report = &outcome.report;
        prop_assert_eq!(
            placed_events + report.rejected_events.len() + report.skipped_events.len(),
            events.len()
        );
    }
}
