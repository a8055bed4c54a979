//! Weekly plan generation.
//!
//! Runs the planning stages in order over one freshly built grid:
//! 1. Build the 7-day grid and seed sleep blocks
//! 2. Place fixed events, dropping overlaps
//! 3. Snapshot open slots per day
//! 4. Distribute study blocks for the task backlog
//!
//! Nothing here fails. Every event or task that could not be placed is
//! listed in the returned [`PlanReport`].

pub mod events;
pub mod grid;

pub use events::{place_events, EventPlacement, RejectedEvent};
pub use grid::{build_week, seed_sleep, sleep_block, week_start};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{Event, Preferences, Task, WeekPlan, WellnessGoal};
use crate::scheduler::{StudyScheduler, TaskProgress};
use crate::timeline::{find_open_slots, TimeGap};

/// Open slots on one day after fixed events were placed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySlots {
    pub date: NaiveDate,
    pub gaps: Vec<TimeGap>,
}

/// Diagnostics for one planning run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanReport {
    pub week_start: NaiveDate,
    /// Free gaps before any study block was placed
    pub open_slots: Vec<DaySlots>,
    pub rejected_events: Vec<RejectedEvent>,
    /// Events dated outside the planned week
    pub skipped_events: Vec<String>,
    /// One entry per input task, in input order
    pub task_progress: Vec<TaskProgress>,
}

impl PlanReport {
    /// Tasks with minutes left over after the week filled up.
    pub fn incomplete_tasks(&self) -> impl Iterator<Item = &TaskProgress> {
        self.task_progress.iter().filter(|p| p.remaining_minutes > 0)
    }

    pub fn is_complete(&self) -> bool {
        self.rejected_events.is_empty() && self.incomplete_tasks().next().is_none()
    }
}

/// A generated week with its diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanOutcome {
    pub plan: WeekPlan,
    pub report: PlanReport,
}

/// Inputs for one planning run.
#[derive(Debug, Clone, Copy)]
pub struct PlanRequest<'a> {
    pub events: &'a [Event],
    pub tasks: &'a [Task],
    pub goals: &'a WellnessGoal,
    pub prefs: &'a Preferences,
    pub today: NaiveDate,
}

/// Generate the plan for the week starting on the Monday on or after `today`.
pub fn generate_weekly_plan(request: PlanRequest<'_>) -> PlanOutcome {
    let PlanRequest {
        events,
        tasks,
        goals,
        prefs,
        today,
    } = request;

    let monday = week_start(today);
    let mut week = build_week(monday);
    seed_sleep(&mut week, prefs, goals);

    let placement = place_events(&mut week, events);

    let open_slots: Vec<DaySlots> = week
        .days
        .iter()
        .map(|day| DaySlots {
            date: day.date,
            gaps: find_open_slots(
                day.date,
                &day.blocks,
                prefs.active_window(),
                prefs.study_block(),
            ),
        })
        .collect();
    for slots in open_slots.iter().filter(|s| !s.gaps.is_empty()) {
        tracing::debug!(
            date = %slots.date,
            gaps = slots.gaps.len(),
            "open slots after fixed events"
        );
    }

    let run = StudyScheduler::new(prefs).schedule(&mut week, tasks);
    tracing::debug!(
        passes = run.passes,
        blocks = run.blocks_placed,
        "study scheduling finished"
    );

    PlanOutcome {
        plan: week,
        report: PlanReport {
            week_start: monday,
            open_slots,
            rejected_events: placement.rejected,
            skipped_events: placement.skipped,
            task_progress: run.ledger.all_progress(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::BlockKind;
    use chrono::NaiveTime;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_open_slots_snapshot_excludes_study_blocks() {
        let today = NaiveDate::from_ymd_opt(2025, 11, 17).unwrap();
        let events = vec![Event {
            name: "Lecture".to_string(),
            date: today,
            start_time: t(9, 0),
            end_time: t(10, 0),
            category: Some("study".to_string()),
        }];
        let tasks = vec![Task {
            title: "Essay".to_string(),
            course: None,
            estimated_minutes: 60,
            priority: 3,
            due_date: today,
            notes: None,
        }];
        let prefs = Preferences::default();
        let goals = WellnessGoal::default();

        let outcome = generate_weekly_plan(PlanRequest {
            events: &events,
            tasks: &tasks,
            goals: &goals,
            prefs: &prefs,
            today,
        });

        assert_eq!(outcome.report.week_start, today);
        assert_eq!(
            outcome.report.open_slots[0].gaps,
            vec![TimeGap::new(t(8, 0), t(9, 0)), TimeGap::new(t(10, 0), t(22, 0))]
        );
        assert_eq!(outcome.plan.days[0].blocks[0].kind, BlockKind::Study);
        assert!(outcome.report.is_complete());
    }
}
