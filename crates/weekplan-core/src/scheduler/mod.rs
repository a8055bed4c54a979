//! Study block scheduler.
//!
//! Distributes the task backlog over the week's free gaps:
//! - Orders tasks by priority (highest first), then by due date
//! - Places one study block per day per turn, optionally followed by a break
//! - Rotates the served task to the back so its blocks spread across days
//! - Stops when every task is done or a full pass over the week places nothing

mod ledger;

pub use ledger::{TaskId, TaskLedger, TaskProgress, TaskState};

use std::collections::VecDeque;

use chrono::NaiveDate;

use crate::schedule::{
    BlockKind, DayPlan, Preferences, Task, TimeBlock, WeekPlan, BREAK_CATEGORY, STUDY_CATEGORY,
};
use crate::timeline::find_open_slots;

/// Summary of one scheduler run.
#[derive(Debug, Clone)]
pub struct ScheduleRun {
    pub ledger: TaskLedger,
    /// Full passes over the week, including the final one that placed nothing
    pub passes: usize,
    pub blocks_placed: usize,
}

/// Greedy round-robin scheduler for study blocks
pub struct StudyScheduler<'a> {
    prefs: &'a Preferences,
}

impl<'a> StudyScheduler<'a> {
    pub fn new(prefs: &'a Preferences) -> Self {
        Self { prefs }
    }

    /// Schedule `tasks` into `week`, then re-sort every day.
    ///
    /// The caller's tasks are never modified; remaining minutes are tracked
    /// in the returned ledger. A non-positive study block size places nothing
    /// and leaves every task pending.
    pub fn schedule(&self, week: &mut WeekPlan, tasks: &[Task]) -> ScheduleRun {
        let mut ledger = TaskLedger::new(tasks);
        let mut passes = 0;
        let mut blocks_placed = 0;

        if self.prefs.study_block_minutes <= 0 {
            tracing::warn!(
                study_block_minutes = self.prefs.study_block_minutes,
                "study block size is not positive, no study blocks placed"
            );
            return ScheduleRun {
                ledger,
                passes,
                blocks_placed,
            };
        }

        let mut queue: VecDeque<TaskId> = priority_order(tasks).into();

        let mut progress = true;
        'passes: while !queue.is_empty() && progress {
            progress = false;
            passes += 1;

            for day in &mut week.days {
                while queue.front().is_some_and(|id| ledger.is_done(*id)) {
                    queue.pop_front();
                }
                let Some(&id) = queue.front() else {
                    break 'passes;
                };

                if !self.place_block(day, &tasks[id.index()].title) {
                    continue;
                }

                progress = true;
                blocks_placed += 1;
                queue.pop_front();
                if ledger.record_block(id, self.prefs.study_block_minutes) == TaskState::Pending {
                    queue.push_back(id);
                }
            }
        }

        week.sort_all();

        for entry in ledger.incomplete() {
            tracing::info!(
                task = %entry.title,
                remaining_minutes = entry.remaining_minutes,
                "task not fully scheduled"
            );
        }

        ScheduleRun {
            ledger,
            passes,
            blocks_placed,
        }
    }

    /// Place one study block (and a break if it fits) in the earliest gap
    /// on `day` that can hold it. Returns whether anything was placed.
    fn place_block(&self, day: &mut DayPlan, title: &str) -> bool {
        let study = self.prefs.study_block();
        let rest = self.prefs.break_block();
        let gaps = find_open_slots(day.date, &day.blocks, self.prefs.active_window(), study);

        let Some(gap) = gaps.into_iter().find(|g| g.can_fit(study)) else {
            tracing::debug!(date = %day.date, task = title, "no room for a study block");
            return false;
        };

        let start = gap.start;
        let end = start + study;
        day.blocks
            .push(TimeBlock::new(start, end, STUDY_CATEGORY, BlockKind::Study).with_label(title));

        if self.prefs.break_minutes > 0 && gap.can_fit(study + rest) {
            day.blocks.push(TimeBlock::new(end, end + rest, BREAK_CATEGORY, BlockKind::Break));
        }

        tracing::debug!(date = %day.date, task = title, start = %start, "placed study block");
        true
    }
}

/// Task ids ordered by descending priority, then ascending due date.
///
/// The sort is stable, so exact ties keep input order.
pub fn priority_order(tasks: &[Task]) -> Vec<TaskId> {
    let mut order: Vec<(TaskId, u8, NaiveDate)> = tasks
        .iter()
        .enumerate()
        .map(|(i, t)| (TaskId::new(i), t.priority, t.due_date))
        .collect();
    order.sort_by(|a, b| b.1.cmp(&a.1).then(a.2.cmp(&b.2)));
    order.into_iter().map(|(id, _, _)| id).collect()
}
