//! Remaining-minutes bookkeeping for the study scheduler.
//!
//! Tasks are addressed by [`TaskId`] (their index in the caller's slice).
//! The ledger owns the only mutable copy of each task's remaining minutes.
//!
//!   PENDING ──(block placed)──> PENDING (reduced) ──> … ──> DONE
//!
//! DONE is terminal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::schedule::Task;

/// Index of a task in the backlog passed to the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TaskId(usize);

impl TaskId {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// Scheduling state of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TaskState {
    /// Minutes left to schedule
    Pending,
    /// Fully scheduled (terminal state)
    Done,
}

impl TaskState {
    fn from_remaining(remaining: i64) -> Self {
        if remaining > 0 {
            TaskState::Pending
        } else {
            TaskState::Done
        }
    }
}

/// Per-task scheduling outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskProgress {
    pub title: String,
    pub estimated_minutes: i64,
    pub scheduled_minutes: i64,
    /// Never negative; an overshooting last block counts as zero remaining
    pub remaining_minutes: i64,
    pub blocks: usize,
    pub state: TaskState,
}

#[derive(Debug, Clone)]
struct Entry {
    title: String,
    estimated: i64,
    remaining: i64,
    blocks: usize,
}

/// Remaining minutes per task, updated one placed block at a time.
#[derive(Debug, Clone, Default)]
pub struct TaskLedger {
    entries: HashMap<TaskId, Entry>,
}

impl TaskLedger {
    pub fn new(tasks: &[Task]) -> Self {
        let entries = tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let entry = Entry {
                    title: task.title.clone(),
                    estimated: task.estimated_minutes,
                    remaining: task.estimated_minutes,
                    blocks: 0,
                };
                (TaskId::new(i), entry)
            })
            .collect();
        Self { entries }
    }

    pub fn state(&self, id: TaskId) -> TaskState {
        self.entries
            .get(&id)
            .map_or(TaskState::Done, |e| TaskState::from_remaining(e.remaining))
    }

    pub fn is_done(&self, id: TaskId) -> bool {
        self.state(id) == TaskState::Done
    }

    /// Minutes still to schedule, clamped at zero.
    pub fn remaining(&self, id: TaskId) -> i64 {
        self.entries.get(&id).map_or(0, |e| e.remaining.max(0))
    }

    /// Record one placed block of `minutes` for `id` and return the new state.
    ///
    /// Recording against a task that is already done is a no-op.
    pub fn record_block(&mut self, id: TaskId, minutes: i64) -> TaskState {
        let Some(entry) = self.entries.get_mut(&id) else {
            return TaskState::Done;
        };
        if entry.remaining > 0 {
            entry.remaining -= minutes;
            entry.blocks += 1;
        }
        TaskState::from_remaining(entry.remaining)
    }

    pub fn progress(&self, id: TaskId) -> TaskProgress {
        match self.entries.get(&id) {
            Some(e) => TaskProgress {
                title: e.title.clone(),
                estimated_minutes: e.estimated,
                scheduled_minutes: e.estimated - e.remaining,
                remaining_minutes: e.remaining.max(0),
                blocks: e.blocks,
                state: TaskState::from_remaining(e.remaining),
            },
            None => TaskProgress {
                title: String::new(),
                estimated_minutes: 0,
                scheduled_minutes: 0,
                remaining_minutes: 0,
                blocks: 0,
                state: TaskState::Done,
            },
        }
    }

    /// Progress for every task, in input order.
    pub fn all_progress(&self) -> Vec<TaskProgress> {
        (0..self.entries.len()).map(|i| self.progress(TaskId::new(i))).collect()
    }

    /// Tasks left with minutes to schedule, in input order.
    pub fn incomplete(&self) -> impl Iterator<Item = TaskProgress> + '_ {
        (0..self.entries.len())
            .map(TaskId::new)
            .filter(|id| !self.is_done(*id))
            .map(|id| self.progress(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn task(title: &str, minutes: i64) -> Task {
        Task {
            title: title.to_string(),
            course: Some("COMP 232".to_string()),
            estimated_minutes: minutes,
            priority: 3,
            due_date: NaiveDate::from_ymd_opt(2025, 11, 21).unwrap(),
            notes: None,
        }
    }

    #[test]
    fn test_record_block_transitions_to_done() {
        let mut ledger = TaskLedger::new(&[task("Essay", 120)]);
        let id = TaskId::new(0);

        assert_eq!(ledger.state(id), TaskState::Pending);
        assert_eq!(ledger.record_block(id, 60), TaskState::Pending);
        assert_eq!(ledger.remaining(id), 60);
        assert_eq!(ledger.record_block(id, 60), TaskState::Done);
        assert_eq!(ledger.remaining(id), 0);
    }

    #[test]
    fn test_done_is_terminal() {
        let mut ledger = TaskLedger::new(&[task("Essay", 30)]);
        let id = TaskId::new(0);

        assert_eq!(ledger.record_block(id, 60), TaskState::Done);
        assert_eq!(ledger.record_block(id, 60), TaskState::Done);

        let progress = ledger.progress(id);
        assert_eq!(progress.blocks, 1);
        assert_eq!(progress.scheduled_minutes, 60);
        assert_eq!(progress.remaining_minutes, 0);
    }

    #[test]
    fn test_incomplete_lists_pending_tasks_in_input_order() {
        let mut ledger = TaskLedger::new(&[task("A", 60), task("B", 60), task("C", 120)]);
        ledger.record_block(TaskId::new(1), 60);

        let titles: Vec<_> = ledger.incomplete().map(|p| p.title).collect();
        assert_eq!(titles, vec!["A", "C"]);
        assert_eq!(ledger.all_progress().len(), 3);
    }

    #[test]
    fn test_unknown_id_reads_as_done() {
        let mut ledger = TaskLedger::new(&[]);
        assert!(ledger.all_progress().is_empty());
        assert!(ledger.is_done(TaskId::new(4)));
        assert_eq!(ledger.record_block(TaskId::new(4), 60), TaskState::Done);
    }
}
