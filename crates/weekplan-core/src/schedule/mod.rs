//! Schedule types: time blocks, day and week plans, and planner inputs.
//!
//! All times are wall-clock times of day with no timezone. A block belongs
//! to exactly one calendar date; the date lives on the owning [`DayPlan`].

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::timeline::ActiveWindow;

/// Category label for sleep blocks.
pub const SLEEP_CATEGORY: &str = "sleep";
/// Category label for events that carry no category of their own.
pub const EVENT_CATEGORY: &str = "event";
/// Category label for study blocks.
pub const STUDY_CATEGORY: &str = "study";
/// Category label for break blocks.
pub const BREAK_CATEGORY: &str = "break";

/// Type of schedule block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Nightly sleep, anchored at the end of the active window
    Sleep,
    /// Caller-supplied fixed calendar event
    Event,
    /// One study session for a task
    Study,
    /// Rest following a study session
    Break,
}

/// A placed block on one day's timeline.
///
/// `end` is normally after `start`. The sleep block is the exception: when it
/// runs past midnight its end time of day wraps and is smaller than `start`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TimeBlock {
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub category: String,
    pub kind: BlockKind,
    /// Event name or task title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl TimeBlock {
    pub fn new(
        start: NaiveTime,
        end: NaiveTime,
        category: impl Into<String>,
        kind: BlockKind,
    ) -> Self {
        Self {
            start,
            end,
            category: category.into(),
            kind,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether the end time of day wrapped past midnight.
    pub fn wraps_midnight(&self) -> bool {
        self.end <= self.start
    }

    /// Anchor the block on `day`, returning full timestamps.
    ///
    /// Wrapped blocks are anchored on the same day too, so their end is
    /// before their start.
    pub fn anchored(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start), day.and_time(self.end))
    }

    /// Half-open overlap test against `[start, end)` on the same day.
    pub fn overlaps(&self, start: NaiveTime, end: NaiveTime) -> bool {
        !(end <= self.start || start >= self.end)
    }

    /// Duration in minutes, or `None` for a wrapped block.
    pub fn duration_minutes(&self) -> Option<i64> {
        if self.wraps_midnight() {
            None
        } else {
            Some((self.end - self.start).num_minutes())
        }
    }
}

/// Blocks for one calendar date, sorted by start after each planning phase.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DayPlan {
    pub date: NaiveDate,
    pub blocks: Vec<TimeBlock>,
}

impl DayPlan {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            blocks: Vec::new(),
        }
    }

    /// First block overlapping `[start, end)`, if any.
    pub fn find_conflict(&self, start: NaiveTime, end: NaiveTime) -> Option<&TimeBlock> {
        self.blocks.iter().find(|b| b.overlaps(start, end))
    }

    pub fn sort_blocks(&mut self) {
        self.blocks.sort_by_key(|b| b.start);
    }

    /// Total minutes of study blocks on this day.
    pub fn study_minutes(&self) -> i64 {
        self.blocks
            .iter()
            .filter(|b| b.kind == BlockKind::Study)
            .filter_map(TimeBlock::duration_minutes)
            .sum()
    }
}

/// Seven consecutive day plans, Monday first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeekPlan {
    pub days: Vec<DayPlan>,
}

impl WeekPlan {
    pub fn day_mut(&mut self, date: NaiveDate) -> Option<&mut DayPlan> {
        self.days.iter_mut().find(|d| d.date == date)
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.days.first().map(|d| d.date)
    }

    pub fn sort_all(&mut self) {
        for day in &mut self.days {
            day.sort_blocks();
        }
    }
}

/// User preferences for the daily active window and block granularity.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Preferences {
    pub earliest_start: NaiveTime,
    pub latest_end: NaiveTime,
    pub study_block_minutes: i64,
    pub break_minutes: i64,
}

impl Preferences {
    pub fn active_window(&self) -> ActiveWindow {
        ActiveWindow::new(self.earliest_start, self.latest_end)
    }

    pub fn study_block(&self) -> Duration {
        Duration::minutes(self.study_block_minutes)
    }

    pub fn break_block(&self) -> Duration {
        Duration::minutes(self.break_minutes)
    }
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            earliest_start: NaiveTime::from_hms_opt(8, 0, 0).unwrap_or_default(),
            latest_end: NaiveTime::from_hms_opt(22, 0, 0).unwrap_or_default(),
            study_block_minutes: 60,
            break_minutes: 15,
        }
    }
}

/// Wellness goals. Only the sleep target shapes the plan.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WellnessGoal {
    pub min_sleep_hours_per_day: f64,
    #[serde(default)]
    pub workouts_per_week: u32,
    #[serde(default = "default_meals_per_day")]
    pub meals_per_day: u32,
    #[serde(default)]
    pub self_care_blocks_per_week: u32,
}

fn default_meals_per_day() -> u32 {
    3
}

impl WellnessGoal {
    pub fn sleep_duration(&self) -> Duration {
        Duration::seconds((self.min_sleep_hours_per_day * 3600.0).round() as i64)
    }
}

impl Default for WellnessGoal {
    fn default() -> Self {
        Self {
            min_sleep_hours_per_day: 7.0,
            workouts_per_week: 3,
            meals_per_day: default_meals_per_day(),
            self_care_blocks_per_week: 2,
        }
    }
}

/// A fixed calendar event (class, appointment, shift).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub name: String,
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    #[serde(default)]
    pub category: Option<String>,
}

impl Event {
    pub fn to_block(&self) -> TimeBlock {
        let category = self.category.as_deref().unwrap_or(EVENT_CATEGORY);
        TimeBlock::new(self.start_time, self.end_time, category, BlockKind::Event)
            .with_label(self.name.clone())
    }
}

/// A study or work item in the backlog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    #[serde(default)]
    pub course: Option<String>,
    pub estimated_minutes: i64,
    pub priority: u8,
    pub due_date: NaiveDate,
    #[serde(default)]
    pub notes: Option<String>,
}
