//! Free-gap detection inside a day's active window.
//!
//! Finds the open stretches between placed blocks that are long enough to
//! hold at least one study block.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::schedule::TimeBlock;

/// The daily `[start, end)` range in which placement is considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveWindow {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl ActiveWindow {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    fn anchored(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (day.and_time(self.start), day.and_time(self.end))
    }
}

/// A free interval, in time-of-day form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGap {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeGap {
    pub fn new(start: NaiveTime, end: NaiveTime) -> Self {
        Self { start, end }
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Check if this gap can fit a block of the given duration
    pub fn can_fit(&self, duration: Duration) -> bool {
        self.end - self.start >= duration
    }
}

/// Detector for free gaps in one day's block list
#[derive(Debug, Clone, Copy)]
pub struct TimeGapDetector {
    window: ActiveWindow,
    min_gap: Duration,
}

impl TimeGapDetector {
    pub fn new(window: ActiveWindow, min_gap: Duration) -> Self {
        Self { window, min_gap }
    }

    /// Find gaps in `blocks` on `day`.
    ///
    /// Blocks whose end is not after their start (wrapped overnight blocks)
    /// are ignored. Blocks are clamped to the window, merged when they touch
    /// or overlap, and only gaps of at least `min_gap` are returned, sorted
    /// by start time.
    pub fn find_gaps(&self, day: NaiveDate, blocks: &[TimeBlock]) -> Vec<TimeGap> {
        let (window_start, window_end) = self.window.anchored(day);
        if window_end <= window_start {
            return Vec::new();
        }

        let mut occupied: Vec<(NaiveDateTime, NaiveDateTime)> = blocks
            .iter()
            .map(|b| b.anchored(day))
            .filter(|(start, end)| end > start)
            .filter(|(start, end)| *end > window_start && *start < window_end)
            .map(|(start, end)| (start.max(window_start), end.min(window_end)))
            .collect();
        occupied.sort_by_key(|(start, _)| *start);

        let mut merged: Vec<(NaiveDateTime, NaiveDateTime)> = Vec::with_capacity(occupied.len());
        for (start, end) in occupied {
            match merged.last_mut() {
                Some(last) if start <= last.1 => last.1 = last.1.max(end),
                _ => merged.push((start, end)),
            }
        }

        let mut gaps = Vec::new();
        let mut cursor = window_start;
        for (start, end) in merged {
            if start - cursor >= self.min_gap {
                gaps.push(TimeGap::new(cursor.time(), start.time()));
            }
            cursor = cursor.max(end);
        }

        if window_end - cursor >= self.min_gap {
            gaps.push(TimeGap::new(cursor.time(), window_end.time()));
        }

        gaps
    }
}

/// Free gaps on `day` of at least `min_useful_gap`.
pub fn find_open_slots(
    day: NaiveDate,
    blocks: &[TimeBlock],
    window: ActiveWindow,
    min_useful_gap: Duration,
) -> Vec<TimeGap> {
    TimeGapDetector::new(window, min_useful_gap).find_gaps(day, blocks)
}
