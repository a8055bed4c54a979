//! Seven-day grid construction and sleep seeding.

use chrono::{Datelike, Duration, NaiveDate};

use crate::schedule::{
    BlockKind, DayPlan, Preferences, TimeBlock, WeekPlan, WellnessGoal, SLEEP_CATEGORY,
};

/// The Monday the planned week starts on.
///
/// A Monday `today` starts the week today, not seven days later.
pub fn week_start(today: NaiveDate) -> NaiveDate {
    let weekday = today.weekday().num_days_from_monday() as i64; // 0=Mon ... 6=Sun
    let offset = (7 - weekday) % 7;
    today + Duration::days(offset)
}

/// Build an empty grid of 7 consecutive days starting at `monday`.
pub fn build_week(monday: NaiveDate) -> WeekPlan {
    WeekPlan {
        days: (0..7).map(|i| DayPlan::new(monday + Duration::days(i))).collect(),
    }
}

/// The sleep block for one day: starts at `latest_end` and lasts the
/// goal's sleep hours, wrapping the end time past midnight when needed.
pub fn sleep_block(prefs: &Preferences, goals: &WellnessGoal) -> TimeBlock {
    let start = prefs.latest_end;
    let (end, _) = start.overflowing_add_signed(goals.sleep_duration());
    TimeBlock::new(start, end, SLEEP_CATEGORY, BlockKind::Sleep)
}

/// Append one sleep block to every day.
pub fn seed_sleep(week: &mut WeekPlan, prefs: &Preferences, goals: &WellnessGoal) {
    let block = sleep_block(prefs, goals);
    for day in &mut week.days {
        day.blocks.push(block.clone());
    }
}
