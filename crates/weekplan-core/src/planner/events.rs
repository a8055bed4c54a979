//! Fixed event placement.
//!
//! Events are placed in input order. An event that overlaps anything
//! already on its day is dropped and reported, never placed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::schedule::{Event, WeekPlan};

/// An event that could not be placed because it overlapped an existing block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RejectedEvent {
    pub name: String,
    pub date: NaiveDate,
    /// Category of the block it collided with
    pub conflicts_with: String,
}

/// What happened to each event passed to [`place_events`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventPlacement {
    pub placed: usize,
    pub rejected: Vec<RejectedEvent>,
    /// Names of events dated outside the week
    pub skipped: Vec<String>,
}

/// Place `events` into `week`, then re-sort every day.
pub fn place_events(week: &mut WeekPlan, events: &[Event]) -> EventPlacement {
    let mut outcome = EventPlacement::default();

    for event in events {
        let Some(day) = week.day_mut(event.date) else {
            tracing::debug!(
                event = %event.name,
                date = %event.date,
                "event outside planned week, skipping"
            );
            outcome.skipped.push(event.name.clone());
            continue;
        };

        if let Some(conflict) = day.find_conflict(event.start_time, event.end_time) {
            tracing::info!(
                event = %event.name,
                date = %event.date,
                conflicts_with = %conflict.category,
                "overlap detected, event dropped"
            );
            outcome.rejected.push(RejectedEvent {
                name: event.name.clone(),
                date: event.date,
                conflicts_with: conflict.category.clone(),
            });
            continue;
        }

        day.blocks.push(event.to_block());
        outcome.placed += 1;
    }

    week.sort_all();
    outcome
}
