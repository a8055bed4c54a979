//! Plain-text rendering of a week plan.

use std::fmt::Write;

use crate::planner::{DaySlots, PlanReport};
use crate::schedule::{BlockKind, DayPlan, TimeBlock, WeekPlan};

const HEADER: &str = "====================== WEEKLY SCHEDULE ======================";

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// One line for a block, e.g. ` Study (Essay): 08:00 -> 09:00`.
pub fn format_block(block: &TimeBlock) -> String {
    let category = capitalize(&block.category);
    let name = match (&block.kind, &block.label) {
        (BlockKind::Study | BlockKind::Event, Some(label)) => format!("{category} ({label})"),
        _ => category,
    };
    format!(
        " {name}: {} -> {}",
        block.start.format("%H:%M"),
        block.end.format("%H:%M")
    )
}

pub fn format_day(day: &DayPlan) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", day.date.format("%A, %B %d, %Y"));
    if day.blocks.is_empty() {
        let _ = writeln!(out, " (No scheduled activities)");
    }
    for block in &day.blocks {
        let _ = writeln!(out, "{}", format_block(block));
    }
    out
}

/// Render the whole week, one section per day in date order.
pub fn format_week(week: &WeekPlan) -> String {
    let mut out = format!("\n{HEADER}\n\n");
    for day in &week.days {
        out.push_str(&format_day(day));
        out.push('\n');
    }
    out
}

/// `Open slots on 2025-11-17: 08:00 - 09:00, 10:00 - 22:00`
pub fn format_open_slots(slots: &DaySlots) -> Option<String> {
    if slots.gaps.is_empty() {
        return None;
    }
    let formatted = slots
        .gaps
        .iter()
        .map(|g| format!("{} - {}", g.start.format("%H:%M"), g.end.format("%H:%M")))
        .collect::<Vec<_>>()
        .join(", ");
    Some(format!("Open slots on {}: {formatted}", slots.date))
}

/// Human-readable summary of dropped events and unfinished tasks.
pub fn format_report(report: &PlanReport) -> String {
    let mut out = String::new();
    for rejected in &report.rejected_events {
        let _ = writeln!(
            out,
            "Overlap detected on {} with {}: '{}' not placed",
            rejected.date, rejected.conflicts_with, rejected.name
        );
    }
    for name in &report.skipped_events {
        let _ = writeln!(out, "Outside planned week: '{name}' skipped");
    }
    for task in report.incomplete_tasks() {
        let _ = writeln!(
            out,
            "Not enough room for '{}': {} of {} minutes unscheduled",
            task.title, task.remaining_minutes, task.estimated_minutes
        );
    }
    out
}
