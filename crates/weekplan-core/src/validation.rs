//! Input validation for planner records.
//!
//! The planning engine trusts its inputs. Callers run these checks first so
//! that malformed events, tasks, or settings never reach it.

use chrono::NaiveDate;

use crate::error::ValidationError;
use crate::schedule::{Event, Preferences, Task, WellnessGoal};

pub const MIN_PRIORITY: u8 = 1;
pub const MAX_PRIORITY: u8 = 5;

fn require_non_empty(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: field.to_string(),
            message: "must not be empty".to_string(),
        });
    }
    Ok(())
}

pub fn validate_event(event: &Event) -> Result<(), ValidationError> {
    require_non_empty("event.name", &event.name)?;
    if event.end_time <= event.start_time {
        return Err(ValidationError::InvalidTimeRange {
            name: event.name.clone(),
            start: event.start_time,
            end: event.end_time,
        });
    }
    Ok(())
}

pub fn validate_task(task: &Task, today: NaiveDate) -> Result<(), ValidationError> {
    require_non_empty("task.title", &task.title)?;
    if task.estimated_minutes <= 0 {
        return Err(ValidationError::OutOfRange {
            field: format!("{}.estimated_minutes", task.title),
            message: format!("must be positive, got {}", task.estimated_minutes),
        });
    }
    if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&task.priority) {
        return Err(ValidationError::OutOfRange {
            field: format!("{}.priority", task.title),
            message: format!(
                "must be between {MIN_PRIORITY} and {MAX_PRIORITY}, got {}",
                task.priority
            ),
        });
    }
    if task.due_date < today {
        return Err(ValidationError::PastDueDate {
            title: task.title.clone(),
            due: task.due_date,
            today,
        });
    }
    Ok(())
}

pub fn validate_wellness(goal: &WellnessGoal) -> Result<(), ValidationError> {
    let sleep = goal.min_sleep_hours_per_day;
    if !(sleep > 0.0 && sleep <= 24.0) {
        return Err(ValidationError::OutOfRange {
            field: "min_sleep_hours_per_day".to_string(),
            message: format!("must be in (0, 24], got {sleep}"),
        });
    }
    if goal.meals_per_day < 1 {
        return Err(ValidationError::OutOfRange {
            field: "meals_per_day".to_string(),
            message: "must be at least 1".to_string(),
        });
    }
    Ok(())
}

pub fn validate_preferences(prefs: &Preferences) -> Result<(), ValidationError> {
    if prefs.latest_end <= prefs.earliest_start {
        return Err(ValidationError::InvalidTimeRange {
            name: "active window".to_string(),
            start: prefs.earliest_start,
            end: prefs.latest_end,
        });
    }
    if prefs.study_block_minutes <= 0 {
        return Err(ValidationError::OutOfRange {
            field: "study_block_minutes".to_string(),
            message: format!("must be positive, got {}", prefs.study_block_minutes),
        });
    }
    if prefs.break_minutes < 0 {
        return Err(ValidationError::OutOfRange {
            field: "break_minutes".to_string(),
            message: format!("must not be negative, got {}", prefs.break_minutes),
        });
    }
    Ok(())
}

/// Validate every record, collecting all failures.
pub fn validate_all(
    events: &[Event],
    tasks: &[Task],
    goal: &WellnessGoal,
    prefs: &Preferences,
    today: NaiveDate,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    errors.extend(validate_preferences(prefs).err());
    errors.extend(validate_wellness(goal).err());
    errors.extend(events.iter().filter_map(|e| validate_event(e).err()));
    errors.extend(tasks.iter().filter_map(|t| validate_task(t, today).err()));
    errors
}
