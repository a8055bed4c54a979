//! # Weekplan Core Library
//!
//! This library builds a one-week personal schedule from fixed calendar
//! events, a study/work backlog, and the user's preferences and wellness
//! goals. All operations are available through the standalone CLI binary,
//! which is a thin driver over this crate.
//!
//! ## Architecture
//!
//! - **Timeline**: Free gap detection inside a day's active window
//! - **Planner**: 7-day grid construction, sleep seeding, fixed event placement
//! - **Scheduler**: Round-robin greedy placement of study blocks
//! - **Validation / Render**: Input checks before planning, text output after
//! - **Storage**: TOML-based configuration for default preferences
//!
//! ## Key Components
//!
//! - [`generate_weekly_plan`]: Runs every planning stage and returns the plan
//!   with its diagnostics report
//! - [`find_open_slots`]: Pure gap query used by the scheduler
//! - [`StudyScheduler`]: Study block distribution over a prepared week
//! - [`Config`]: Application configuration management

pub mod error;
pub mod planner;
pub mod render;
pub mod schedule;
pub mod scheduler;
pub mod storage;
pub mod timeline;
pub mod validation;

pub use error::{ConfigError, CoreError, ValidationError};
pub use planner::{generate_weekly_plan, PlanOutcome, PlanReport, PlanRequest, RejectedEvent};
pub use schedule::{BlockKind, DayPlan, Event, Preferences, Task, TimeBlock, WeekPlan, WellnessGoal};
pub use scheduler::{StudyScheduler, TaskId, TaskLedger, TaskProgress, TaskState};
pub use storage::Config;
pub use timeline::{find_open_slots, ActiveWindow, TimeGap};
