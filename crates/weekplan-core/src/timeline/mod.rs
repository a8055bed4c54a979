//! Timeline queries over a day's placed blocks.
//!
//! This module provides:
//! - The active-hours window for a day
//! - Free gap detection between placed blocks

mod gap;

pub use gap::{find_open_slots, ActiveWindow, TimeGap, TimeGapDetector};
