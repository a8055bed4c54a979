//! JSON planning input shared by the `plan` and `validate` commands.

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use serde::Deserialize;
use weekplan_core::{Config, Event, Preferences, Task, WellnessGoal};

/// Contents of a planning input file.
///
/// Preferences and wellness goals fall back to the configuration file.
#[derive(Debug, Deserialize)]
pub struct PlanInput {
    #[serde(default)]
    pub events: Vec<Event>,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub preferences: Option<Preferences>,
    #[serde(default)]
    pub wellness: Option<WellnessGoal>,
}

impl PlanInput {
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        let input = serde_json::from_str(&content)
            .map_err(|e| format!("cannot parse {}: {e}", path.display()))?;
        Ok(input)
    }

    /// Preferences and wellness goals, filling gaps from `config`.
    pub fn settings(&self, config: &Config) -> (Preferences, WellnessGoal) {
        (
            self.preferences.clone().unwrap_or_else(|| config.preferences.clone()),
            self.wellness.clone().unwrap_or_else(|| config.wellness.clone()),
        )
    }
}

/// Load the config from `path` if given, else from the default location.
pub fn load_config(path: Option<&PathBuf>) -> Result<Config, Box<dyn std::error::Error>> {
    match path {
        Some(path) => Ok(Config::load_from(path)?),
        None => Ok(Config::load_or_default()),
    }
}

pub fn today_or_local(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
