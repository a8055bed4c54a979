//! Input validation command for CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use weekplan_core::validation::validate_all;

use crate::input::{load_config, today_or_local, PlanInput};

#[derive(Args)]
pub struct ValidateArgs {
    /// Planning input file (JSON)
    #[arg(long, short)]
    pub input: PathBuf,
    /// Date to validate due dates against (default: today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Config file to read defaults from
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = PlanInput::load(&args.input)?;
    let config = load_config(args.config.as_ref())?;
    let (prefs, goals) = input.settings(&config);
    let today = today_or_local(args.today);

    let errors = validate_all(&input.events, &input.tasks, &goals, &prefs, today);
    if errors.is_empty() {
        println!(
            "ok: {} events, {} tasks",
            input.events.len(),
            input.tasks.len()
        );
        return Ok(());
    }

    for err in &errors {
        eprintln!("invalid: {err}");
    }
    Err(format!("{} validation error(s)", errors.len()).into())
}
