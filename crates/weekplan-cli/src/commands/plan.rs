//! Weekly plan generation command for CLI.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use weekplan_core::render::{format_open_slots, format_report, format_week};
use weekplan_core::validation::validate_all;
use weekplan_core::{generate_weekly_plan, PlanRequest};

use crate::input::{load_config, today_or_local, PlanInput};

#[derive(Args)]
pub struct PlanArgs {
    /// Planning input file (JSON)
    #[arg(long, short)]
    pub input: PathBuf,
    /// Plan as if today were this date (YYYY-MM-DD)
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Output plan and report as JSON
    #[arg(long)]
    pub json: bool,
    /// Print open slots after fixed events are placed
    #[arg(long)]
    pub show_slots: bool,
    /// Config file to read defaults from
    #[arg(long)]
    pub config: Option<PathBuf>,
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let input = PlanInput::load(&args.input)?;
    let config = load_config(args.config.as_ref())?;
    let (prefs, goals) = input.settings(&config);
    let today = today_or_local(args.today);

    let errors = validate_all(&input.events, &input.tasks, &goals, &prefs, today);
    if let Some(first) = errors.first() {
        for err in &errors {
            eprintln!("invalid: {err}");
        }
        return Err(format!("input rejected: {first}").into());
    }

    tracing::debug!(
        events = input.events.len(),
        tasks = input.tasks.len(),
        %today,
        "planning week"
    );
    let outcome = generate_weekly_plan(PlanRequest {
        events: &input.events,
        tasks: &input.tasks,
        goals: &goals,
        prefs: &prefs,
        today,
    });

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    if args.show_slots {
        for line in outcome.report.open_slots.iter().filter_map(format_open_slots) {
            println!("{line}");
        }
    }
    print!("{}", format_week(&outcome.plan));

    let report = format_report(&outcome.report);
    if !report.is_empty() {
        print!("{report}");
    }
    Ok(())
}
