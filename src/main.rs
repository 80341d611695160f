//! Learner Portal - student dashboard state model
//!
//! Binary entry point: loads and validates a session snapshot, builds
//! the dashboard state, and prints the session report.

use std::path::PathBuf;

use clap::Parser;

use learner_portal::report::SessionReport;
use portal_app::config::load_settings;
use portal_app::DashboardState;

/// Learner Portal - validate a session snapshot and report progress
#[derive(Parser, Debug)]
#[command(name = "lportal")]
#[command(about = "Validate a session snapshot and report student progress", long_about = None)]
struct Args {
    /// Path to the session snapshot JSON
    #[arg(value_name = "SNAPSHOT")]
    snapshot: PathBuf,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    json: bool,

    /// Directory searched for .lportal/config.toml (defaults to cwd)
    #[arg(long, value_name = "DIR")]
    config_root: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    portal_core::logging::init()?;

    let config_root = args
        .config_root
        .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")));
    let settings = load_settings(&config_root);

    let snapshot = portal_core::load_snapshot(&args.snapshot)?;
    let state = DashboardState::new(snapshot, settings);

    let report = SessionReport::from_state(&state);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
    }

    Ok(())
}
