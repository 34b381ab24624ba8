//! Arena CLI
//!
//! Run a real-time session between two random commanders and report what is
//! left standing.

use std::env;
use std::path::Path;

use anyhow::Result;
use random_commander::RandomCommander;
use rtchess_core::Commander;
use tracing_subscriber::EnvFilter;

use arena::{SessionConfig, SessionRunner};

fn print_usage() {
    println!("rtchess Arena Runner");
    println!();
    println!("Usage:");
    println!("  arena [config.toml]");
    println!();
    println!("With no argument a default session runs: random vs random on the");
    println!("standard board, one simulated minute at 60 fps.");
    println!();
    println!("Config keys (all optional): scenario, seat_one_color, controls,");
    println!("dt, frames, seeds, history_out.");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let config = match args.get(1).map(String::as_str) {
        Some("help") | Some("--help") | Some("-h") => {
            print_usage();
            return Ok(());
        }
        Some(path) => SessionConfig::load(Path::new(path))?,
        None => SessionConfig::default(),
    };

    let commanders: [Box<dyn Commander>; 2] = [
        Box::new(RandomCommander::new(config.seeds[0])),
        Box::new(RandomCommander::new(config.seeds[1])),
    ];
    let mut runner = SessionRunner::new(&config, commanders);
    let report = runner.run(config.frames);

    println!("=== Session Report ===");
    println!("Scenario: {}", config.scenario.name());
    println!("Simulated time: {:.1}s over {} frames", report.clock, report.frames_run);
    println!(
        "White: {} pieces standing, {} kills",
        report.white_pieces, report.white_kills
    );
    println!(
        "Black: {} pieces standing, {} kills",
        report.black_pieces, report.black_kills
    );
    println!("Actions recorded: {}", report.actions_recorded);

    if let Some(path) = &config.history_out {
        runner.write_history(path)?;
        println!("History written to {}", path.display());
    }

    Ok(())
}
