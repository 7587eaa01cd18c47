//! Autopilot simulator CLI.
//!
//! Plays many headless sessions and reports how they ended.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # 100 random runs
//!   cargo run --bin simulate -- -n 500 --seed 7  # Reproducible batch
//!   cargo run --bin simulate -- --json           # Also write a JSON report

use clap::Parser;
use skyward::simulator::{run_simulation, SimConfig};
use std::io;

#[derive(Parser)]
#[command(name = "simulate")]
#[command(about = "Run headless autopilot sessions and summarize the results")]
struct Args {
    /// Number of sessions to play
    #[arg(short = 'n', long, default_value_t = 100)]
    runs: u32,

    /// Base seed; run i uses seed + i
    #[arg(short, long)]
    seed: Option<u64>,

    /// Tick limit per session
    #[arg(short = 't', long, default_value_t = 100_000)]
    max_ticks: u64,

    /// Autopilot margin above the gap's lower edge
    #[arg(long, default_value_t = 20.0)]
    margin: f64,

    /// Also save the report as JSON
    #[arg(long)]
    json: bool,

    /// Print one line per run
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    let config = SimConfig {
        num_runs: args.runs,
        seed: args.seed,
        max_ticks_per_run: args.max_ticks,
        flap_margin: args.margin,
        verbosity: if args.verbose { 2 } else { 1 },
        ..Default::default()
    };

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║                 SKYWARD AUTOPILOT SIMULATOR                   ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Max Ticks:      {}", config.max_ticks_per_run);
    println!("  Flap Margin:    {}", config.flap_margin);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());

    if args.json {
        let filename = format!(
            "sim_report_{}.json",
            chrono::Utc::now().format("%Y%m%d_%H%M%S")
        );
        std::fs::write(&filename, report.to_json())?;
        println!("JSON report saved to: {}", filename);
    }

    Ok(())
}
