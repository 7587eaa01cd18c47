//! Headless autopilot simulator.
//!
//! Plays many sessions without a terminal to check how the pipe layout and
//! physics behave in aggregate:
//! - how long a simple flap-below-the-gap policy survives
//! - what ends runs (upper pipe, lower pipe or floor)
//! - score spread across seeds
//!
//! Runs go through the same `Session` and `tick` the game uses.

mod config;
mod report;
mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{autopilot_should_flap, run_simulation, simulate_single_run, RunStats};
