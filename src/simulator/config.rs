//! Simulation configuration.

use crate::core::GameConfig;

/// Configuration for a simulation batch.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of sessions to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Ticks per run before it counts as timed out
    pub max_ticks_per_run: u64,

    /// How far above the next gap's lower edge the autopilot keeps the bird
    pub flap_margin: f64,

    /// Physics and layout for every session
    pub game: GameConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 100,
            seed: None,
            max_ticks_per_run: 100_000,
            flap_margin: 20.0,
            game: GameConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Small reproducible batch.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 10,
            seed: Some(seed),
            max_ticks_per_run: 10_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
