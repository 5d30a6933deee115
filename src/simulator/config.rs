//! Simulation configuration.

use crate::core::config::GameConfig;

/// Configuration for a batch of autopilot rounds.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of rounds to play
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random). Run `i` uses `seed + i`.
    pub seed: Option<u64>,

    /// Rounds still alive after this many ticks are stopped and counted as timed out
    pub max_ticks_per_run: u64,

    /// Fraction of the gap, measured from its top edge, the autopilot aims for
    pub aim_ratio: f32,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per run)
    pub verbosity: u8,

    /// Game tuning under test
    pub game: GameConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            max_ticks_per_run: 30 * 60 * 5,
            aim_ratio: 0.65,
            verbosity: 1,
            game: GameConfig::default(),
        }
    }
}

impl SimConfig {
    /// Small seeded batch for smoke checks.
    pub fn quick(seed: u64) -> Self {
        Self {
            num_runs: 50,
            seed: Some(seed),
            max_ticks_per_run: 3_000,
            verbosity: 0,
            ..Default::default()
        }
    }
}
