//! Plays autopilot rounds through [`RoundController`], the same engine the
//! terminal host drives. Statistics are gathered from each [`TickResult`].
//!
//! [`TickResult`]: crate::game::TickResult

use super::autopilot::Autopilot;
use super::config::SimConfig;
use super::report::SimReport;
use crate::audio::{AudioCue, AudioSink};
use crate::core::assets::SpriteMetrics;
use crate::core::config::ConfigError;
use crate::game::{CrashCause, RoundController};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

/// Outcome of one autopilot round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub score: u32,
    pub ticks: u64,
    pub flaps: u32,
    /// `None` only when the round timed out.
    pub crash: Option<CrashCause>,
    pub timed_out: bool,
}

/// Counts cues instead of playing them.
#[derive(Debug, Default)]
struct CueCounter {
    flaps: u32,
    scores: u32,
}

impl AudioSink for CueCounter {
    fn play(&mut self, cue: AudioCue) {
        match cue {
            AudioCue::Flap => self.flaps += 1,
            AudioCue::Score => self.scores += 1,
            AudioCue::Collision | AudioCue::Restart => {}
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, ConfigError> {
    let metrics = SpriteMetrics::default();
    config.game.validate(&metrics)?;

    let autopilot = Autopilot::new(config.aim_ratio);
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        let mut rng = match config.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => ChaCha8Rng::from_entropy(),
        };

        let round = RoundController::new(config.game.clone(), metrics)?;
        let stats = simulate_single_run(round, &autopilot, config.max_ticks_per_run, &mut rng);

        if config.verbosity >= 2 {
            println!(
                "Run {}/{} - Score {}, Ticks {}, Flaps {}, {}",
                run_idx + 1,
                config.num_runs,
                stats.score,
                stats.ticks,
                stats.flaps,
                match stats.crash {
                    Some(CrashCause::Ground) => "hit ground",
                    Some(CrashCause::Obstacle) => "hit pipe",
                    None => "timed out",
                }
            );
        }
        all_runs.push(stats);
    }

    let report = SimReport::from_runs(all_runs);
    tracing::info!(
        runs = report.num_runs,
        mean_score = report.mean_score,
        "simulation finished"
    );
    Ok(report)
}

/// Play one round until it crashes or `max_ticks` elapse.
pub fn simulate_single_run(
    mut round: RoundController,
    autopilot: &Autopilot,
    max_ticks: u64,
    rng: &mut ChaCha8Rng,
) -> RunStats {
    let mut audio = CueCounter::default();
    let mut ticks: u64 = 0;
    let mut crash = None;

    while ticks < max_ticks {
        if let Some(input) = autopilot.decide(&round) {
            round.handle_input(input, &mut audio);
        }

        let result = round.tick(rng, &mut audio);
        ticks += 1;

        if let Some(cause) = result.crash {
            crash = Some(cause);
            break;
        }
    }

    debug_assert_eq!(audio.scores, round.score().value());

    RunStats {
        score: round.score().value(),
        ticks,
        flaps: audio.flaps,
        crash,
        timed_out: crash.is_none(),
    }
}
