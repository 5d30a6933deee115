//! Headless balance simulator.
//!
//! Plays many rounds with an autopilot to see how a tuning behaves:
//! - Score spread and the score histogram
//! - How long rounds survive
//! - Whether the ground or the pipes end more rounds
//!
//! Rounds run on [`RoundController`](crate::game::RoundController), so
//! results match what a player would face.

mod autopilot;
mod config;
mod report;
mod runner;

pub use autopilot::Autopilot;
pub use config::SimConfig;
pub use report::SimReport;
pub use runner::{run_simulation, simulate_single_run, RunStats};
