//! Skyflap - a terminal side-scroller about keeping a small bird aloft.
//!
//! The engine is deterministic given a random source: the host feeds
//! [`game::InputEvent`]s and calls [`game::RoundController::tick`] at a fixed
//! rate, then draws the returned [`game::RenderSnapshot`].

pub mod audio;
pub mod core;
pub mod game;
pub mod input;
pub mod logging;
pub mod simulator;
pub mod ui;

pub use audio::{AudioCue, AudioSink, TerminalAudio};
pub use crate::core::{ConfigError, GameConfig, SpriteMetrics, TickClock};
pub use game::{InputEvent, InputOutcome, RenderSnapshot, RoundController, RoundState};
