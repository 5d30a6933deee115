//! The simulation engine.
//!
//! A player body flaps through a stream of gapped barriers. Gravity pulls it
//! down every tick, a press gives a short fixed hop, and touching the ground
//! or a barrier ends the round. One point per barrier passed.

pub mod obstacles;
pub mod player;
pub mod round;
pub mod score;
pub mod snapshot;

pub use obstacles::{Obstacle, ObstacleField, SpawnRules};
pub use player::{FlapPhase, PlayerBody, WingPose};
pub use round::{CrashCause, InputEvent, InputOutcome, RoundController, RoundState, TickResult};
pub use score::ScoreCounter;
pub use snapshot::{BarrierRects, PlayerPose, RenderSnapshot};
