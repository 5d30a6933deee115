//! Engine-wide building blocks: constants, configuration, geometry, timing.

pub mod assets;
pub mod clock;
pub mod config;
pub mod constants;
pub mod geometry;

pub use assets::SpriteMetrics;
pub use clock::TickClock;
pub use config::{ConfigError, GameConfig};
pub use geometry::{Rect, Vec2};
