//! Sprite metrics shared by the simulation and the presentation layer.
//!
//! The engine never touches image data. It only needs the pixel sizes of the
//! player sprite, the pipe sprite and the ground strip, so those are gathered
//! here once at startup and handed to each component by reference.

use crate::core::geometry::Vec2;
use serde::{Deserialize, Serialize};

/// Pixel dimensions of every sprite the simulation measures against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteMetrics {
    /// Player sprite (all three flap frames share one size).
    pub player: Vec2,
    /// One pipe segment at full length.
    pub pipe: Vec2,
    /// Height of the ground strip along the bottom of the view.
    pub ground_height: f32,
}

impl SpriteMetrics {
    /// Width of a barrier pair.
    pub fn pipe_width(&self) -> f32 {
        self.pipe.x
    }

    /// Longest segment that can be cut from the pipe sprite.
    pub fn pipe_height(&self) -> i32 {
        self.pipe.y as i32
    }
}

impl Default for SpriteMetrics {
    /// Sizes of the classic bluebird / green pipe / base sprite set.
    fn default() -> Self {
        Self {
            player: Vec2::new(34.0, 24.0),
            pipe: Vec2::new(52.0, 320.0),
            ground_height: 112.0,
        }
    }
}
