//! Read-only view of a round for the presentation layer.

use super::player::{FlapPhase, WingPose};
use crate::core::geometry::{Rect, Vec2};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerPose {
    pub position: Vec2,
    /// Degrees clockwise.
    pub rotation: i32,
    pub pose: WingPose,
    pub phase: FlapPhase,
    pub hitbox: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarrierRects {
    pub top: Rect,
    pub bottom: Rect,
    pub scored: bool,
}

/// Everything needed to draw one frame, oldest barrier first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSnapshot {
    pub player: PlayerPose,
    pub obstacles: Vec<BarrierRects>,
    pub score: u32,
    /// Most-significant digit first.
    pub digits: Vec<u8>,
    pub round_over: bool,
    pub ground: Rect,
    /// Horizontal scroll of the backdrop, in `(-view_width, 0]`.
    pub backdrop_offset: f32,
    pub view_width: f32,
    pub view_height: f32,
}
