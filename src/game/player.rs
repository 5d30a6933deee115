//! The player-controlled body: fall physics, the flap hop and its hitbox.

use crate::audio::{AudioCue, AudioSink};
use crate::core::assets::SpriteMetrics;
use crate::core::config::GameConfig;
use crate::core::constants::FLAP_ANIM_TICKS;
use crate::core::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};

/// Animation state of the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlapPhase {
    /// Falling under constant speed, nose tipping down.
    Idle,
    /// Playing the finite flap hop.
    Flapping,
}

/// Which of the three wing frames the presentation layer should draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WingPose {
    Upflap,
    Midflap,
    Downflap,
}

/// Vertical displacement for flap tick `tick`: `trunc(0.4 * (t + 5) * (t - 5))`.
///
/// Computed in integers so the hop is exact: -10, -9, -8, -6, -3, 0.
pub fn flap_displacement(tick: u32) -> i32 {
    let t = tick as i32;
    2 * (t + 5) * (t - 5) / 5
}

/// Rotation change applied once the flap tick has advanced to `tick`:
/// `-2 * t * (t - 3) * (t - 6)`. Over ticks 1..=6 it sums to zero.
pub fn flap_rotation_step(tick: u32) -> i32 {
    let t = tick as i32;
    -2 * t * (t - 3) * (t - 6)
}

fn pose_for_tick(tick: u32) -> WingPose {
    match tick {
        0..=1 => WingPose::Downflap,
        2..=3 => WingPose::Midflap,
        _ => WingPose::Upflap,
    }
}

#[derive(Debug, Clone, Copy)]
struct Tuning {
    fall_speed: f32,
    rotation_step: i32,
    max_rotation: i32,
    hitbox_lenience: f32,
}

#[derive(Debug, Clone)]
pub struct PlayerBody {
    position: Vec2,
    /// Degrees clockwise, whole steps only.
    rotation: i32,
    phase: FlapPhase,
    pose: WingPose,
    anim_tick: u32,
    /// Ticks left before gravity first applies. Cleared by any flap.
    warmup_ticks: u32,
    size: Vec2,
    tuning: Tuning,
}

impl PlayerBody {
    pub fn new(config: &GameConfig, metrics: &SpriteMetrics) -> Self {
        Self {
            position: config.player_spawn(),
            rotation: 0,
            phase: FlapPhase::Idle,
            pose: WingPose::Midflap,
            anim_tick: 0,
            warmup_ticks: config.warmup_ticks(),
            size: metrics.player,
            tuning: Tuning {
                fall_speed: config.fall_speed(),
                rotation_step: config.idle_rotation_step,
                max_rotation: config.max_idle_rotation,
                hitbox_lenience: config.hitbox_lenience,
            },
        }
    }

    /// Start a new hop from the current height.
    pub fn flap(&mut self, audio: &mut dyn AudioSink) {
        audio.play(AudioCue::Flap);
        self.warmup_ticks = 0;
        self.phase = FlapPhase::Flapping;
        self.anim_tick = 0;
        self.pose = WingPose::Downflap;
        self.rotation = 0;
    }

    /// Run one tick of motion.
    pub fn advance(&mut self) {
        if self.warmup_ticks > 0 {
            self.warmup_ticks -= 1;
            return;
        }

        match self.phase {
            FlapPhase::Idle => {
                if self.rotation < self.tuning.max_rotation {
                    self.rotation =
                        (self.rotation + self.tuning.rotation_step).min(self.tuning.max_rotation);
                }
                self.position.y += self.tuning.fall_speed;
            }
            FlapPhase::Flapping => {
                self.pose = pose_for_tick(self.anim_tick);
                self.position.y += flap_displacement(self.anim_tick) as f32;
                self.anim_tick += 1;
                self.rotation += flap_rotation_step(self.anim_tick);

                if self.anim_tick >= FLAP_ANIM_TICKS {
                    self.phase = FlapPhase::Idle;
                    self.pose = WingPose::Midflap;
                }
            }
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn rotation(&self) -> i32 {
        self.rotation
    }

    pub fn phase(&self) -> FlapPhase {
        self.phase
    }

    pub fn pose(&self) -> WingPose {
        self.pose
    }

    pub fn anim_tick(&self) -> u32 {
        self.anim_tick
    }

    pub fn is_warming_up(&self) -> bool {
        self.warmup_ticks > 0
    }

    /// Visual bounds of the rotated sprite.
    pub fn bounds(&self) -> Rect {
        Rect::rotated_bounds(self.position, self.size, self.rotation as f32)
    }

    /// Position offset by half the visual bounds. Only used for the
    /// barrier-passed test.
    pub fn center(&self) -> Vec2 {
        let bounds = self.bounds();
        Vec2::new(
            self.position.x + bounds.width / 2.0,
            self.position.y + bounds.height / 2.0,
        )
    }

    /// Collision rectangle: the visual bounds shrunk by `1 / lenience` on
    /// each axis. Late in a hop the wings are raised, so the box sits in the
    /// lower half instead of the middle.
    pub fn hitbox(&self) -> Rect {
        let bounds = self.bounds();
        let w_sub = bounds.width / self.tuning.hitbox_lenience;
        let h_sub = bounds.height / self.tuning.hitbox_lenience;

        let late_in_flap = self.phase == FlapPhase::Flapping && self.anim_tick > 4;
        let top_offset = if late_in_flap { h_sub } else { h_sub / 2.0 };

        Rect::new(
            bounds.left + w_sub / 2.0,
            bounds.top + top_offset,
            bounds.width - w_sub,
            bounds.height - h_sub,
        )
    }
}
