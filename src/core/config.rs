//! Game configuration and startup validation.
//!
//! Every tunable the engine reads lives in [`GameConfig`]. The struct is built
//! once (defaults, optionally overridden from a JSON file), validated against
//! the sprite metrics, and then shared immutably with the round controller.

use crate::core::assets::SpriteMetrics;
use crate::core::constants::*;
use crate::core::geometry::{Rect, Vec2};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Reasons a configuration is rejected before any round starts.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{field} must be positive")]
    NonPositive { field: &'static str },

    #[error("{field} must not be negative")]
    Negative { field: &'static str },

    #[error("hitbox_lenience must be greater than 1, got {value}")]
    LenienceTooSmall { value: f32 },

    #[error("spawn spacing {min_distance} + {spawn_jitter} is too wide")]
    SpawnSpacingTooWide { min_distance: i32, spawn_jitter: i32 },

    #[error("gap range {min}..={max} is empty")]
    GapRange { min: i32, max: i32 },

    #[error(
        "playable height {playable_height} cannot fit a {max_gap} gap between two pipes of at least {min_pipe_len}"
    )]
    UnsatisfiablePipeBounds {
        playable_height: i32,
        max_gap: i32,
        min_pipe_len: i32,
    },

    #[error("top pipe may need {needed}px but the pipe sprite is only {available}px tall")]
    PipeSpriteTooShort { needed: i32, available: i32 },

    #[error("player spawn point lies outside the playable area")]
    SpawnOutsideView,
}

/// Simulation parameters. Missing fields in a config file take their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Simulation ticks per second.
    pub tick_rate: u32,
    /// Horizontal scroll per tick, in pixels.
    pub scroll_speed: f32,
    pub view_width: f32,
    pub view_height: f32,
    /// Shortest allowed top or bottom pipe segment.
    pub min_pipe_len: i32,
    /// Base horizontal distance between consecutive barriers.
    pub min_distance: i32,
    /// Extra random distance added on top of `min_distance` (inclusive).
    pub spawn_jitter: i32,
    pub gap_min: i32,
    pub gap_max: i32,
    /// Hitbox shrink divisor; the hitbox loses `1 / lenience` of each axis.
    pub hitbox_lenience: f32,
    /// Idle fall per tick as a multiple of `scroll_speed`.
    pub fall_speed_factor: f32,
    pub idle_rotation_step: i32,
    pub max_idle_rotation: i32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            scroll_speed: SCROLL_SPEED,
            view_width: VIEW_WIDTH,
            view_height: VIEW_HEIGHT,
            min_pipe_len: MIN_PIPE_LEN,
            min_distance: MIN_DISTANCE,
            spawn_jitter: SPAWN_JITTER,
            gap_min: GAP_MIN,
            gap_max: GAP_MAX,
            hitbox_lenience: HITBOX_LENIENCE,
            fall_speed_factor: FALL_SPEED_FACTOR,
            idle_rotation_step: IDLE_ROTATION_STEP,
            max_idle_rotation: MAX_IDLE_ROTATION,
        }
    }
}

impl GameConfig {
    /// Load a config from a JSON file. Omitted keys keep their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(path = %path.display(), "loaded game config");
        Ok(config)
    }

    /// Height of the area above the ground, truncated to whole pixels.
    pub fn playable_height(&self, metrics: &SpriteMetrics) -> i32 {
        (self.view_height - metrics.ground_height) as i32
    }

    /// Static ground rectangle along the bottom of the view.
    pub fn ground_rect(&self, metrics: &SpriteMetrics) -> Rect {
        Rect::new(
            0.0,
            self.view_height - metrics.ground_height,
            self.view_width,
            metrics.ground_height,
        )
    }

    /// Where a fresh player body appears.
    pub fn player_spawn(&self) -> Vec2 {
        Vec2::new(
            self.view_width / SPAWN_X_DIVISOR,
            self.view_height / SPAWN_Y_DIVISOR,
        )
    }

    /// Ticks a fresh player body hovers before gravity starts.
    pub fn warmup_ticks(&self) -> u32 {
        self.tick_rate / 2
    }

    /// Constant downward displacement per idle tick.
    pub fn fall_speed(&self) -> f32 {
        self.scroll_speed * self.fall_speed_factor
    }

    /// Reject any configuration for which obstacle construction could fail.
    pub fn validate(&self, metrics: &SpriteMetrics) -> Result<(), ConfigError> {
        let positives: [(&'static str, bool); 6] = [
            ("tick_rate", self.tick_rate > 0),
            ("scroll_speed", self.scroll_speed > 0.0),
            ("view_width", self.view_width > 0.0),
            ("view_height", self.view_height > 0.0),
            ("min_pipe_len", self.min_pipe_len > 0),
            ("gap_min", self.gap_min > 0),
        ];
        if let Some(&(field, _)) = positives.iter().find(|(_, ok)| !*ok) {
            return Err(ConfigError::NonPositive { field });
        }
        if self.hitbox_lenience.is_nan() || self.hitbox_lenience <= 1.0 {
            return Err(ConfigError::LenienceTooSmall {
                value: self.hitbox_lenience,
            });
        }
        let non_negatives = [
            ("min_distance", self.min_distance),
            ("spawn_jitter", self.spawn_jitter),
        ];
        if let Some(&(field, _)) = non_negatives.iter().find(|(_, v)| *v < 0) {
            return Err(ConfigError::Negative { field });
        }

        // The spawn timer adds the pipe width to the widest spacing.
        let widest = self
            .min_distance
            .checked_add(self.spawn_jitter)
            .and_then(|d| d.checked_add(metrics.pipe_width().ceil() as i32));
        if widest.is_none() {
            return Err(ConfigError::SpawnSpacingTooWide {
                min_distance: self.min_distance,
                spawn_jitter: self.spawn_jitter,
            });
        }

        if self.gap_min > self.gap_max {
            return Err(ConfigError::GapRange {
                min: self.gap_min,
                max: self.gap_max,
            });
        }

        // Pipe bounds in i64: extreme values must not overflow.
        // The widest gap leaves the least room for the bottom segment.
        let playable_height = self.playable_height(metrics);
        let playable = i64::from(playable_height);
        let min_pipe_len = i64::from(self.min_pipe_len);
        if playable - i64::from(self.gap_max) - min_pipe_len < min_pipe_len {
            return Err(ConfigError::UnsatisfiablePipeBounds {
                playable_height,
                max_gap: self.gap_max,
                min_pipe_len: self.min_pipe_len,
            });
        }

        // The narrowest gap with the shortest bottom gives the longest top.
        let longest_top = playable - i64::from(self.gap_min) - min_pipe_len;
        if longest_top > i64::from(metrics.pipe_height()) {
            return Err(ConfigError::PipeSpriteTooShort {
                needed: i32::try_from(longest_top).unwrap_or(i32::MAX),
                available: metrics.pipe_height(),
            });
        }

        let spawn = self.player_spawn();
        if spawn.x < 0.0 || spawn.y + metrics.player.y > playable_height as f32 {
            return Err(ConfigError::SpawnOutsideView);
        }

        Ok(())
    }
}
