//! Per-tick orchestration of a round: player, barriers, collisions, score.
//!
//! [`RoundController`] is the only type the host talks to. The host feeds it
//! input events in arrival order, calls [`RoundController::tick`] exactly once
//! per clock tick, and reads a [`RenderSnapshot`] back for drawing.

use super::obstacles::{Obstacle, ObstacleField, SpawnRules};
use super::player::PlayerBody;
use super::score::ScoreCounter;
use super::snapshot::{BarrierRects, PlayerPose, RenderSnapshot};
use crate::audio::{AudioCue, AudioSink};
use crate::core::assets::SpriteMetrics;
use crate::core::config::{ConfigError, GameConfig};
use crate::core::geometry::Rect;
use rand::Rng;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    Playing,
    /// Latched after a crash; only a restart request leaves it.
    RoundOver,
}

/// Input delivered by the host between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Quit the game.
    Close,
    /// Flap.
    Press,
    /// Start a new round. Ignored while playing.
    RestartRequest,
}

/// What the host should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    Continue,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CrashCause {
    Ground,
    Obstacle,
}

/// What happened during one tick.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickResult {
    /// False when the round was already over and nothing moved.
    pub advanced: bool,
    pub spawned: bool,
    /// Barriers passed this tick.
    pub scored: u32,
    pub crash: Option<CrashCause>,
}

pub struct RoundController {
    config: GameConfig,
    metrics: SpriteMetrics,
    ground: Rect,
    player: PlayerBody,
    field: ObstacleField,
    score: ScoreCounter,
    state: RoundState,
    crash: Option<CrashCause>,
    backdrop_offset: f32,
    round_ticks: u64,
    rounds_played: u32,
}

impl RoundController {
    /// Validate `config` and set up the first round.
    pub fn new(config: GameConfig, metrics: SpriteMetrics) -> Result<Self, ConfigError> {
        config.validate(&metrics)?;

        let ground = config.ground_rect(&metrics);
        let player = PlayerBody::new(&config, &metrics);
        let field = ObstacleField::new(SpawnRules::new(&config, &metrics));

        Ok(Self {
            config,
            metrics,
            ground,
            player,
            field,
            score: ScoreCounter::new(),
            state: RoundState::Playing,
            crash: None,
            backdrop_offset: 0.0,
            round_ticks: 0,
            rounds_played: 1,
        })
    }

    pub fn handle_input(&mut self, event: InputEvent, audio: &mut dyn AudioSink) -> InputOutcome {
        match (event, self.state) {
            (InputEvent::Close, _) => return InputOutcome::Close,
            (InputEvent::Press, RoundState::Playing) => self.player.flap(audio),
            (InputEvent::RestartRequest, RoundState::RoundOver) => self.restart(audio),
            (InputEvent::Press, RoundState::RoundOver)
            | (InputEvent::RestartRequest, RoundState::Playing) => {}
        }
        InputOutcome::Continue
    }

    /// Advance the round by one fixed step. Does nothing once the round is over.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, audio: &mut dyn AudioSink) -> TickResult {
        if self.state == RoundState::RoundOver {
            return TickResult::default();
        }

        let mut result = TickResult {
            advanced: true,
            ..Default::default()
        };

        self.player.advance();
        if self.field.spawn_due() {
            result.spawned = self.field.try_spawn(rng);
        }
        self.field.advance(self.config.scroll_speed);
        self.scroll_backdrop();

        let hitbox = self.player.hitbox();
        result.crash = if self.ground.intersects(&hitbox) {
            Some(CrashCause::Ground)
        } else if self.field.collides_with(&hitbox) {
            Some(CrashCause::Obstacle)
        } else {
            None
        };

        match result.crash {
            Some(cause) => self.end_round(cause, audio),
            None => {
                result.scored = self.field.score_passed(self.player.center().x);
                for _ in 0..result.scored {
                    self.score.increment(audio);
                }
                if result.scored > 0 {
                    tracing::debug!(score = self.score.value(), "barrier passed");
                }
            }
        }

        self.field.prune_offscreen();
        self.round_ticks += 1;
        result
    }

    fn scroll_backdrop(&mut self) {
        self.backdrop_offset -= self.config.scroll_speed;
        if self.backdrop_offset <= -self.config.view_width {
            self.backdrop_offset += self.config.view_width;
        }
    }

    fn end_round(&mut self, cause: CrashCause, audio: &mut dyn AudioSink) {
        self.state = RoundState::RoundOver;
        self.crash = Some(cause);
        audio.play(AudioCue::Collision);
        tracing::info!(
            score = self.score.value(),
            ticks = self.round_ticks,
            ?cause,
            "round over"
        );
    }

    fn restart(&mut self, audio: &mut dyn AudioSink) {
        self.field.reset();
        self.player = PlayerBody::new(&self.config, &self.metrics);
        self.score.reset();
        self.state = RoundState::Playing;
        self.crash = None;
        self.round_ticks = 0;
        self.rounds_played += 1;
        audio.play(AudioCue::Restart);
        tracing::debug!(round = self.rounds_played, "round restarted");
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_round_over(&self) -> bool {
        self.state == RoundState::RoundOver
    }

    pub fn crash_cause(&self) -> Option<CrashCause> {
        self.crash
    }

    pub fn player(&self) -> &PlayerBody {
        &self.player
    }

    pub fn obstacles(&self) -> &ObstacleField {
        &self.field
    }

    /// Place a barrier directly, bypassing the spawn timer.
    pub fn insert_obstacle(&mut self, obstacle: Obstacle) {
        self.field.push(obstacle);
    }

    pub fn score(&self) -> &ScoreCounter {
        &self.score
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn metrics(&self) -> &SpriteMetrics {
        &self.metrics
    }

    pub fn ground(&self) -> Rect {
        self.ground
    }

    /// Ticks simulated since the current round began.
    pub fn round_ticks(&self) -> u64 {
        self.round_ticks
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot {
            player: PlayerPose {
                position: self.player.position(),
                rotation: self.player.rotation(),
                pose: self.player.pose(),
                phase: self.player.phase(),
                hitbox: self.player.hitbox(),
            },
            obstacles: self
                .field
                .iter()
                .map(|o| BarrierRects {
                    top: o.top_rect(),
                    bottom: o.bottom_rect(),
                    scored: o.is_scored(),
                })
                .collect(),
            score: self.score.value(),
            digits: self.score.digits(),
            round_over: self.is_round_over(),
            ground: self.ground,
            backdrop_offset: self.backdrop_offset,
            view_width: self.config.view_width,
            view_height: self.config.view_height,
        }
    }
}
