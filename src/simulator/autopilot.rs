//! A simple bot that plays through the same input path as a human.

use crate::game::{FlapPhase, InputEvent, RoundController};

/// Flaps whenever the player's center sinks below an aim point inside the
/// next gap it has not yet passed. Never flaps mid-arc.
#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    aim_ratio: f32,
}

impl Autopilot {
    pub fn new(aim_ratio: f32) -> Self {
        Self {
            aim_ratio: aim_ratio.clamp(0.0, 1.0),
        }
    }

    /// World y the bot tries to stay above.
    pub fn aim_y(&self, round: &RoundController) -> f32 {
        let center = round.player().center();
        let next = round
            .obstacles()
            .iter()
            .find(|o| !o.is_scored() && o.right() >= center.x);

        match next {
            Some(obstacle) => obstacle.top_len() as f32 + obstacle.gap() as f32 * self.aim_ratio,
            None => round.config().playable_height(round.metrics()) as f32 / 2.0,
        }
    }

    /// Input for the coming tick, if any.
    pub fn decide(&self, round: &RoundController) -> Option<InputEvent> {
        if round.is_round_over() || round.player().phase() == FlapPhase::Flapping {
            return None;
        }
        (round.player().center().y > self.aim_y(round)).then_some(InputEvent::Press)
    }
}
