//! Barrier pairs: generation, scrolling, recycling, collision and passing.

use crate::core::assets::SpriteMetrics;
use crate::core::config::GameConfig;
use crate::core::geometry::Rect;
use rand::Rng;
use std::collections::VecDeque;

/// Everything needed to build a barrier pair, fixed once per controller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnRules {
    /// New barriers appear here (the right edge of the view).
    pub spawn_x: f32,
    pub pipe_width: f32,
    pub playable_height: i32,
    pub min_pipe_len: i32,
    pub gap_min: i32,
    pub gap_max: i32,
    pub min_distance: i32,
    pub spawn_jitter: i32,
}

impl SpawnRules {
    /// Assumes `config` has already passed [`GameConfig::validate`].
    pub fn new(config: &GameConfig, metrics: &SpriteMetrics) -> Self {
        Self {
            spawn_x: config.view_width,
            pipe_width: metrics.pipe_width(),
            playable_height: config.playable_height(metrics),
            min_pipe_len: config.min_pipe_len,
            gap_min: config.gap_min,
            gap_max: config.gap_max,
            min_distance: config.min_distance,
            spawn_jitter: config.spawn_jitter,
        }
    }
}

/// One barrier pair: a top segment hanging from the ceiling and a bottom
/// segment standing on the ground, separated by a gap.
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    x: f32,
    width: f32,
    top_len: i32,
    gap: i32,
    bottom_len: i32,
    scored: bool,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, top_len: i32, gap: i32, bottom_len: i32) -> Self {
        Self {
            x,
            width,
            top_len,
            gap,
            bottom_len,
            scored: false,
        }
    }

    /// Draw a random gap and bottom length; the top takes what is left.
    pub fn generate<R: Rng + ?Sized>(rng: &mut R, rules: &SpawnRules) -> Self {
        let gap = rng.gen_range(rules.gap_min..=rules.gap_max);
        let max_bottom = rules.playable_height - gap - rules.min_pipe_len;
        debug_assert!(
            max_bottom >= rules.min_pipe_len,
            "spawn rules were not validated"
        );
        let bottom_len = rng.gen_range(rules.min_pipe_len..=max_bottom);
        let top_len = rules.playable_height - bottom_len - gap;

        Self::new(rules.spawn_x, rules.pipe_width, top_len, gap, bottom_len)
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top_len(&self) -> i32 {
        self.top_len
    }

    pub fn gap(&self) -> i32 {
        self.gap
    }

    pub fn bottom_len(&self) -> i32 {
        self.bottom_len
    }

    pub fn is_scored(&self) -> bool {
        self.scored
    }

    pub fn top_rect(&self) -> Rect {
        Rect::new(self.x, 0.0, self.width, self.top_len as f32)
    }

    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            self.x,
            (self.top_len + self.gap) as f32,
            self.width,
            self.bottom_len as f32,
        )
    }

    pub fn collides_with(&self, hitbox: &Rect) -> bool {
        self.top_rect().intersects(hitbox) || self.bottom_rect().intersects(hitbox)
    }

    fn shift(&mut self, dx: f32) {
        self.x += dx;
    }
}

/// Ordered stream of barriers plus the countdown to the next spawn.
///
/// Front is the oldest (leftmost) barrier. All barriers spawn at the same x
/// and move at the same speed, so creation order is also x order.
#[derive(Debug, Clone)]
pub struct ObstacleField {
    obstacles: VecDeque<Obstacle>,
    spawn_timer: f32,
    rules: SpawnRules,
}

impl ObstacleField {
    pub fn new(rules: SpawnRules) -> Self {
        Self {
            obstacles: VecDeque::new(),
            spawn_timer: 0.0,
            rules,
        }
    }

    pub fn rules(&self) -> &SpawnRules {
        &self.rules
    }

    pub fn spawn_timer(&self) -> f32 {
        self.spawn_timer
    }

    pub fn spawn_due(&self) -> bool {
        self.spawn_timer <= 0.0
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Obstacle> {
        self.obstacles.iter()
    }

    /// Append a fresh barrier if the timer has run out. At most one per call.
    pub fn try_spawn<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if !self.spawn_due() {
            return false;
        }
        let widest = self
            .rules
            .min_distance
            .saturating_add(self.rules.spawn_jitter);
        let spacing = rng.gen_range(self.rules.min_distance..=widest);
        self.spawn_timer = self.rules.pipe_width + spacing as f32;

        let obstacle = Obstacle::generate(rng, &self.rules);
        tracing::debug!(
            top = obstacle.top_len(),
            gap = obstacle.gap(),
            bottom = obstacle.bottom_len(),
            next_in = self.spawn_timer,
            "spawned obstacle"
        );
        self.push(obstacle);
        true
    }

    /// Append a barrier behind every existing one.
    pub fn push(&mut self, obstacle: Obstacle) {
        if let Some(last) = self.obstacles.back() {
            debug_assert!(
                last.x() <= obstacle.x(),
                "obstacle appended left of its predecessor"
            );
        }
        self.obstacles.push_back(obstacle);
    }

    /// Scroll every barrier left by `delta` and count the timer down by the same.
    pub fn advance(&mut self, delta: f32) {
        for obstacle in &mut self.obstacles {
            obstacle.shift(-delta);
        }
        self.spawn_timer -= delta;
    }

    /// Drop barriers that have fully left the view. Returns how many went.
    pub fn prune_offscreen(&mut self) -> usize {
        let mut removed = 0;
        while self
            .obstacles
            .front()
            .is_some_and(|front| front.right() <= 0.0)
        {
            self.obstacles.pop_front();
            removed += 1;
        }
        removed
    }

    pub fn collides_with(&self, hitbox: &Rect) -> bool {
        self.obstacles.iter().any(|o| o.collides_with(hitbox))
    }

    /// Mark every unscored barrier whose right edge is left of `center_x`.
    /// Returns the number newly marked; a barrier is only ever counted once.
    pub fn score_passed(&mut self, center_x: f32) -> u32 {
        let mut passed = 0;
        for obstacle in &mut self.obstacles {
            if !obstacle.scored && obstacle.right() < center_x {
                obstacle.scored = true;
                passed += 1;
            }
        }
        passed
    }

    /// Remove every barrier and make the next call to `try_spawn` fire.
    pub fn reset(&mut self) {
        self.obstacles.clear();
        self.spawn_timer = 0.0;
    }
}
