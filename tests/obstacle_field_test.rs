//! Integration tests for barrier generation across many seeds and tunings.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::game::{ObstacleField, SpawnRules};
use skyflap::{GameConfig, SpriteMetrics};

/// Drive a field for `ticks` steps, checking every barrier as it appears.
fn drive_field(config: &GameConfig, seed: u64, ticks: usize) -> usize {
    let metrics = SpriteMetrics::default();
    config.validate(&metrics).unwrap();

    let playable = config.playable_height(&metrics);
    let rules = SpawnRules::new(config, &metrics);
    let mut field = ObstacleField::new(rules);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut spawned = 0;

    for _ in 0..ticks {
        if field.spawn_due() && field.try_spawn(&mut rng) {
            spawned += 1;
            let newest = field.iter().last().unwrap();

            assert_eq!(
                newest.top_len() + newest.gap() + newest.bottom_len(),
                playable,
                "seed {}",
                seed
            );
            assert!(newest.top_len() >= config.min_pipe_len);
            assert!(newest.bottom_len() >= config.min_pipe_len);
            assert!((config.gap_min..=config.gap_max).contains(&newest.gap()));
            assert!(newest.top_len() <= metrics.pipe_height());
            assert!(!field.spawn_due());
        }

        field.advance(config.scroll_speed);
        field.prune_offscreen();

        let xs: Vec<f32> = field.iter().map(|o| o.x()).collect();
        assert!(xs.windows(2).all(|w| w[0] <= w[1]), "ordered by x");
        if let Some(first) = field.iter().next() {
            assert!(first.right() > 0.0, "offscreen barriers are pruned");
        }
    }
    spawned
}

#[test]
fn test_invariant_holds_for_many_seeds() {
    let config = GameConfig::default();
    for seed in 0..300 {
        let spawned = drive_field(&config, seed, 600);
        assert!(spawned > 0);
    }
}

#[test]
fn test_invariant_holds_for_tight_tuning() {
    // Widest gap leaves exactly MIN_PIPE_LEN for the bottom segment.
    let config = GameConfig {
        gap_min: 100,
        gap_max: 250,
        ..Default::default()
    };
    for seed in 0..100 {
        drive_field(&config, seed, 600);
    }
}

#[test]
fn test_invariant_holds_for_fast_scroll() {
    let config = GameConfig {
        scroll_speed: 11.0,
        ..Default::default()
    };
    for seed in 0..100 {
        drive_field(&config, seed, 400);
    }
}

#[test]
fn test_spacing_between_barriers() {
    // Spawn interval is pipe width + 85..=135, so consecutive left edges sit
    // between 137 and 187 units apart, rounded up to whole scroll steps.
    let config = GameConfig::default();
    let metrics = SpriteMetrics::default();
    let mut field = ObstacleField::new(SpawnRules::new(&config, &metrics));
    let mut rng = ChaCha8Rng::seed_from_u64(5);

    for _ in 0..300 {
        if field.spawn_due() {
            field.try_spawn(&mut rng);
        }
        field.advance(config.scroll_speed);
    }

    let xs: Vec<f32> = field.iter().map(|o| o.x()).collect();
    assert!(xs.len() >= 2);
    for pair in xs.windows(2) {
        let spacing = pair[1] - pair[0];
        assert!(
            (137.0..=192.0).contains(&spacing),
            "spacing {} out of range",
            spacing
        );
    }
}

#[test]
fn test_unsatisfiable_tuning_is_rejected() {
    let config = GameConfig {
        gap_max: 260,
        ..Default::default()
    };
    assert!(config.validate(&SpriteMetrics::default()).is_err());
}
