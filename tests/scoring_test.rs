//! Integration tests for barrier passing and the score readout.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::game::{Obstacle, RoundController, ScoreCounter};
use skyflap::{AudioCue, GameConfig, SpriteMetrics};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn new_round() -> RoundController {
    RoundController::new(GameConfig::default(), SpriteMetrics::default()).unwrap()
}

/// A barrier just behind the player whose gap (200..300) surrounds the
/// spawn height, so it passes on the next tick without a collision.
fn passable_barrier(x: f32) -> Obstacle {
    Obstacle::new(x, 52.0, 200, 100, 100)
}

#[test]
fn test_three_passes_read_three() {
    let mut round = new_round();
    let mut rng = test_rng();
    let mut cues: Vec<AudioCue> = Vec::new();

    for x in [10.0, 14.0, 18.0] {
        round.insert_obstacle(passable_barrier(x));
    }

    let result = round.tick(&mut rng, &mut cues);
    assert_eq!(result.crash, None);
    assert_eq!(result.scored, 3);
    assert_eq!(round.score().value(), 3);
    assert_eq!(round.score().digits(), vec![3]);
    assert_eq!(cues.iter().filter(|c| **c == AudioCue::Score).count(), 3);
}

#[test]
fn test_passed_barrier_scores_once() {
    let mut round = new_round();
    let mut rng = test_rng();

    round.insert_obstacle(passable_barrier(10.0));
    round.tick(&mut rng, &mut ());
    assert_eq!(round.score().value(), 1);

    // Still inside the warm-up, so nothing else can happen to the player.
    for _ in 0..12 {
        let result = round.tick(&mut rng, &mut ());
        assert_eq!(result.scored, 0);
        assert_eq!(result.crash, None);
    }
    assert_eq!(round.score().value(), 1);
}

#[test]
fn test_barrier_ahead_does_not_score() {
    let mut round = new_round();
    let mut rng = test_rng();

    // Right edge at 200, far ahead of the player's center.
    round.insert_obstacle(passable_barrier(148.0));
    round.tick(&mut rng, &mut ());
    assert_eq!(round.score().value(), 0);
    assert!(round.obstacles().iter().all(|o| !o.is_scored()));
}

#[test]
fn test_carry_at_nine() {
    let mut score = ScoreCounter::new();
    let mut cues: Vec<AudioCue> = Vec::new();
    for _ in 0..9 {
        score.increment(&mut cues);
    }
    assert_eq!(score.digits(), vec![9]);

    score.increment(&mut cues);
    assert_eq!(score.value(), 10);
    assert_eq!(score.digits(), vec![1, 0]);
    assert_eq!(cues.len(), 10);
}

#[test]
fn test_digits_decode_to_value() {
    let mut score = ScoreCounter::new();
    let checkpoints = [0u32, 9, 10, 99, 100, 999, 1000];

    for target in checkpoints {
        while score.value() < target {
            score.increment(&mut ());
        }
        let digits = score.digits();
        let decoded = digits.iter().fold(0u32, |acc, d| acc * 10 + *d as u32);
        assert_eq!(decoded, target);
        assert_eq!(digits.len(), target.to_string().len());
        assert!(target == 0 || digits[0] != 0, "no leading zero for {}", target);
    }
}

#[test]
fn test_restart_clears_score() {
    let mut round = new_round();
    let mut rng = test_rng();

    round.insert_obstacle(passable_barrier(10.0));
    round.tick(&mut rng, &mut ());
    assert_eq!(round.score().value(), 1);

    // Fall into the ground, then restart.
    while round.tick(&mut rng, &mut ()).crash.is_none() {}
    round.handle_input(skyflap::InputEvent::RestartRequest, &mut ());
    assert_eq!(round.score().value(), 0);
    assert_eq!(round.snapshot().digits, vec![0]);
}
