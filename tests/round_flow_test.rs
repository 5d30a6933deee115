//! Integration tests for RoundController: flap arc, crash latch, restart and
//! replay of a fixed input script.
//!
//! Uses seeded ChaCha8Rng for deterministic behavior.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use skyflap::game::{
    CrashCause, FlapPhase, InputEvent, Obstacle, RoundController, RoundState, WingPose,
};
use skyflap::{AudioCue, GameConfig, SpriteMetrics};

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn new_round() -> RoundController {
    RoundController::new(GameConfig::default(), SpriteMetrics::default()).unwrap()
}

/// Tick with no input until the round ends, returning the number of ticks.
fn run_until_crash(round: &mut RoundController, rng: &mut ChaCha8Rng, max_ticks: usize) -> usize {
    for i in 1..=max_ticks {
        if round.tick(rng, &mut ()).crash.is_some() {
            return i;
        }
    }
    panic!("round did not end within {} ticks", max_ticks);
}

#[test]
fn test_flap_follows_exact_arc() {
    let mut round = new_round();
    let mut rng = test_rng();
    let mut cues: Vec<AudioCue> = Vec::new();
    let start_y = round.player().position().y;

    round.handle_input(InputEvent::Press, &mut cues);
    assert_eq!(cues, vec![AudioCue::Flap]);

    let expected_rotation = [-20, -36, -36, -20, 0, 0];
    let expected_y_offset = [-10.0, -19.0, -27.0, -33.0, -36.0, -36.0];
    let expected_pose = [
        WingPose::Downflap,
        WingPose::Downflap,
        WingPose::Midflap,
        WingPose::Midflap,
        WingPose::Upflap,
        WingPose::Midflap,
    ];

    for tick in 0..6 {
        let result = round.tick(&mut rng, &mut cues);
        assert!(result.advanced);
        assert_eq!(result.crash, None);

        let player = round.player();
        assert_eq!(player.rotation(), expected_rotation[tick], "tick {}", tick + 1);
        assert_eq!(
            player.position().y - start_y,
            expected_y_offset[tick],
            "tick {}",
            tick + 1
        );
        assert_eq!(player.pose(), expected_pose[tick], "tick {}", tick + 1);
    }

    assert_eq!(round.player().phase(), FlapPhase::Idle);
}

#[test]
fn test_hop_then_fall_is_reproducible() {
    let mut round = new_round();
    let mut rng = test_rng();

    round.handle_input(InputEvent::Press, &mut ());
    for _ in 0..6 {
        round.tick(&mut rng, &mut ());
    }
    let after_hop = round.player().position().y;

    // Idle again: 24 px down and 4 degrees more tilt each tick.
    for i in 1..=3 {
        round.tick(&mut rng, &mut ());
        assert_eq!(round.player().position().y, after_hop + 24.0 * i as f32);
        assert_eq!(round.player().rotation(), 4 * i);
    }
}

#[test]
fn test_ground_crash_latches_until_restart() {
    let mut round = new_round();
    let mut rng = test_rng();

    let ticks = run_until_crash(&mut round, &mut rng, 200);
    // Warm-up, then five 24 px steps put the hitbox into the ground.
    assert_eq!(ticks, 20);
    assert_eq!(round.state(), RoundState::RoundOver);
    assert_eq!(round.crash_cause(), Some(CrashCause::Ground));

    let frozen = round.snapshot();
    let mut cues: Vec<AudioCue> = Vec::new();
    for _ in 0..100 {
        round.handle_input(InputEvent::Press, &mut cues);
        let result = round.tick(&mut rng, &mut cues);
        assert!(!result.advanced);
        assert_eq!(round.state(), RoundState::RoundOver);
    }
    assert!(cues.is_empty(), "presses after a crash are ignored");
    assert_eq!(round.snapshot(), frozen);

    round.handle_input(InputEvent::RestartRequest, &mut cues);
    assert_eq!(cues, vec![AudioCue::Restart]);
    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.score().value(), 0);
    assert_eq!(round.score().digits(), vec![0]);
    assert!(round.obstacles().is_empty());
    assert_eq!(round.rounds_played(), 2);

    // The new round spawns a barrier on its first tick.
    assert!(round.tick(&mut rng, &mut ()).spawned);
}

#[test]
fn test_pipe_hit_latches_without_scoring() {
    let mut round = new_round();
    let mut rng = test_rng();
    let mut cues: Vec<AudioCue> = Vec::new();

    // Already behind the player's center once scrolled, and not yet counted.
    round.insert_obstacle(Obstacle::new(10.0, 52.0, 200, 100, 100));
    // Top segment reaches y = 300, covering the hovering player.
    round.insert_obstacle(Obstacle::new(60.0, 52.0, 300, 50, 50));

    let result = round.tick(&mut rng, &mut cues);
    assert_eq!(result.crash, Some(CrashCause::Obstacle));
    assert_eq!(result.scored, 0);
    assert_eq!(round.state(), RoundState::RoundOver);
    assert_eq!(round.crash_cause(), Some(CrashCause::Obstacle));
    assert_eq!(round.score().value(), 0);
    assert!(!round.obstacles().iter().next().unwrap().is_scored());
    assert_eq!(cues, vec![AudioCue::Collision]);

    let frozen = round.snapshot();
    for _ in 0..30 {
        round.handle_input(InputEvent::Press, &mut cues);
        assert!(!round.tick(&mut rng, &mut cues).advanced);
    }
    assert_eq!(round.state(), RoundState::RoundOver);
    assert_eq!(round.crash_cause(), Some(CrashCause::Obstacle));
    assert_eq!(round.snapshot(), frozen);
    assert_eq!(cues, vec![AudioCue::Collision]);

    round.handle_input(InputEvent::RestartRequest, &mut cues);
    assert_eq!(round.state(), RoundState::Playing);
    assert_eq!(round.crash_cause(), None);
    assert_eq!(cues, vec![AudioCue::Collision, AudioCue::Restart]);
}

#[test]
fn test_crash_plays_collision_once() {
    let mut round = new_round();
    let mut rng = test_rng();
    let mut cues: Vec<AudioCue> = Vec::new();

    for _ in 0..60 {
        round.tick(&mut rng, &mut cues);
    }
    assert_eq!(
        cues.iter().filter(|c| **c == AudioCue::Collision).count(),
        1
    );
}

#[test]
fn test_close_works_in_any_state() {
    let mut round = new_round();
    let mut rng = test_rng();
    assert_eq!(
        round.handle_input(InputEvent::Close, &mut ()),
        skyflap::InputOutcome::Close
    );

    run_until_crash(&mut round, &mut rng, 200);
    assert_eq!(
        round.handle_input(InputEvent::Close, &mut ()),
        skyflap::InputOutcome::Close
    );
}

#[test]
fn test_input_script_replays_identically() {
    // (tick, input) pairs applied before the tick with that index.
    let script = [
        (3, InputEvent::Press),
        (20, InputEvent::Press),
        (26, InputEvent::Press),
        (33, InputEvent::Press),
        (40, InputEvent::Press),
        (47, InputEvent::Press),
        (55, InputEvent::Press),
    ];

    let play = || {
        let mut round = new_round();
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut frames = Vec::new();
        for tick in 0..80 {
            for (_, input) in script.iter().filter(|(at, _)| *at == tick) {
                round.handle_input(*input, &mut ());
            }
            round.tick(&mut rng, &mut ());
            frames.push(round.snapshot());
        }
        frames
    };

    assert_eq!(play(), play());
}

#[test]
fn test_different_seeds_give_different_barriers() {
    let first_gap = |seed: u64| {
        let mut round = new_round();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        round.tick(&mut rng, &mut ());
        let barrier = round.obstacles().iter().next().cloned().unwrap();
        (barrier.top_len(), barrier.gap())
    };

    let gaps: Vec<_> = (0..20).map(first_gap).collect();
    assert!(gaps.iter().any(|g| *g != gaps[0]));
}
