// Integration tests for the frame-paced playback loop

use sortty::playback::{
    Command, Playback, PlaybackConfig, PlaybackError, MAX_STEPS_PER_FRAME, MIN_STEPS_PER_FRAME,
};
use sortty::sort::{validate_permutation, Algorithm, SortError, SortStats};

fn start_playback(item_count: usize, steps_per_frame: usize, algorithm: Algorithm) -> Playback {
    Playback::new(PlaybackConfig {
        item_count,
        steps_per_frame,
        seed: Some(2024),
        algorithm,
        ..PlaybackConfig::default()
    })
    .expect("valid config")
}

#[test]
fn test_initial_session_is_a_fresh_permutation() {
    let playback = start_playback(20, 10, Algorithm::Quick);
    let session = playback.session();

    assert_eq!(session.values().len(), 20);
    assert!(validate_permutation(session.values()).is_ok());
    assert_eq!(session.stats(), &SortStats::default());
    assert!(!playback.is_paused());
    assert!(playback.highlight().is_none());
}

#[test]
fn test_tick_pulls_steps_per_frame() {
    let mut playback = start_playback(20, 7, Algorithm::Bubble);
    let report = playback.tick();

    assert_eq!(report.pulled, 7);
    assert!(!report.finished);
    assert_eq!(playback.session().steps_taken(), 7);
    assert!(playback.highlight().is_some());
}

#[test]
fn test_exhaustion_pauses_and_clears_highlight() {
    let mut playback = start_playback(5, 100, Algorithm::Selection);

    let report = playback.tick();
    assert!(report.finished);
    assert!(report.pulled < 100);
    assert!(playback.is_paused());
    assert!(playback.highlight().is_none());
    assert!(playback.session().is_exhausted());
    assert_eq!(playback.session().values(), &[1, 2, 3, 4, 5]);

    // Paused: further frames pull nothing
    assert_eq!(playback.tick().pulled, 0);
}

#[test]
fn test_unpausing_a_finished_session_pauses_again() {
    let mut playback = start_playback(4, 100, Algorithm::Insertion);
    playback.tick();
    let stats = *playback.session().stats();

    playback.apply(Command::TogglePause).unwrap();
    let report = playback.tick();
    assert_eq!(report.pulled, 0);
    assert!(report.finished);
    assert!(playback.is_paused());
    assert_eq!(playback.session().stats(), &stats);
}

#[test]
fn test_pause_blocks_pulls_without_regenerating() {
    let mut playback = start_playback(30, 5, Algorithm::Heap);
    playback.tick();
    let values = playback.session().values().to_vec();
    let stats = *playback.session().stats();

    playback.apply(Command::TogglePause).unwrap();
    assert!(playback.is_paused());
    assert_eq!(playback.tick().pulled, 0);
    assert_eq!(playback.session().values(), values.as_slice());
    assert_eq!(playback.session().stats(), &stats);

    playback.apply(Command::TogglePause).unwrap();
    assert_eq!(playback.tick().pulled, 5);
}

#[test]
fn test_switch_discards_session_and_resets_counters() {
    let mut playback = start_playback(25, 40, Algorithm::Quick);
    playback.tick();
    assert!(playback.session().stats().comparisons > 0);

    playback.apply(Command::TogglePause).unwrap();
    playback.apply(Command::NextAlgorithm).unwrap();

    assert_eq!(playback.algorithm(), Algorithm::Heap);
    assert_eq!(playback.session().stats(), &SortStats::default());
    assert_eq!(playback.session().steps_taken(), 0);
    assert!(validate_permutation(playback.session().values()).is_ok());
    assert!(!playback.is_paused());
    assert!(playback.highlight().is_none());
}

#[test]
fn test_switch_cycles_back_to_first_algorithm() {
    let mut playback = start_playback(10, 1, Algorithm::Quick);
    for _ in 0..Algorithm::ALL.len() {
        playback.apply(Command::NextAlgorithm).unwrap();
    }
    assert_eq!(playback.algorithm(), Algorithm::Quick);
}

#[test]
fn test_reset_keeps_algorithm() {
    let mut playback = start_playback(6, 100, Algorithm::Insertion);
    playback.tick();
    assert!(playback.session().is_exhausted());

    playback.apply(Command::Reset).unwrap();
    assert_eq!(playback.algorithm(), Algorithm::Insertion);
    assert!(!playback.session().is_exhausted());
    assert_eq!(playback.session().stats(), &SortStats::default());
    assert!(!playback.is_paused());
}

#[test]
fn test_speed_is_clamped() {
    let mut playback = start_playback(10, MAX_STEPS_PER_FRAME - 1, Algorithm::Quick);
    playback.apply(Command::SpeedUp).unwrap();
    playback.apply(Command::SpeedUp).unwrap();
    assert_eq!(playback.steps_per_frame(), MAX_STEPS_PER_FRAME);

    let mut playback = playback_with_speed(2);
    playback.apply(Command::SpeedDown).unwrap();
    playback.apply(Command::SpeedDown).unwrap();
    assert_eq!(playback.steps_per_frame(), MIN_STEPS_PER_FRAME);
}

fn playback_with_speed(steps_per_frame: usize) -> Playback {
    start_playback(10, steps_per_frame, Algorithm::Bubble)
}

#[test]
fn test_quit_sets_flag() {
    let mut playback = start_playback(10, 1, Algorithm::Quick);
    assert!(!playback.should_quit());
    playback.apply(Command::Quit).unwrap();
    assert!(playback.should_quit());
}

#[test]
fn test_seed_makes_permutations_reproducible() {
    let first = start_playback(40, 1, Algorithm::Quick);
    let second = start_playback(40, 1, Algorithm::Quick);
    assert_eq!(first.session().values(), second.session().values());
}

#[test]
fn test_invalid_config_fails_before_any_step() {
    let result = Playback::new(PlaybackConfig {
        item_count: 0,
        ..PlaybackConfig::default()
    });
    assert!(matches!(
        result,
        Err(PlaybackError::Sort(SortError::InvalidItemCount(0)))
    ));

    let result = Playback::new(PlaybackConfig {
        steps_per_frame: 0,
        ..PlaybackConfig::default()
    });
    assert!(matches!(
        result,
        Err(PlaybackError::StepsPerFrameOutOfRange { value: 0, .. })
    ));
}
