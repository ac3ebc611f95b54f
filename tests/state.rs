use bevy_ecs::world::World;
use pretty_assertions::assert_eq;

use flappy::audio::Sound;
use flappy::events::{GameCommand, GameEvent};
use flappy::scores::SubmitControl;
use flappy::systems::{AudioEvent, AudioState, Bird, FrameCount, GameStage, GlobalState, PipePair, PipeStream, Screen, ScoreResource};

mod common;
use common::{drain_audio, send, sim_world, start_session, tick, ticks, TEST_SEED};

#[test]
fn test_initial_stage_is_menu() {
    let (world, _schedule) = sim_world(TEST_SEED);
    assert_eq!(*world.resource::<GameStage>(), GameStage::StartMenu);
}

#[test]
fn test_screen_projection() {
    assert_eq!(GameStage::StartMenu.screen(), Screen::Menu);
    assert_eq!(GameStage::Playing.screen(), Screen::Playing);
    assert_eq!(GameStage::GameOver { die_cue_ticks: None }.screen(), Screen::GameOver);
    assert_eq!(GameStage::HighScores.screen(), Screen::HighScores);
}

#[test]
fn test_start_resets_session_state() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);

    // Dirty every piece of session state, as a finished session would.
    world.resource_mut::<Bird>().y = 10.0;
    world.resource_mut::<PipeStream>().push(PipePair { x: 100.0, y: -200.0 });
    *world.resource_mut::<ScoreResource>() = ScoreResource { current: 5, high: 9 };
    world.resource_mut::<FrameCount>().0 = 777;
    *world.resource_mut::<SubmitControl>() = SubmitControl::Accepted;

    start_session(&mut world, &mut schedule);

    assert_eq!(*world.resource::<Bird>(), Bird::default());
    assert!(world.resource::<PipeStream>().is_empty());
    let score = *world.resource::<ScoreResource>();
    assert_eq!(score.current, 0);
    assert_eq!(score.high, 9);
    assert_eq!(world.resource::<FrameCount>().0, 0);
    assert_eq!(*world.resource::<SubmitControl>(), SubmitControl::Ready);
}

#[test]
fn test_scores_view_reachable_only_from_menu() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);

    send(&mut world, GameCommand::ShowScores);
    tick(&mut world, &mut schedule);
    assert_eq!(*world.resource::<GameStage>(), GameStage::HighScores);

    send(&mut world, GameCommand::BackToMenu);
    tick(&mut world, &mut schedule);
    assert_eq!(*world.resource::<GameStage>(), GameStage::StartMenu);

    // An active session ignores the scores command entirely.
    start_session(&mut world, &mut schedule);
    send(&mut world, GameCommand::ShowScores);
    tick(&mut world, &mut schedule);
    assert!(world.resource::<GameStage>().playing());
}

#[test]
fn test_game_over_flow_and_restart() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);
    start_session(&mut world, &mut schedule);

    fn game_over(world: &mut World) {
        world.send_event(GameEvent::GameOver);
    }

    game_over(&mut world);
    tick(&mut world, &mut schedule);
    assert!(matches!(*world.resource::<GameStage>(), GameStage::GameOver { .. }));

    // Restart straight into a fresh session.
    send(&mut world, GameCommand::Start);
    tick(&mut world, &mut schedule);
    assert!(world.resource::<GameStage>().playing());

    // Or back out to the menu.
    game_over(&mut world);
    tick(&mut world, &mut schedule);
    send(&mut world, GameCommand::BackToMenu);
    tick(&mut world, &mut schedule);
    assert_eq!(*world.resource::<GameStage>(), GameStage::StartMenu);
}

/// Triggering game over repeatedly, in the same tick or later ones, produces
/// exactly one transition and one pair of cues.
#[test]
fn test_game_over_is_idempotent() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);
    start_session(&mut world, &mut schedule);
    drain_audio(&mut world);

    world.send_event(GameEvent::GameOver);
    world.send_event(GameEvent::GameOver);
    tick(&mut world, &mut schedule);

    let hits = drain_audio(&mut world);
    assert_eq!(hits, vec![AudioEvent::PlaySound(Sound::Hit)]);
    let frozen_bird = *world.resource::<Bird>();

    // Still game over, still silent about it.
    world.send_event(GameEvent::GameOver);
    tick(&mut world, &mut schedule);
    assert!(drain_audio(&mut world).is_empty());
    assert_eq!(*world.resource::<Bird>(), frozen_bird);

    // The delayed die cue arrives once, on schedule, and never again.
    let mut cues = Vec::new();
    for _ in 0..20 {
        world.send_event(GameEvent::GameOver);
        tick(&mut world, &mut schedule);
        cues.extend(drain_audio(&mut world));
    }
    assert_eq!(cues, vec![AudioEvent::PlaySound(Sound::Die)]);
}

#[test]
fn test_frame_counter_runs_while_idle() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);

    ticks(&mut world, &mut schedule, 7);
    assert_eq!(world.resource::<FrameCount>().0, 7);

    // Session start rewinds the counter.
    start_session(&mut world, &mut schedule);
    assert_eq!(world.resource::<FrameCount>().0, 0);
}

#[test]
fn test_exit_command_flags_loop() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);
    assert!(!world.resource::<GlobalState>().exit);

    send(&mut world, GameCommand::Exit);
    tick(&mut world, &mut schedule);
    assert!(world.resource::<GlobalState>().exit);
}

#[test]
fn test_mute_command_toggles() {
    let (mut world, mut schedule) = sim_world(TEST_SEED);

    send(&mut world, GameCommand::MuteAudio);
    tick(&mut world, &mut schedule);
    assert!(world.resource::<AudioState>().muted);

    send(&mut world, GameCommand::MuteAudio);
    tick(&mut world, &mut schedule);
    assert!(!world.resource::<AudioState>().muted);
}
