use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use bevy_ecs::system::RunSystemOnce;
use bevy_ecs::world::World;
use mockall::mock;
use mockall::predicate::function;
use pretty_assertions::assert_eq;

use flappy::error::ScoreError;
use flappy::events::{GameCommand, GameEvent};
use flappy::game::Game;
use flappy::scores::{
    scores_poll_system, scores_request_system, PlayerName, ScoreRecord, ScoreTransport, ScoresClient, ScoresView,
    SubmitControl,
};
use flappy::systems::{GameStage, ScoreResource};

mod common;

mock! {
    pub Transport {}

    impl ScoreTransport for Transport {
        fn fetch_scores(&self) -> Result<Vec<ScoreRecord>, ScoreError>;
        fn submit_score(&self, record: &ScoreRecord) -> Result<(), ScoreError>;
    }
}

/// Headless world wired to a mocked transport.
fn scores_world(transport: MockTransport) -> World {
    let mut world = World::default();
    Game::register_events(&mut world);
    Game::insert_simulation_resources(&mut world, Some(common::TEST_SEED));
    world.insert_non_send_resource(ScoresClient::new(Arc::new(transport)));
    world
}

/// Drains the client channel until `done` holds or a timeout expires.
fn poll_until(world: &mut World, done: impl Fn(&World) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        world.run_system_once(scores_poll_system).unwrap();
        if done(world) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for the score client");
        thread::sleep(Duration::from_millis(5));
    }
}

fn request(world: &mut World, command: GameCommand) {
    world.send_event(GameEvent::Command(command));
    world.run_system_once(scores_request_system).unwrap();
}

#[test]
fn test_fetch_populates_view() {
    let mut transport = MockTransport::new();
    transport.expect_fetch_scores().times(1).returning(|| {
        Ok(vec![
            ScoreRecord {
                name: "Kay".to_string(),
                score: 31,
            },
            ScoreRecord {
                name: "Anonymous".to_string(),
                score: 12,
            },
        ])
    });

    let mut world = scores_world(transport);
    *world.resource_mut::<GameStage>() = GameStage::HighScores;

    request(&mut world, GameCommand::ShowScores);
    assert_eq!(*world.resource::<ScoresView>(), ScoresView::Loading);
    assert!(world.resource::<ScoresView>().rows().is_empty());

    poll_until(&mut world, |w| *w.resource::<ScoresView>() != ScoresView::Loading);

    let view = world.resource::<ScoresView>();
    assert!(matches!(view, ScoresView::Loaded(records) if records.len() == 2));
    // Rank is positional, exactly as the service ordered the records.
    assert_eq!(view.rows(), vec!["#1 KAY 31".to_string(), "#2 ANONYMOUS 12".to_string()]);
}

/// Scenario E: an empty list renders exactly one placeholder row.
#[test]
fn test_empty_fetch_renders_placeholder() {
    let mut transport = MockTransport::new();
    transport.expect_fetch_scores().times(1).returning(|| Ok(vec![]));

    let mut world = scores_world(transport);
    *world.resource_mut::<GameStage>() = GameStage::HighScores;

    request(&mut world, GameCommand::ShowScores);
    poll_until(&mut world, |w| *w.resource::<ScoresView>() != ScoresView::Loading);

    assert_eq!(*world.resource::<ScoresView>(), ScoresView::Loaded(vec![]));
    assert_eq!(world.resource::<ScoresView>().rows(), vec!["NO SCORES YET!".to_string()]);
}

#[test]
fn test_failed_fetch_renders_error_placeholder() {
    let mut transport = MockTransport::new();
    transport
        .expect_fetch_scores()
        .times(1)
        .returning(|| Err(ScoreError::Status(500)));

    let mut world = scores_world(transport);
    *world.resource_mut::<GameStage>() = GameStage::HighScores;

    request(&mut world, GameCommand::ShowScores);
    poll_until(&mut world, |w| *w.resource::<ScoresView>() != ScoresView::Loading);

    assert_eq!(*world.resource::<ScoresView>(), ScoresView::Failed);
    assert_eq!(
        world.resource::<ScoresView>().rows(),
        vec!["ERROR LOADING SCORES".to_string()]
    );
}

/// Scenario D, success half: the submit control is disabled permanently and
/// its label changes, and a second submit command is a no-op.
#[test]
fn test_successful_submit_disables_control() {
    let mut transport = MockTransport::new();
    transport
        .expect_submit_score()
        .times(1)
        .with(function(|record: &ScoreRecord| {
            record.name == "Anonymous" && record.score == 7
        }))
        .returning(|_| Ok(()));

    let mut world = scores_world(transport);
    *world.resource_mut::<GameStage>() = GameStage::GameOver { die_cue_ticks: None };
    world.resource_mut::<ScoreResource>().current = 7;

    request(&mut world, GameCommand::SubmitScore);
    assert_eq!(*world.resource::<SubmitControl>(), SubmitControl::InFlight);
    assert!(!world.resource::<SubmitControl>().enabled());

    poll_until(&mut world, |w| *w.resource::<SubmitControl>() != SubmitControl::InFlight);

    let control = *world.resource::<SubmitControl>();
    assert_eq!(control, SubmitControl::Accepted);
    assert!(!control.enabled());
    assert_eq!(control.label(), "SUBMITTED!");

    // Permanently disabled for this game-over screen: mockall would panic on
    // a second transport call.
    request(&mut world, GameCommand::SubmitScore);
    assert_eq!(*world.resource::<SubmitControl>(), SubmitControl::Accepted);
}

/// Scenario D, failure half: the failure is surfaced and the control stays
/// enabled for retry.
#[test]
fn test_failed_submit_allows_retry() {
    let mut transport = MockTransport::new();
    transport
        .expect_submit_score()
        .times(1)
        .returning(|_| Err(ScoreError::Rejected("error".to_string())));

    let mut world = scores_world(transport);
    *world.resource_mut::<GameStage>() = GameStage::GameOver { die_cue_ticks: None };
    world.resource_mut::<ScoreResource>().current = 3;

    request(&mut world, GameCommand::SubmitScore);
    poll_until(&mut world, |w| *w.resource::<SubmitControl>() != SubmitControl::InFlight);

    let control = *world.resource::<SubmitControl>();
    assert_eq!(control, SubmitControl::Failed);
    assert!(control.enabled());
}

#[test]
fn test_submit_ignored_outside_game_over() {
    // The transport expects no calls at all.
    let transport = MockTransport::new();
    let mut world = scores_world(transport);

    request(&mut world, GameCommand::SubmitScore);
    assert_eq!(*world.resource::<SubmitControl>(), SubmitControl::Ready);
}

#[test]
fn test_player_name_defaults_to_anonymous() {
    assert_eq!(PlayerName::default().submission_name(), "Anonymous");
    assert_eq!(PlayerName("   ".to_string()).submission_name(), "Anonymous");
    assert_eq!(PlayerName(" Kay ".to_string()).submission_name(), "Kay");
}

#[test]
fn test_score_record_wire_format() {
    let record = ScoreRecord {
        name: "Kay".to_string(),
        score: 31,
    };
    assert_eq!(
        serde_json::to_value(&record).unwrap(),
        serde_json::json!({ "name": "Kay", "score": 31 })
    );
}
