//! The session state machine and its bookkeeping resources.

use std::mem::discriminant;

use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::ResMut,
};
use tracing::{debug, info};

use crate::audio::Sound;
use crate::constants::cues;
use crate::events::{GameCommand, GameEvent};
use crate::scores::SubmitControl;
use crate::systems::{AudioEvent, Bird, PipeStream};

/// A resource to track the overall stage of the game from a high-level perspective.
#[derive(Resource, Debug, PartialEq, Eq, Clone, Copy)]
pub enum GameStage {
    /// The idle menu screen. Sessions and the score list both start here.
    StartMenu,
    /// The main gameplay loop is active.
    Playing,
    /// The session has ended; simulation updates are frozen and the final
    /// score is surfaced for display/submission. `die_cue_ticks` counts down
    /// to the delayed "die" cue, then stays `None`.
    GameOver { die_cue_ticks: Option<u32> },
    /// Viewing the remote high-score list.
    HighScores,
}

impl Default for GameStage {
    fn default() -> Self {
        Self::StartMenu
    }
}

/// The screen the rendering layer should present for a stage.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Screen {
    Menu,
    Playing,
    GameOver,
    HighScores,
}

impl GameStage {
    /// Projection consumed by the rendering layer; the simulation never
    /// reads it.
    pub fn screen(&self) -> Screen {
        match self {
            GameStage::StartMenu => Screen::Menu,
            GameStage::Playing => Screen::Playing,
            GameStage::GameOver { .. } => Screen::GameOver,
            GameStage::HighScores => Screen::HighScores,
        }
    }

    pub fn playing(&self) -> bool {
        matches!(self, GameStage::Playing)
    }
}

/// Current and session-lifetime-best score. The best is in-memory only and
/// resets when the process exits.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScoreResource {
    pub current: u32,
    pub high: u32,
}

/// Monotonic tick counter; reset to zero when a session starts.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameCount(pub u64);

/// Process-level flags owned by the loop driver.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct GlobalState {
    pub exit: bool,
}

/// Advances the tick counter. Runs first, every tick, in every stage: the
/// menu's ground strip scrolls off the same counter.
pub fn frame_system(mut frames: ResMut<FrameCount>) {
    frames.0 += 1;
}

/// Flags the loop driver to exit when the quit command arrives.
pub fn handle_exit_command(mut events: EventReader<GameEvent>, mut state: ResMut<GlobalState>) {
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::Exit)) {
            info!("Exit requested");
            state.exit = true;
        }
    }
}

/// Handles session transitions and their side effects.
///
/// The game-over transition is idempotent: it only fires out of `Playing`,
/// so repeated floor/pipe collision events in the same or later ticks leave
/// the stage (and the audio cues) untouched.
#[allow(clippy::too_many_arguments)]
pub fn stage_system(
    mut stage: ResMut<GameStage>,
    mut events: EventReader<GameEvent>,
    mut bird: ResMut<Bird>,
    mut pipes: ResMut<PipeStream>,
    mut score: ResMut<ScoreResource>,
    mut frames: ResMut<FrameCount>,
    mut submit: ResMut<SubmitControl>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    let old_state = *stage;
    let mut new_state = old_state;

    // Tick the delayed "die" cue; this mutates the stage value without
    // being a stage transition.
    if let GameStage::GameOver {
        die_cue_ticks: Some(remaining),
    } = new_state
    {
        new_state = if remaining <= 1 {
            audio_events.write(AudioEvent::PlaySound(Sound::Die));
            GameStage::GameOver { die_cue_ticks: None }
        } else {
            GameStage::GameOver {
                die_cue_ticks: Some(remaining - 1),
            }
        };
    }

    for event in events.read() {
        match (*event, new_state) {
            (GameEvent::GameOver, GameStage::Playing) => {
                new_state = GameStage::GameOver {
                    die_cue_ticks: Some(cues::DIE_DELAY_TICKS),
                };
            }
            (GameEvent::Command(GameCommand::Start), GameStage::StartMenu | GameStage::GameOver { .. }) => {
                new_state = GameStage::Playing;
            }
            (GameEvent::Command(GameCommand::ShowScores), GameStage::StartMenu) => {
                new_state = GameStage::HighScores;
            }
            (GameEvent::Command(GameCommand::BackToMenu), GameStage::HighScores | GameStage::GameOver { .. }) => {
                new_state = GameStage::StartMenu;
            }
            _ => {}
        }
    }

    if old_state == new_state {
        return;
    }

    // Transition side effects apply only when the stage actually changed,
    // not when the die-cue countdown advanced.
    if discriminant(&old_state) != discriminant(&new_state) {
        debug!(old_state = ?old_state, new_state = ?new_state, "Stage transition");

        match (old_state, new_state) {
            (_, GameStage::Playing) => {
                bird.reset();
                pipes.clear();
                score.current = 0;
                frames.0 = 0;
                *submit = SubmitControl::Ready;
                info!(high_score = score.high, "Session started");
            }
            (GameStage::Playing, GameStage::GameOver { .. }) => {
                audio_events.write(AudioEvent::PlaySound(Sound::Hit));
                info!(score = score.current, high_score = score.high, "Game over");
            }
            (_, GameStage::HighScores) => {
                debug!("Viewing high scores");
            }
            _ => {}
        }
    }

    *stage = new_state;
}
