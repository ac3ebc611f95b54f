//! The avatar: vertical physics, the trigger action, and world-boundary
//! collision handling.

use bevy_ecs::{
    event::{EventReader, EventWriter},
    resource::Resource,
    system::{Res, ResMut},
};
use tracing::trace;

use crate::audio::Sound;
use crate::constants::{bird, FLOOR_Y};
use crate::events::{GameCommand, GameEvent};
use crate::systems::{AudioEvent, GameStage};

/// The player-controlled avatar. Horizontal position and size are fixed
/// (`constants::bird`); only the vertical state changes.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Bird {
    pub y: f32,
    pub velocity: f32,
}

impl Default for Bird {
    fn default() -> Self {
        Self {
            y: bird::START_Y,
            velocity: 0.0,
        }
    }
}

impl Bird {
    /// Restores the starting position and zero velocity; called when a
    /// session (re)starts.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + bird::SIZE.y
    }

    pub fn left(&self) -> f32 {
        bird::X
    }

    pub fn right(&self) -> f32 {
        bird::X + bird::SIZE.x
    }
}

/// Applies the trigger action: a fixed upward impulse plus a best-effort
/// "flap" cue. Only honored while a session is active.
pub fn flap_system(
    stage: Res<GameStage>,
    mut bird: ResMut<Bird>,
    mut events: EventReader<GameEvent>,
    mut audio_events: EventWriter<AudioEvent>,
) {
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::Flap)) && stage.playing() {
            bird.velocity = -bird::JUMP_IMPULSE;
            audio_events.write(AudioEvent::PlaySound(Sound::Flap));
            trace!(y = bird.y, "Flap");
        }
    }
}

/// Integrates gravity and resolves floor/ceiling contact.
///
/// Floor contact clamps the avatar onto the ground line and emits a
/// game-over event; ceiling contact clamps to zero and kills the velocity
/// without ending the session.
pub fn bird_physics_system(stage: Res<GameStage>, mut bird: ResMut<Bird>, mut events: EventWriter<GameEvent>) {
    if !stage.playing() {
        return;
    }

    bird.velocity += bird::GRAVITY;
    bird.y += bird.velocity;

    if bird.bottom() >= FLOOR_Y {
        bird.y = FLOOR_Y - bird::SIZE.y;
        events.write(GameEvent::GameOver);
    }

    if bird.y <= 0.0 {
        bird.y = 0.0;
        bird.velocity = 0.0;
    }
}
