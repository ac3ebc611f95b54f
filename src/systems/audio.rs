//! Audio system for handling sound playback.
//!
//! This module provides an ECS-based audio system that integrates with
//! SDL2_mixer for playing the synthesized cues. The mixer handle is a
//! non-send resource to respect SDL2's main-thread requirement.

use bevy_ecs::{
    event::{Event, EventReader},
    resource::Resource,
    system::{NonSendMut, ResMut},
};
use tracing::{debug, info, trace};

use crate::audio::{Audio, Sound};
use crate::events::{GameCommand, GameEvent};

/// Resource for tracking the user's audio preference.
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct AudioState {
    /// Whether audio is currently muted.
    pub muted: bool,
}

/// Events for triggering audio playback.
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioEvent {
    /// Play a specific sound cue, fire-and-forget.
    PlaySound(Sound),
}

/// Non-send resource wrapper for the SDL2 audio system.
///
/// SDL2 audio components are not Send, but Bevy ECS requires Send for
/// regular resources; `NonSendMut` keeps the mixer on the main thread while
/// integrating with the schedule.
pub struct AudioResource(pub Audio);

/// Toggles the mute preference on the mute command.
pub fn handle_audio_commands(mut events: EventReader<GameEvent>, mut state: ResMut<AudioState>) {
    for event in events.read() {
        if matches!(event, GameEvent::Command(GameCommand::MuteAudio)) {
            state.muted = !state.muted;
            info!(muted = state.muted, "Audio mute toggled");
        }
    }
}

/// Processes audio events and plays cues. Playback failures are logged by
/// the audio module and never interrupt the simulation.
pub fn audio_system(mut audio: NonSendMut<AudioResource>, state: ResMut<AudioState>, mut events: EventReader<AudioEvent>) {
    if audio.0.is_muted() != state.muted {
        debug!(muted = state.muted, "Audio mute state changed");
        audio.0.set_mute(state.muted);
    }

    for event in events.read() {
        let AudioEvent::PlaySound(sound) = event;
        if !audio.0.is_disabled() && !state.muted {
            trace!(?sound, "Playing sound");
            audio.0.play(*sound);
        } else {
            debug!(
                disabled = audio.0.is_disabled(),
                muted = state.muted,
                "Skipping sound due to audio state"
            );
        }
    }
}
