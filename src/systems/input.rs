//! Translates SDL input events into game commands.

use std::collections::HashMap;

use bevy_ecs::{event::EventWriter, resource::Resource, system::{NonSendMut, Res}};
use sdl2::{event::Event, keyboard::Keycode, mouse::MouseButton, EventPump};

use crate::events::{GameCommand, GameEvent};

/// Key-to-command map. The trigger action has three bindings (click, Space,
/// Up); everything else is screen-flow plumbing for the windowed host.
#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    key_bindings: HashMap<Keycode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut key_bindings = HashMap::new();

        // The trigger action
        key_bindings.insert(Keycode::Space, GameCommand::Flap);
        key_bindings.insert(Keycode::Up, GameCommand::Flap);

        // Screen flow
        key_bindings.insert(Keycode::Return, GameCommand::Start);
        key_bindings.insert(Keycode::H, GameCommand::ShowScores);
        key_bindings.insert(Keycode::B, GameCommand::BackToMenu);
        key_bindings.insert(Keycode::Backspace, GameCommand::BackToMenu);
        key_bindings.insert(Keycode::S, GameCommand::SubmitScore);

        // Game actions
        key_bindings.insert(Keycode::M, GameCommand::MuteAudio);
        key_bindings.insert(Keycode::Escape, GameCommand::Exit);
        key_bindings.insert(Keycode::Q, GameCommand::Exit);

        Self { key_bindings }
    }
}

impl Bindings {
    pub fn command_for(&self, key: Keycode) -> Option<GameCommand> {
        self.key_bindings.get(&key).copied()
    }
}

pub fn input_system(bindings: Res<Bindings>, mut writer: EventWriter<GameEvent>, mut pump: NonSendMut<EventPump>) {
    for event in pump.poll_iter() {
        match event {
            Event::Quit { .. } => {
                writer.write(GameEvent::Command(GameCommand::Exit));
            }
            // Pointer click anywhere on the play field is the trigger action.
            Event::MouseButtonDown {
                mouse_btn: MouseButton::Left,
                ..
            } => {
                writer.write(GameEvent::Command(GameCommand::Flap));
            }
            Event::KeyDown {
                keycode: Some(key),
                repeat: false,
                ..
            } => {
                if let Some(command) = bindings.command_for(key) {
                    writer.write(GameEvent::Command(command));
                }
            }
            _ => {}
        }
    }
}
