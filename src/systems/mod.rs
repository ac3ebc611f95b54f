//! The Entity-Component-System (ECS) module.
//!
//! This module contains all the ECS-related logic, including systems,
//! resources, and the session state machine.

pub mod audio;
pub mod bird;
pub mod collision;
pub mod hud;
pub mod input;
pub mod pipes;
pub mod render;
pub mod state;

pub use audio::{audio_system, handle_audio_commands, AudioEvent, AudioResource, AudioState};
pub use bird::{bird_physics_system, flap_system, Bird};
pub use collision::{collision_system, pair_hits_bird};
pub use hud::hud_render_system;
pub use input::{input_system, Bindings};
pub use pipes::{pipe_system, PipePair, PipeRng, PipeStream};
pub use render::{present_system, render_system};
pub use state::{frame_system, handle_exit_command, stage_system, FrameCount, GameStage, GlobalState, Screen, ScoreResource};
