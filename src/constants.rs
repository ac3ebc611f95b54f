//! This module contains all the constants used in the game.

use std::time::Duration;

use glam::UVec2;

pub const LOOP_TIME: Duration = Duration::from_nanos((1_000_000_000.0 / 60.0) as u64);

/// The size of the playfield canvas, in pixels.
pub const CANVAS_SIZE: UVec2 = UVec2::new(320, 480);

/// The scale factor for the window (logical canvas to window pixels).
pub const SCALE: f32 = 1.5;

/// The y coordinate of the top of the ground strip. Everything at or below
/// this line is "floor" for collision purposes.
pub const FLOOR_Y: f32 = (CANVAS_SIZE.y - ground::HEIGHT) as f32;

/// Avatar geometry and physics.
pub mod bird {
    use glam::Vec2;

    /// The bird's fixed horizontal position (left edge).
    pub const X: f32 = 50.0;
    /// The bird's vertical position at the start of a session.
    pub const START_Y: f32 = 150.0;
    /// Bounding box of the bird sprite.
    pub const SIZE: Vec2 = Vec2::new(34.0, 24.0);
    /// Downward acceleration applied every tick, in pixels/tick².
    pub const GRAVITY: f32 = 0.25;
    /// Upward impulse applied by the trigger action, in pixels/tick.
    pub const JUMP_IMPULSE: f32 = 4.6;
}

/// Obstacle stream geometry and cadence.
pub mod pipes {
    /// Width of a pipe column.
    pub const WIDTH: f32 = 53.0;
    /// Height of each pipe column sprite; the top pipe spans `[y, y + HEIGHT]`.
    pub const HEIGHT: f32 = 400.0;
    /// Vertical opening between the top and bottom pipe of a pair.
    pub const GAP: f32 = 120.0;
    /// The most negative vertical offset a pair may spawn with. Offsets are
    /// drawn from `[2 * MAX_Y_POS, MAX_Y_POS)`.
    pub const MAX_Y_POS: f32 = -150.0;
    /// Horizontal scroll speed, in pixels/tick (shared by every pair).
    pub const SPEED: f32 = 2.0;
    /// A new pair spawns whenever the frame counter is a multiple of this.
    pub const SPAWN_INTERVAL: u64 = 100;
}

/// The scrolling ground strip at the bottom of the canvas.
pub mod ground {
    /// Height of the ground strip, in pixels.
    pub const HEIGHT: u32 = 112;
    /// Horizontal scroll speed of the strip, in pixels/tick.
    pub const SCROLL_SPEED: u64 = 2;
}

/// Timing of the game-over sound cues.
pub mod cues {
    /// Ticks between the "hit" cue and the delayed "die" cue (~100ms at 60Hz).
    pub const DIE_DELAY_TICKS: u32 = 6;
}
