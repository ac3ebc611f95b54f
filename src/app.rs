//! Main application wrapper: SDL initialization, window lifecycle, and the
//! fixed-rate frame loop.

use std::time::{Duration, Instant};

use sdl2::{AudioSubsystem, Sdl};
use tracing::{debug, info};

use crate::constants::{CANVAS_SIZE, LOOP_TIME, SCALE};
use crate::error::{GameError, GameResult};
use crate::game::Game;

pub struct App {
    pub game: Game,
    // Keep SDL alive for the app lifetime so subsystems (audio) are not shut down
    _sdl_context: Sdl,
    _audio_subsystem: AudioSubsystem,
}

impl App {
    /// Initializes SDL subsystems, creates the game window, and sets up the
    /// game state.
    ///
    /// # Errors
    ///
    /// Returns `GameError::Sdl` if any SDL initialization step fails, or
    /// propagates errors from `Game::new()` during game state setup.
    pub fn new() -> GameResult<Self> {
        info!("Initializing SDL2 application");
        let sdl_context = sdl2::init().map_err(GameError::Sdl)?;

        debug!("Initializing SDL2 subsystems");
        let video_subsystem = sdl_context.video().map_err(GameError::Sdl)?;
        let audio_subsystem = sdl_context.audio().map_err(GameError::Sdl)?;
        let event_pump = sdl_context.event_pump().map_err(GameError::Sdl)?;

        debug!(
            width = (CANVAS_SIZE.x as f32 * SCALE).round() as u32,
            height = (CANVAS_SIZE.y as f32 * SCALE).round() as u32,
            scale = SCALE,
            "Creating game window"
        );
        let window = video_subsystem
            .window(
                "Flappy",
                (CANVAS_SIZE.x as f32 * SCALE).round() as u32,
                (CANVAS_SIZE.y as f32 * SCALE).round() as u32,
            )
            .position_centered()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let mut canvas = window
            .into_canvas()
            .accelerated()
            .build()
            .map_err(|e| GameError::Sdl(e.to_string()))?;
        canvas
            .set_logical_size(CANVAS_SIZE.x, CANVAS_SIZE.y)
            .map_err(|e| GameError::Sdl(e.to_string()))?;

        let game = Game::new(canvas, event_pump)?;

        info!("Application initialization completed successfully");
        Ok(App {
            game,
            _sdl_context: sdl_context,
            _audio_subsystem: audio_subsystem,
        })
    }

    /// Executes a single frame of the game loop with consistent timing.
    ///
    /// Runs game logic via `game.tick()`, then sleeps the remainder of the
    /// target `LOOP_TIME` if the frame completed early. The loop itself
    /// never stops for collaborator failures; only an explicit exit ends it.
    ///
    /// # Returns
    ///
    /// `true` if the game should continue running, `false` if the game
    /// requested exit.
    pub fn run(&mut self) -> bool {
        let start = Instant::now();

        if self.game.tick() {
            return false;
        }

        if start.elapsed() < LOOP_TIME {
            let time = LOOP_TIME.saturating_sub(start.elapsed());
            if time != Duration::ZERO {
                spin_sleep::sleep(time);
            }
        }

        true
    }
}
