//! Renders the HUD and the screen overlays projected from the game stage.

use bevy_ecs::system::{NonSendMut, Res};
use glam::UVec2;
use sdl2::pixels::Color;
use sdl2::render::Canvas;
use sdl2::video::Window;
use tracing::warn;

use crate::constants::CANVAS_SIZE;
use crate::scores::{ScoresView, SubmitControl};
use crate::systems::{GameStage, Screen, ScoreResource};
use crate::texture::text::PixelText;

const WHITE: Color = Color::RGB(255, 255, 255);
const YELLOW: Color = Color::RGB(245, 200, 66);
const RED: Color = Color::RGB(225, 75, 35);
const DIM: Color = Color::RGB(160, 160, 160);

/// Draws text horizontally centered at `y`; failures are logged, never fatal.
fn draw_centered(canvas: &mut Canvas<Window>, text: &PixelText, line: &str, y: u32, color: Color) {
    let x = (CANVAS_SIZE.x.saturating_sub(text.text_width(line))) / 2;
    if let Err(e) = text.render_shadowed(canvas, line, UVec2::new(x, y), color) {
        warn!(line, "Failed to render HUD text: {}", e);
    }
}

pub fn hud_render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    stage: Res<GameStage>,
    score: Res<ScoreResource>,
    view: Res<ScoresView>,
    submit: Res<SubmitControl>,
) {
    let title = PixelText::new(6);
    let heading = PixelText::new(4);
    let body = PixelText::new(2);

    match stage.screen() {
        Screen::Playing => {
            draw_centered(&mut canvas, &heading, &score.current.to_string(), 30, WHITE);
        }
        Screen::Menu => {
            draw_centered(&mut canvas, &title, "FLAPPY", 110, YELLOW);
            draw_centered(&mut canvas, &body, "ENTER: START", 200, WHITE);
            draw_centered(&mut canvas, &body, "H: HIGH SCORES", 220, WHITE);
            if score.high > 0 {
                draw_centered(&mut canvas, &body, &format!("BEST {}", score.high), 250, WHITE);
            }
        }
        Screen::GameOver => {
            draw_centered(&mut canvas, &heading, "GAME OVER", 110, RED);
            draw_centered(&mut canvas, &body, &format!("SCORE {}", score.current), 160, WHITE);
            draw_centered(&mut canvas, &body, &format!("BEST {}", score.high), 180, WHITE);

            let submit_color = if submit.enabled() { WHITE } else { DIM };
            let submit_line = if submit.enabled() {
                format!("S: {}", submit.label())
            } else {
                submit.label().to_string()
            };
            draw_centered(&mut canvas, &body, &submit_line, 220, submit_color);
            draw_centered(&mut canvas, &body, "ENTER: RETRY  B: MENU", 250, WHITE);
        }
        Screen::HighScores => {
            draw_centered(&mut canvas, &heading, "HIGH SCORES", 60, YELLOW);
            for (index, row) in view.rows().iter().enumerate() {
                draw_centered(&mut canvas, &body, row, 120 + index as u32 * 20, WHITE);
            }
            draw_centered(&mut canvas, &body, "B: BACK", 420, WHITE);
        }
    }
}
