//! Draws the playfield: sky, pipes, scrolling ground, and the bird.
//!
//! All graphics are flat-color procedural shapes; drawing failures are
//! ignored so the loop can never be halted by the renderer.

use bevy_ecs::system::{NonSendMut, Res};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

use crate::constants::{bird, ground, pipes, CANVAS_SIZE, FLOOR_Y};
use crate::systems::{Bird, FrameCount, PipeStream};

const SKY: Color = Color::RGB(112, 197, 206);
const PIPE_BODY: Color = Color::RGB(115, 191, 46);
const PIPE_EDGE: Color = Color::RGB(74, 122, 26);
const DIRT: Color = Color::RGB(210, 185, 110);
const GRASS: Color = Color::RGB(84, 168, 55);
const GRASS_LIGHT: Color = Color::RGB(110, 200, 70);
const BIRD_BODY: Color = Color::RGB(245, 200, 66);
const BIRD_BEAK: Color = Color::RGB(225, 75, 35);

pub fn render_system(
    mut canvas: NonSendMut<Canvas<Window>>,
    bird: Res<Bird>,
    stream: Res<PipeStream>,
    frames: Res<FrameCount>,
) {
    canvas.set_draw_color(SKY);
    canvas.clear();

    for pair in stream.iter() {
        let x = pair.x as i32;
        let width = pipes::WIDTH as u32;
        let height = pipes::HEIGHT as u32;

        canvas.set_draw_color(PIPE_BODY);
        let _ = canvas.fill_rect(Rect::new(x, pair.y as i32, width, height));
        let _ = canvas.fill_rect(Rect::new(x, pair.gap_bottom() as i32, width, height));

        // Darker lip on each pipe mouth
        canvas.set_draw_color(PIPE_EDGE);
        let _ = canvas.fill_rect(Rect::new(x, pair.gap_top() as i32 - 8, width, 8));
        let _ = canvas.fill_rect(Rect::new(x, pair.gap_bottom() as i32, width, 8));
    }

    draw_ground(&mut canvas, frames.0);

    canvas.set_draw_color(BIRD_BODY);
    let _ = canvas.fill_rect(Rect::new(
        bird::X as i32,
        bird.y as i32,
        bird::SIZE.x as u32,
        bird::SIZE.y as u32,
    ));
    canvas.set_draw_color(BIRD_BEAK);
    let _ = canvas.fill_rect(Rect::new(bird.right() as i32 - 6, bird.y as i32 + 8, 8, 6));
}

/// The ground strip scrolls continuously off the frame counter, in every
/// stage.
fn draw_ground(canvas: &mut Canvas<Window>, frames: u64) {
    let floor = FLOOR_Y as i32;

    canvas.set_draw_color(DIRT);
    let _ = canvas.fill_rect(Rect::new(0, floor, CANVAS_SIZE.x, ground::HEIGHT));

    canvas.set_draw_color(GRASS);
    let _ = canvas.fill_rect(Rect::new(0, floor, CANVAS_SIZE.x, 16));

    // Light dashes make the scroll visible.
    let offset = -(((frames * ground::SCROLL_SPEED) % 32) as i32);
    canvas.set_draw_color(GRASS_LIGHT);
    let mut x = offset;
    while x < CANVAS_SIZE.x as i32 {
        let _ = canvas.fill_rect(Rect::new(x, floor + 4, 16, 8));
        x += 32;
    }
}

pub fn present_system(mut canvas: NonSendMut<Canvas<Window>>) {
    canvas.present();
}
