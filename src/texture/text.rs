//! A tiny 3×5 bitmap pixel font, rendered as filled rects.
//!
//! The HUD and screen overlays use this instead of a TTF stack; every glyph
//! is a 3×5 bit grid scaled up to chunky pixels.

use glam::UVec2;
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const GLYPH_WIDTH: u32 = 3;
const GLYPH_HEIGHT: u32 = 5;
/// One blank column between glyphs.
const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

#[rustfmt::skip]
fn glyph(c: char) -> Option<[u8; 15]> {
    Some(match c {
        '0' => [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        '1' => [0,1,0, 1,1,0, 0,1,0, 0,1,0, 1,1,1],
        '2' => [1,1,1, 0,0,1, 1,1,1, 1,0,0, 1,1,1],
        '3' => [1,1,1, 0,0,1, 0,1,1, 0,0,1, 1,1,1],
        '4' => [1,0,1, 1,0,1, 1,1,1, 0,0,1, 0,0,1],
        '5' => [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1],
        '6' => [1,1,1, 1,0,0, 1,1,1, 1,0,1, 1,1,1],
        '7' => [1,1,1, 0,0,1, 0,1,0, 0,1,0, 0,1,0],
        '8' => [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,1,1],
        '9' => [1,1,1, 1,0,1, 1,1,1, 0,0,1, 1,1,1],
        'A' => [1,1,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'B' => [1,1,0, 1,0,1, 1,1,0, 1,0,1, 1,1,0],
        'C' => [1,1,1, 1,0,0, 1,0,0, 1,0,0, 1,1,1],
        'D' => [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,1,0],
        'E' => [1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,1,1],
        'F' => [1,1,1, 1,0,0, 1,1,1, 1,0,0, 1,0,0],
        'G' => [1,1,1, 1,0,0, 1,0,1, 1,0,1, 1,1,1],
        'H' => [1,0,1, 1,0,1, 1,1,1, 1,0,1, 1,0,1],
        'I' => [1,1,1, 0,1,0, 0,1,0, 0,1,0, 1,1,1],
        'J' => [0,0,1, 0,0,1, 0,0,1, 1,0,1, 1,1,1],
        'K' => [1,0,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'L' => [1,0,0, 1,0,0, 1,0,0, 1,0,0, 1,1,1],
        'M' => [1,0,1, 1,1,1, 1,0,1, 1,0,1, 1,0,1],
        'N' => [1,1,0, 1,0,1, 1,0,1, 1,0,1, 1,0,1],
        'O' => [1,1,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        'P' => [1,1,1, 1,0,1, 1,1,1, 1,0,0, 1,0,0],
        'Q' => [1,1,1, 1,0,1, 1,0,1, 1,1,1, 0,0,1],
        'R' => [1,1,1, 1,0,1, 1,1,0, 1,0,1, 1,0,1],
        'S' => [1,1,1, 1,0,0, 1,1,1, 0,0,1, 1,1,1],
        'T' => [1,1,1, 0,1,0, 0,1,0, 0,1,0, 0,1,0],
        'U' => [1,0,1, 1,0,1, 1,0,1, 1,0,1, 1,1,1],
        'V' => [1,0,1, 1,0,1, 1,0,1, 1,0,1, 0,1,0],
        'W' => [1,0,1, 1,0,1, 1,0,1, 1,1,1, 1,0,1],
        'X' => [1,0,1, 1,0,1, 0,1,0, 1,0,1, 1,0,1],
        'Y' => [1,0,1, 1,0,1, 0,1,0, 0,1,0, 0,1,0],
        'Z' => [1,1,1, 0,0,1, 0,1,0, 1,0,0, 1,1,1],
        '#' => [0,1,0, 1,1,1, 0,1,0, 1,1,1, 0,1,0],
        '!' => [0,1,0, 0,1,0, 0,1,0, 0,0,0, 0,1,0],
        ':' => [0,0,0, 0,1,0, 0,0,0, 0,1,0, 0,0,0],
        '.' => [0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,1,0],
        '-' => [0,0,0, 0,0,0, 1,1,1, 0,0,0, 0,0,0],
        ' ' => [0,0,0, 0,0,0, 0,0,0, 0,0,0, 0,0,0],
        _ => return None,
    })
}

/// Renders uppercase pixel text at an integer scale.
pub struct PixelText {
    scale: u32,
}

impl PixelText {
    pub fn new(scale: u32) -> Self {
        Self { scale: scale.max(1) }
    }

    /// Width in pixels of the rendered text (no trailing advance).
    pub fn text_width(&self, text: &str) -> u32 {
        let glyphs = text.chars().count() as u32;
        if glyphs == 0 {
            return 0;
        }
        (glyphs * GLYPH_ADVANCE - 1) * self.scale
    }

    pub fn text_height(&self) -> u32 {
        GLYPH_HEIGHT * self.scale
    }

    /// Draws `text` with its top-left corner at `origin`. Characters without
    /// a glyph render as blanks.
    pub fn render(&self, canvas: &mut Canvas<Window>, text: &str, origin: UVec2, color: Color) -> Result<(), String> {
        canvas.set_draw_color(color);

        for (index, c) in text.chars().enumerate() {
            let Some(bits) = glyph(c.to_ascii_uppercase()) else {
                continue;
            };
            let glyph_x = origin.x + index as u32 * GLYPH_ADVANCE * self.scale;

            for row in 0..GLYPH_HEIGHT {
                for col in 0..GLYPH_WIDTH {
                    if bits[(row * GLYPH_WIDTH + col) as usize] == 1 {
                        canvas.fill_rect(Rect::new(
                            (glyph_x + col * self.scale) as i32,
                            (origin.y + row * self.scale) as i32,
                            self.scale,
                            self.scale,
                        ))?;
                    }
                }
            }
        }
        Ok(())
    }

    /// Draws drop-shadowed text, shadow offset one scaled pixel down-right.
    pub fn render_shadowed(
        &self,
        canvas: &mut Canvas<Window>,
        text: &str,
        origin: UVec2,
        color: Color,
    ) -> Result<(), String> {
        self.render(canvas, text, origin + UVec2::splat(self.scale), Color::RGB(30, 30, 30))?;
        self.render(canvas, text, origin, color)
    }
}
