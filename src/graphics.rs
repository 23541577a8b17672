use macroquad::prelude::*;
use particle_life::simulation::render::Canvas;
use particle_life::simulation::species::Rgb;

/// Background behind the field.
const BACKGROUND: Color = Color::new(0.05, 0.05, 0.08, 1.0);

/// Draws straight onto the macroquad window. World coordinates are pixels.
pub struct ScreenCanvas;

fn to_color(color: Rgb, alpha: f32) -> Color {
    Color::from_rgba(color.r, color.g, color.b, (alpha * 255.0).round() as u8)
}

impl Canvas for ScreenCanvas {
    fn clear(&mut self, _width: f32, _height: f32) {
        clear_background(BACKGROUND);
    }

    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32) {
        draw_circle(x, y, radius, to_color(color, alpha));
    }
}
