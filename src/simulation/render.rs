//! Drawing surface abstraction and the per-frame driver.
//!
//! The simulation never talks to a window directly. A host implements
//! [`Canvas`] and calls [`run_frame`] once per display refresh.

use super::creature::Creature;
use super::food::Food;
use super::params::Params;
use super::species::{FOOD_COLOR, Rgb};
use super::stats::PopulationStats;
use super::world::World;

/// A 2D surface that can be cleared and filled with circles.
pub trait Canvas {
    /// Clears the `width` x `height` area.
    fn clear(&mut self, width: f32, height: f32);

    /// Fills a circle with `color` at opacity `alpha` in `[0, 1]`.
    fn fill_circle(&mut self, x: f32, y: f32, radius: f32, color: Rgb, alpha: f32);
}

/// Entities that know how to draw themselves.
pub trait Drawable {
    /// Draws `self` onto `canvas`.
    fn draw(&self, canvas: &mut impl Canvas, params: &Params);
}

impl Drawable for Food {
    fn draw(&self, canvas: &mut impl Canvas, params: &Params) {
        canvas.fill_circle(self.pos[0], self.pos[1], params.food_radius, FOOD_COLOR, 1.0);
    }
}

impl Drawable for Creature {
    fn draw(&self, canvas: &mut impl Canvas, params: &Params) {
        canvas.fill_circle(
            self.pos[0],
            self.pos[1],
            params.creature_radius,
            self.species.color(),
            self.alpha.clamp(0.0, 1.0),
        );
    }
}

/// Clears the canvas and draws all food, then all creatures.
pub fn draw_world(world: &World, canvas: &mut impl Canvas) {
    let bounds = world.bounds();
    canvas.clear(bounds.width(), bounds.height());

    for food in &world.food {
        food.draw(canvas, world.params());
    }
    for creature in &world.creatures {
        creature.draw(canvas, world.params());
    }
}

/// Runs one frame: advances the world, redraws it and returns the fresh stats.
pub fn run_frame(world: &mut World, canvas: &mut impl Canvas) -> PopulationStats {
    world.step();
    draw_world(world, canvas);
    PopulationStats::from_world(world)
}
