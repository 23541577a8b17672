//! Trait for entities that have a position in the world.
//!
//! Creatures and food both expose their position through this trait so
//! distance checks can be written once.

use ndarray::Array1;

/// Trait for entities with a 2D position.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    ///
    /// # Returns
    ///
    /// A reference to the 2D position vector `[x, y]`.
    fn pos(&self) -> &Array1<f32>;

    /// Returns a mutable reference to the entity's position.
    fn pos_mut(&mut self) -> &mut Array1<f32>;

    /// Horizontal coordinate.
    fn x(&self) -> f32 {
        self.pos()[0]
    }

    /// Vertical coordinate.
    fn y(&self) -> f32 {
        self.pos()[1]
    }
}
