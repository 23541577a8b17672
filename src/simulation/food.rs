//! Food items that creatures can consume for energy.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::geometric_utils::{Bounds, random_position};
use super::locatable::Locatable;

/// A stationary food item. Eating it is the only way to gain energy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
}

impl Food {
    /// Creates a food item at the given coordinates.
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Array1::from_vec(vec![x, y]),
        }
    }

    /// Creates a food item at a uniformly random position inside `bounds`.
    pub fn new_random(rng: &mut impl Rng, bounds: Bounds) -> Self {
        Self {
            pos: random_position(rng, bounds),
        }
    }
}

impl Locatable for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}
