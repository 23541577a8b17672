//! Geometric utility functions for distance calculations and spatial operations.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::locatable::Locatable;
use super::params::ParamsError;

/// Size of the world in pixels. Origin is the top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    width: f32,
    height: f32,
}

impl Bounds {
    /// Creates bounds, rejecting non-positive or non-finite sizes.
    pub fn new(width: f32, height: f32) -> Result<Self, ParamsError> {
        if width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0 {
            Ok(Self { width, height })
        } else {
            Err(ParamsError::Bounds { width, height })
        }
    }

    /// Width of the world.
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Height of the world.
    pub fn height(&self) -> f32 {
        self.height
    }
}

/// Euclidean distance between two located entities.
pub fn distance(a: &impl Locatable, b: &impl Locatable) -> f32 {
    point_distance(a.pos(), b.pos())
}

/// Euclidean distance between two position vectors.
pub fn point_distance(a: &Array1<f32>, b: &Array1<f32>) -> f32 {
    Euclidean.distance(Point::new(a[0], a[1]), Point::new(b[0], b[1]))
}

/// Unit vector pointing from `from` to `to`, given their precomputed distance.
///
/// `dist` must be strictly positive.
pub fn unit_towards(from: &Array1<f32>, to: &Array1<f32>, dist: f32) -> Array1<f32> {
    (to - from) / dist
}

/// Uniformly random position inside `bounds`.
pub fn random_position(rng: &mut impl Rng, bounds: Bounds) -> Array1<f32> {
    Array1::from_vec(vec![
        rng.random_range(0.0..bounds.width),
        rng.random_range(0.0..bounds.height),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn distance_is_euclidean() {
        let a = Array1::from_vec(vec![0.0, 0.0]);
        let b = Array1::from_vec(vec![3.0, 4.0]);
        assert!((point_distance(&a, &b) - 5.0).abs() < 1e-6);

        let u = unit_towards(&a, &b, 5.0);
        assert!((u[0] - 0.6).abs() < 1e-6);
        assert!((u[1] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn random_positions_stay_inside() {
        let bounds = Bounds::new(40.0, 10.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1000 {
            let p = random_position(&mut rng, bounds);
            assert!((0.0..40.0).contains(&p[0]));
            assert!((0.0..10.0).contains(&p[1]));
        }
    }

    #[test]
    fn rejects_degenerate_bounds() {
        assert!(Bounds::new(0.0, 10.0).is_err());
        assert!(Bounds::new(10.0, -1.0).is_err());
        assert!(Bounds::new(f32::NAN, 10.0).is_err());
        assert!(Bounds::new(f32::INFINITY, 10.0).is_err());
    }
}
