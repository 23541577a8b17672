use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a world is built from inconsistent parameters.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamsError {
    /// A radius or radius factor is zero, negative or not finite.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// A probability lies outside `[0, 1]`.
    #[error("{name} must lie in [0, 1], got {value}")]
    Probability {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f32,
    },
    /// The speed interval is empty.
    #[error("min_speed {min} exceeds max_speed {max}")]
    SpeedRange {
        /// Lower bound.
        min: f32,
        /// Upper bound.
        max: f32,
    },
    /// The population cap cannot hold the seeded population.
    #[error("initial_count {initial} exceeds max_creatures {max}")]
    Population {
        /// Seeded population.
        initial: usize,
        /// Population cap.
        max: usize,
    },
    /// World dimensions must be positive and finite.
    #[error("invalid world size {width}x{height}")]
    Bounds {
        /// Requested width.
        width: f32,
        /// Requested height.
        height: f32,
    },
}

/// Simulation parameters. `Default` yields the stock tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Params {
    /// Creatures seeded at start, split evenly red/green/blue.
    pub initial_count: usize,
    /// Hard population cap, reproduction is skipped at the cap.
    pub max_creatures: usize,
    /// Hard food cap, spawning is skipped at the cap.
    pub max_food: usize,
    /// Creature body radius, also the wall bounce margin.
    pub creature_radius: f32,
    /// Food radius.
    pub food_radius: f32,
    /// Speed of the seeded population.
    pub base_speed: f32,
    /// Lower clamp for offspring speed.
    pub min_speed: f32,
    /// Upper clamp for offspring speed.
    pub max_speed: f32,
    /// Width of the uniform perturbation added to offspring speed.
    pub speed_variation: f32,
    /// Probability that an offspring gets a random species.
    pub mutation_chance: f32,
    /// Per-tick probability of spawning one food item.
    pub food_spawn_chance: f32,
    /// Energy of a new creature.
    pub initial_energy: f32,
    /// Energy lost per tick.
    pub energy_decay: f32,
    /// Energy gained per food item.
    pub food_energy: f32,
    /// Alpha lost per tick while fading.
    pub alpha_decay: f32,
    /// Sensing radius in creature radii.
    pub sense_radius_factor: f32,
    /// Reproduction radius in creature radii.
    pub reproduction_radius_factor: f32,
    /// Magnitude of the chase/flee velocity nudge.
    pub steer_strength: f32,
    /// Energy paid by each parent.
    pub reproduction_cost: f32,
    /// Ticks before a parent may reproduce again.
    pub reproduction_cooldown: u32,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            initial_count: 90,
            max_creatures: 150,
            max_food: 50,
            creature_radius: 5.0,
            food_radius: 3.0,
            base_speed: 1.5,
            min_speed: 0.5,
            max_speed: 3.0,
            speed_variation: 0.5,
            mutation_chance: 0.1,
            food_spawn_chance: 0.05,
            initial_energy: 100.0,
            energy_decay: 0.05,
            food_energy: 30.0,
            alpha_decay: 0.02,
            sense_radius_factor: 4.0,
            reproduction_radius_factor: 2.0,
            steer_strength: 0.05,
            reproduction_cost: 15.0,
            reproduction_cooldown: 100,
        }
    }
}

impl Params {
    /// Distance under which creatures steer relative to each other.
    pub fn sense_radius(&self) -> f32 {
        self.creature_radius * self.sense_radius_factor
    }

    /// Distance under which same-species creatures may reproduce.
    pub fn reproduction_radius(&self) -> f32 {
        self.creature_radius * self.reproduction_radius_factor
    }

    /// Checks the parameters for internal consistency.
    pub fn validate(&self) -> Result<(), ParamsError> {
        for (name, value) in [
            ("creature_radius", self.creature_radius),
            ("food_radius", self.food_radius),
            ("sense_radius_factor", self.sense_radius_factor),
            ("reproduction_radius_factor", self.reproduction_radius_factor),
            ("alpha_decay", self.alpha_decay),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ParamsError::NonPositive { name, value });
            }
        }

        for (name, value) in [
            ("mutation_chance", self.mutation_chance),
            ("food_spawn_chance", self.food_spawn_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(ParamsError::Probability { name, value });
            }
        }

        if self.min_speed.is_nan() || self.max_speed.is_nan() || self.min_speed > self.max_speed {
            return Err(ParamsError::SpeedRange {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if self.max_creatures == 0 || self.initial_count > self.max_creatures {
            return Err(ParamsError::Population {
                initial: self.initial_count,
                max: self.max_creatures,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let params = Params::default();
        assert_eq!(params.validate(), Ok(()));
        assert!((params.sense_radius() - 20.0).abs() < f32::EPSILON);
        assert!((params.reproduction_radius() - 10.0).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_inverted_speed_range() {
        let params = Params {
            min_speed: 4.0,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::SpeedRange { .. })
        ));
    }

    #[test]
    fn rejects_oversized_seed_population() {
        let params = Params {
            initial_count: 200,
            ..Params::default()
        };
        assert_eq!(
            params.validate(),
            Err(ParamsError::Population {
                initial: 200,
                max: 150
            })
        );
    }

    #[test]
    fn rejects_bad_probability_and_radius() {
        let params = Params {
            mutation_chance: 1.5,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::Probability {
                name: "mutation_chance",
                ..
            })
        ));

        let params = Params {
            creature_radius: 0.0,
            ..Params::default()
        };
        assert!(matches!(
            params.validate(),
            Err(ParamsError::NonPositive {
                name: "creature_radius",
                ..
            })
        ));
    }
}
