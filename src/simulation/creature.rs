//! Creature behavior, state, and lifecycle.
//!
//! A creature goes through three states: alive while its energy is positive,
//! fading once the energy ran out (alpha drops every tick), and dead once the
//! alpha reached zero. The world removes dead creatures at the end of a tick.

use ndarray::Array1;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::food::Food;
use super::geometric_utils::{Bounds, distance, unit_towards};
use super::locatable::Locatable;
use super::params::Params;
use super::species::{Response, Species};

/// A mobile agent that steers relative to other species, eats and reproduces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Creature {
    /// Unique identifier, assigned by the world.
    pub id: u64,
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Displacement applied every tick.
    pub vel: Array1<f32>,
    /// Species, fixes color and steering rules.
    pub species: Species,
    /// Current energy, fading starts once it is <= 0.
    pub energy: f32,
    /// Ticks left before the creature may reproduce again.
    pub cooldown: u32,
    /// Inherited speed, in `[min_speed, max_speed]` for offspring.
    pub speed: f32,
    /// Opacity, doubles as the fade-out timer.
    pub alpha: f32,
}

/// Offspring produced by a reproduction event, still without an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Birth {
    /// Species of the offspring.
    pub species: Species,
    /// Birth position (the calling parent's position).
    pub pos: Array1<f32>,
    /// Speed of the offspring.
    pub speed: f32,
}

impl Creature {
    /// Creates a creature with a random velocity scaled by `speed`.
    ///
    /// Each velocity component is drawn uniformly from `[-speed / 2, speed / 2)`.
    pub fn new(
        id: u64,
        species: Species,
        pos: Array1<f32>,
        speed: f32,
        params: &Params,
        rng: &mut impl Rng,
    ) -> Self {
        let vel = Array1::from_vec(vec![
            (rng.random::<f32>() - 0.5) * speed,
            (rng.random::<f32>() - 0.5) * speed,
        ]);

        Self {
            id,
            pos,
            vel,
            species,
            energy: params.initial_energy,
            cooldown: 0,
            speed,
            alpha: 1.0,
        }
    }

    /// Advances kinematics and metabolism by one tick.
    ///
    /// The velocity is reflected on an axis whenever the position lies outside
    /// the wall margin. Positions are not clamped.
    pub fn update(&mut self, bounds: Bounds, params: &Params) {
        self.pos += &self.vel;

        let r = params.creature_radius;
        if self.pos[0] < r || self.pos[0] > bounds.width() - r {
            self.vel[0] = -self.vel[0];
        }
        if self.pos[1] < r || self.pos[1] > bounds.height() - r {
            self.vel[1] = -self.vel[1];
        }

        self.energy -= params.energy_decay;
        self.cooldown = self.cooldown.saturating_sub(1);

        if self.is_fading() {
            self.alpha -= params.alpha_decay;
        }
    }

    /// Reacts to `other`: steers according to the species table and tries to
    /// reproduce with it.
    ///
    /// Only `self`'s velocity changes. Reproduction changes both parents and
    /// happens only when `room_for_offspring` is set.
    pub fn interact(
        &mut self,
        other: &mut Creature,
        params: &Params,
        room_for_offspring: bool,
        rng: &mut impl Rng,
    ) -> Option<Birth> {
        if self.id == other.id {
            return None;
        }

        let dist = distance(&*self, &*other);

        if dist > 0.0 && dist < params.sense_radius() {
            match self.species.response_to(other.species) {
                Response::Chase => {
                    let dir = unit_towards(&self.pos, &other.pos, dist);
                    self.vel.scaled_add(params.steer_strength, &dir);
                }
                Response::Flee => {
                    let dir = unit_towards(&self.pos, &other.pos, dist);
                    self.vel.scaled_add(-params.steer_strength, &dir);
                }
                Response::Ignore => {}
            }
        }

        let can_mate = self.species == other.species
            && dist < params.reproduction_radius()
            && self.cooldown == 0
            && other.cooldown == 0;

        if !can_mate || !room_for_offspring {
            return None;
        }

        let species = if rng.random::<f32>() < params.mutation_chance {
            Species::random(rng)
        } else {
            self.species
        };
        let speed = mutate_speed((self.speed + other.speed) / 2.0, params, rng);

        for parent in [&mut *self, &mut *other] {
            parent.energy -= params.reproduction_cost;
            parent.cooldown = params.reproduction_cooldown;
        }

        Some(Birth {
            species,
            pos: self.pos.clone(),
            speed,
        })
    }

    /// Eats `food` if it overlaps the body. The caller removes eaten food.
    pub fn eat(&mut self, food: &Food, params: &Params) -> bool {
        if distance(&*self, food) < params.creature_radius + params.food_radius {
            self.energy += params.food_energy;
            true
        } else {
            false
        }
    }

    /// `true` once the energy ran out. Fading never stops, even if the
    /// creature eats afterwards.
    pub fn is_fading(&self) -> bool {
        self.energy <= 0.0 || self.alpha < 1.0
    }

    /// `true` once the creature faded out completely.
    pub fn is_dead(&self) -> bool {
        self.alpha <= 0.0
    }
}

impl Locatable for Creature {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }

    fn pos_mut(&mut self) -> &mut Array1<f32> {
        &mut self.pos
    }
}

/// Perturbs `base` by a uniform offset of width `speed_variation` and clamps
/// the result to `[min_speed, max_speed]`.
pub fn mutate_speed(base: f32, params: &Params, rng: &mut impl Rng) -> f32 {
    let variation = (rng.random::<f32>() - 0.5) * params.speed_variation;
    (base + variation).clamp(params.min_speed, params.max_speed)
}
