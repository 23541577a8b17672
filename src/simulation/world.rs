//! The world: owns every creature and food item and advances them tick by tick.
//!
//! One call to [`World::step`] runs the simulation phases in a fixed order:
//! - spawn at most one food item
//! - let every creature eat at most one food item
//! - update kinematics and metabolism of every creature
//! - evaluate every ordered pair of creatures (steering and reproduction)
//! - drop creatures that faded out
//!
//! Rendering and statistics are separate, see [`super::render::run_frame`].

use ndarray::Array1;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, trace};

use super::creature::Creature;
use super::food::Food;
use super::geometric_utils::{Bounds, random_position};
use super::params::{Params, ParamsError};
use super::species::Species;

/// All simulation state.
#[derive(Debug, Clone)]
pub struct World {
    /// Live creatures, in insertion order. Earlier creatures win contested food.
    pub creatures: Vec<Creature>,
    /// Food items, in spawn order.
    pub food: Vec<Food>,
    /// Ticks run so far.
    pub tick: u64,
    /// Creatures born through reproduction so far.
    pub births: u64,
    /// Creatures removed after fading out so far.
    pub deaths: u64,
    params: Params,
    bounds: Bounds,
    rng: StdRng,
    next_id: u64,
}

impl World {
    /// Creates a world seeded with `params.initial_count` creatures.
    ///
    /// The first third of the population is red, the second third green and
    /// the rest blue, all at random positions moving at `base_speed`.
    /// Without a `seed` the random generator is seeded from the OS.
    pub fn new(params: Params, bounds: Bounds, seed: Option<u64>) -> Result<Self, ParamsError> {
        let mut world = Self::empty(params, bounds, seed)?;

        let n = world.params.initial_count;
        for i in 0..n {
            let species = if i * 3 < n {
                Species::Red
            } else if i * 3 < 2 * n {
                Species::Green
            } else {
                Species::Blue
            };
            let pos = random_position(&mut world.rng, world.bounds);
            let speed = world.params.base_speed;
            world.spawn_creature(species, pos, speed);
        }

        info!(
            creatures = world.creatures.len(),
            width = bounds.width(),
            height = bounds.height(),
            "world created"
        );

        Ok(world)
    }

    /// Creates a world without creatures or food.
    pub fn empty(params: Params, bounds: Bounds, seed: Option<u64>) -> Result<Self, ParamsError> {
        params.validate()?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        Ok(Self {
            creatures: Vec::with_capacity(params.max_creatures),
            food: Vec::with_capacity(params.max_food),
            params,
            tick: 0,
            births: 0,
            deaths: 0,
            bounds,
            rng,
            next_id: 0,
        })
    }

    /// Parameters the world was validated against. Read-only after construction.
    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Current world size.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Updates the world size. Existing entities are not moved.
    ///
    /// An invalid size leaves the bounds untouched and is returned as an error.
    pub fn resize(&mut self, width: f32, height: f32) -> Result<(), ParamsError> {
        self.bounds = Bounds::new(width, height)?;
        debug!(width, height, "world resized");
        Ok(())
    }

    /// Adds a creature with a fresh identity.
    ///
    /// Returns `None` without creating anything when the population cap is reached.
    pub fn spawn_creature(
        &mut self,
        species: Species,
        pos: Array1<f32>,
        speed: f32,
    ) -> Option<&mut Creature> {
        if self.creatures.len() >= self.params.max_creatures {
            return None;
        }

        let id = self.next_id;
        self.next_id += 1;

        let creature = Creature::new(id, species, pos, speed, &self.params, &mut self.rng);
        self.creatures.push(creature);
        self.creatures.last_mut()
    }

    /// Adds a food item. Returns `false` when the food cap is reached.
    pub fn add_food(&mut self, food: Food) -> bool {
        if self.food.len() >= self.params.max_food {
            return false;
        }
        self.food.push(food);
        true
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self) {
        self.spawn_food();
        self.feed();

        for creature in &mut self.creatures {
            creature.update(self.bounds, &self.params);
        }

        self.interact_all();
        self.remove_dead();

        self.tick += 1;
        trace!(
            tick = self.tick,
            creatures = self.creatures.len(),
            food = self.food.len(),
            "tick done"
        );
    }

    /// With probability `food_spawn_chance`, spawns one food item at a random
    /// position, unless the food cap is reached.
    pub fn spawn_food(&mut self) {
        if self.food.len() < self.params.max_food
            && self.rng.random::<f32>() < self.params.food_spawn_chance
        {
            let food = Food::new_random(&mut self.rng, self.bounds);
            debug!(x = food.pos[0], y = food.pos[1], "food spawned");
            self.food.push(food);
        }
    }

    /// Each creature eats the most recently spawned food item it overlaps.
    pub fn feed(&mut self) {
        let params = &self.params;
        for creature in &mut self.creatures {
            if let Some(idx) = self.food.iter().rposition(|f| creature.eat(f, params)) {
                self.food.remove(idx);
                trace!(id = creature.id, energy = creature.energy, "food eaten");
            }
        }
    }

    /// Runs `interact` for every ordered pair of distinct creatures.
    ///
    /// Offspring are appended right away, so they count against the cap for
    /// the rest of the pass and take part in it themselves.
    pub fn interact_all(&mut self) {
        let mut i = 0;
        while i < self.creatures.len() {
            let mut j = 0;
            while j < self.creatures.len() {
                if i != j {
                    let room = self.creatures.len() < self.params.max_creatures;
                    let (this, other) = pair_mut(&mut self.creatures, i, j);
                    let birth = this.interact(other, &self.params, room, &mut self.rng);

                    if let Some(birth) = birth {
                        let parents = (this.id, other.id);
                        let child = self.spawn_creature(birth.species, birth.pos, birth.speed);
                        if let Some(child) = child {
                            debug!(
                                id = child.id,
                                species = %child.species,
                                speed = child.speed,
                                parents = ?parents,
                                "creature born"
                            );
                            self.births += 1;
                        }
                    }
                }
                j += 1;
            }
            i += 1;
        }
    }

    /// Drops creatures that faded out.
    pub fn remove_dead(&mut self) {
        let mut deaths = 0;
        self.creatures.retain(|c| {
            if c.is_dead() {
                debug!(id = c.id, species = %c.species, "creature removed");
                deaths += 1;
                false
            } else {
                true
            }
        });
        self.deaths += deaths;
    }

    /// Number of live creatures of `species`.
    pub fn count(&self, species: Species) -> usize {
        self.creatures.iter().filter(|c| c.species == species).count()
    }
}

/// Two distinct mutable elements of a slice, in the order asked for.
fn pair_mut<T>(items: &mut [T], i: usize, j: usize) -> (&mut T, &mut T) {
    assert_ne!(i, j, "pair_mut needs distinct indices");
    if i < j {
        let (left, right) = items.split_at_mut(j);
        (&mut left[i], &mut right[0])
    } else {
        let (left, right) = items.split_at_mut(i);
        (&mut right[0], &mut left[j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut items = vec![1, 2, 3, 4];
        let (a, b) = pair_mut(&mut items, 3, 1);
        assert_eq!((*a, *b), (4, 2));
        let (a, b) = pair_mut(&mut items, 0, 2);
        *a = 10;
        *b = 30;
        assert_eq!(items, vec![10, 2, 30, 4]);
    }

    #[test]
    fn seeded_population_split_in_thirds() {
        let bounds = Bounds::new(800.0, 600.0).unwrap();
        let world = World::new(Params::default(), bounds, Some(1)).unwrap();
        assert_eq!(world.count(Species::Red), 30);
        assert_eq!(world.count(Species::Green), 30);
        assert_eq!(world.count(Species::Blue), 30);
        assert!(world.food.is_empty());
    }

    #[test]
    fn uneven_population_split_rounds_like_real_thirds() {
        let bounds = Bounds::new(800.0, 600.0).unwrap();
        let params = Params {
            initial_count: 10,
            ..Params::default()
        };
        let world = World::new(params, bounds, Some(1)).unwrap();
        assert_eq!(world.count(Species::Red), 4);
        assert_eq!(world.count(Species::Green), 3);
        assert_eq!(world.count(Species::Blue), 3);
    }
}
