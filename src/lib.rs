//! # Particle Life
//!
//! A small artificial life simulation. Colored creatures drift around a
//! walled field, chase or flee each other depending on their species,
//! reproduce when two of a kind meet, eat spawned food and fade out once
//! their energy is gone.
//!
//! ## Features
//!
//! - Three species with a fixed predator/prey steering table
//! - Energy metabolism with food and a death fade-out
//! - Reproduction with species mutation and inherited speed
//! - Population and food caps
//! - Host-agnostic rendering through the [`simulation::render::Canvas`] trait
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - Simulation state and the per-tick update order
//! - [`simulation::creature`] - Creature behavior and lifecycle
//! - [`simulation::food`] - Food items
//! - [`simulation::render`] - Drawing and the frame driver
//! - [`simulation::stats`] - Population readout

/// Core simulation logic and data structures.
pub mod simulation {
    /// Creature behavior, state, and lifecycle.
    pub mod creature;
    /// Food items that creatures can consume.
    pub mod food;
    /// Geometric utility functions for distance calculations.
    pub mod geometric_utils;
    /// Trait for entities with a position.
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Drawing surface abstraction and frame driver.
    pub mod render;
    /// Creature species and their relations.
    pub mod species;
    /// Population statistics.
    pub mod stats;
    /// Simulation state and tick logic.
    pub mod world;
}
