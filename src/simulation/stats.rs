//! Population summary published after every frame.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::species::{Rgb, Species};
use super::world::World;

/// Per-species head counts plus food and lifetime counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationStats {
    /// Live red creatures.
    pub red: usize,
    /// Live green creatures.
    pub green: usize,
    /// Live blue creatures.
    pub blue: usize,
    /// Food items on the field.
    pub food: usize,
    /// Live creatures of any species.
    pub total: usize,
    /// Ticks run so far.
    pub tick: u64,
    /// Creatures born so far.
    pub births: u64,
    /// Creatures removed so far.
    pub deaths: u64,
}

/// One row of the textual summary.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryLine {
    /// Row label.
    pub label: &'static str,
    /// Color swatch, `None` for rows that are not a species.
    pub swatch: Option<Rgb>,
    /// Value shown in the row.
    pub value: usize,
}

impl PopulationStats {
    /// Counts the current population of `world`.
    pub fn from_world(world: &World) -> Self {
        let mut stats = Self {
            food: world.food.len(),
            total: world.creatures.len(),
            tick: world.tick,
            births: world.births,
            deaths: world.deaths,
            ..Self::default()
        };

        for creature in &world.creatures {
            match creature.species {
                Species::Red => stats.red += 1,
                Species::Green => stats.green += 1,
                Species::Blue => stats.blue += 1,
            }
        }

        stats
    }

    /// Live creatures of `species`.
    pub fn count(&self, species: Species) -> usize {
        match species {
            Species::Red => self.red,
            Species::Green => self.green,
            Species::Blue => self.blue,
        }
    }

    /// Rows of the population readout: one per species, then food and total.
    pub fn summary_lines(&self) -> Vec<SummaryLine> {
        let mut lines: Vec<SummaryLine> = Species::ALL
            .iter()
            .map(|&species| SummaryLine {
                label: species.label(),
                swatch: Some(species.color()),
                value: self.count(species),
            })
            .collect();

        lines.push(SummaryLine {
            label: "Food",
            swatch: None,
            value: self.food,
        });
        lines.push(SummaryLine {
            label: "Total",
            swatch: None,
            value: self.total,
        });
        lines
    }
}

impl fmt::Display for PopulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Red: {} | Green: {} | Blue: {} | Food: {} | Total: {}",
            self.red, self.green, self.blue, self.food, self.total
        )
    }
}
