//! Creature species, their colors and the predator/prey relation table.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Builds a color from a `0xRRGGBB` literal.
    pub const fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as u8,
            g: ((hex >> 8) & 0xff) as u8,
            b: (hex & 0xff) as u8,
        }
    }

    /// Formats the color as `#rrggbb`.
    pub fn hex_string(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Food is always drawn in yellow.
pub const FOOD_COLOR: Rgb = Rgb::from_hex(0xffff00);

/// How a creature steers when it senses another creature.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Accelerate towards the other creature.
    Chase,
    /// Accelerate away from the other creature.
    Flee,
    /// No steering.
    Ignore,
}

/// The three creature categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Red creatures. Nothing is programmed for them, greens run from them.
    Red,
    /// Green creatures flee reds.
    Green,
    /// Blue creatures chase greens.
    Blue,
}

impl Species {
    /// All species in canonical order.
    pub const ALL: [Species; 3] = [Species::Red, Species::Green, Species::Blue];

    /// Render color of the species.
    pub const fn color(self) -> Rgb {
        match self {
            Species::Red => Rgb::from_hex(0xff3b3b),
            Species::Green => Rgb::from_hex(0x3bff3b),
            Species::Blue => Rgb::from_hex(0x3b3bff),
        }
    }

    /// Display name.
    pub const fn label(self) -> &'static str {
        match self {
            Species::Red => "Red",
            Species::Green => "Green",
            Species::Blue => "Blue",
        }
    }

    /// Steering rule of `self` towards a creature of species `other`.
    pub const fn response_to(self, other: Species) -> Response {
        match (self, other) {
            (Species::Green, Species::Red) => Response::Flee,
            (Species::Blue, Species::Green) => Response::Chase,
            _ => Response::Ignore,
        }
    }

    /// Uniformly random species.
    pub fn random(rng: &mut impl Rng) -> Species {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn relation_table() {
        assert_eq!(Species::Green.response_to(Species::Red), Response::Flee);
        assert_eq!(Species::Blue.response_to(Species::Green), Response::Chase);
        assert_eq!(Species::Red.response_to(Species::Blue), Response::Ignore);
        assert_eq!(Species::Red.response_to(Species::Green), Response::Ignore);
        assert_eq!(Species::Green.response_to(Species::Blue), Response::Ignore);
        assert_eq!(Species::Blue.response_to(Species::Red), Response::Ignore);
        for species in Species::ALL {
            assert_eq!(species.response_to(species), Response::Ignore);
        }
    }

    #[test]
    fn colors_match_hex() {
        assert_eq!(Species::Red.color().hex_string(), "#ff3b3b");
        assert_eq!(Species::Green.color().hex_string(), "#3bff3b");
        assert_eq!(Species::Blue.color().hex_string(), "#3b3bff");
        assert_eq!(FOOD_COLOR, Rgb { r: 255, g: 255, b: 0 });
    }

    #[test]
    fn random_covers_all_species() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 3];
        for _ in 0..300 {
            let drawn = Species::random(&mut rng);
            let idx = Species::ALL.iter().position(|s| *s == drawn).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }
}
