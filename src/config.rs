//! Simulation configuration: neighborhood topology, boundary behavior,
//! seeding shape, and the full per-lattice settings struct.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::rule::RuleSet;

/// Largest supported lattice dimension (per axis).
pub const MAX_DIMENSION: usize = 100;

/// Largest supported number of cell states.
pub const MAX_STATES: u8 = 64;

const MOORE_OFFSETS: [(i32, i32, i32); 26] = [
    // z = -1 layer (9 cells)
    (-1, -1, -1),
    (0, -1, -1),
    (1, -1, -1),
    (-1, 0, -1),
    (0, 0, -1),
    (1, 0, -1),
    (-1, 1, -1),
    (0, 1, -1),
    (1, 1, -1),
    // z = 0 layer (8 cells, excluding center)
    (-1, -1, 0),
    (0, -1, 0),
    (1, -1, 0),
    (-1, 0, 0),
    (1, 0, 0),
    (-1, 1, 0),
    (0, 1, 0),
    (1, 1, 0),
    // z = 1 layer (9 cells)
    (-1, -1, 1),
    (0, -1, 1),
    (1, -1, 1),
    (-1, 0, 1),
    (0, 0, 1),
    (1, 0, 1),
    (-1, 1, 1),
    (0, 1, 1),
    (1, 1, 1),
];

const VON_NEUMANN_OFFSETS: [(i32, i32, i32); 6] = [
    (0, 0, -1),
    (0, 0, 1),
    (0, -1, 0),
    (0, 1, 0),
    (-1, 0, 0),
    (1, 0, 0),
];

/// Which cells count as neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Neighborhood {
    /// Face, edge and corner adjacency (26 neighbors).
    #[default]
    Moore,
    /// Face adjacency only (6 neighbors).
    VonNeumann,
}

impl Neighborhood {
    /// Returns the relative offsets of neighboring cells.
    pub fn offsets(&self) -> &'static [(i32, i32, i32)] {
        match self {
            Neighborhood::Moore => &MOORE_OFFSETS,
            Neighborhood::VonNeumann => &VON_NEUMANN_OFFSETS,
        }
    }

    /// Returns the maximum possible neighbor count.
    pub fn max_neighbors(&self) -> u8 {
        self.offsets().len() as u8
    }
}

/// What happens at the lattice edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Boundary {
    /// Toroidal: out-of-range coordinates wrap modulo the dimension.
    #[default]
    Wrap,
    /// Bounded: out-of-range neighbors are permanently non-alive and
    /// excluded from counts.
    Bounded,
}

/// The region shape used when seeding a lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FillShape {
    /// Axis-aligned cube of the given diameter, centered on the grid.
    #[default]
    Cube,
    /// Euclidean sphere of the given diameter, centered on the grid.
    Sphere,
}

/// Everything a lattice needs for one simulation run.
///
/// Immutable for the lifetime of one lattice; changing any of these means
/// rebuilding the lattice (see [`Simulation::reset`](crate::Simulation::reset)).
///
/// # Example
///
/// ```
/// use ca3d::{RuleSet, SimConfig};
///
/// let config = SimConfig {
///     states: 5,
///     survive: RuleSet::parse("4"),
///     spawn: RuleSet::parse("4"),
///     ..SimConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SimConfig {
    /// Cells per axis, `1..=100`. The lattice holds `dimension³` cells.
    pub dimension: usize,
    /// Edge behavior.
    pub boundary: Boundary,
    /// Neighbor adjacency.
    pub neighborhood: Neighborhood,
    /// Number of vitality states, `2..=64`.
    pub states: u8,
    /// Neighbor counts that keep an alive cell alive.
    pub survive: RuleSet,
    /// Neighbor counts that turn an empty cell alive.
    pub spawn: RuleSet,
    /// Seeding region shape.
    pub fill_shape: FillShape,
    /// Seeding region diameter, in cells.
    pub fill_diameter: f32,
    /// Probability that a cell inside the region starts alive, `[0, 1]`.
    pub fill_probability: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dimension: 50,
            boundary: Boundary::Wrap,
            neighborhood: Neighborhood::Moore,
            states: 2,
            survive: RuleSet::new(),
            spawn: RuleSet::new(),
            fill_shape: FillShape::Cube,
            fill_diameter: 5.0,
            fill_probability: 0.25,
        }
    }
}

impl SimConfig {
    /// Checks that all values are within their documented ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.dimension == 0 || self.dimension > MAX_DIMENSION {
            return Err(ConfigError::DimensionOutOfRange(self.dimension));
        }
        if self.states < 2 || self.states > MAX_STATES {
            return Err(ConfigError::StatesOutOfRange(self.states));
        }
        if !(0.0..=1.0).contains(&self.fill_probability) {
            return Err(ConfigError::ProbabilityOutOfRange(self.fill_probability));
        }
        if !self.fill_diameter.is_finite() || self.fill_diameter < 0.0 {
            return Err(ConfigError::DiameterOutOfRange(self.fill_diameter));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_counts() {
        assert_eq!(Neighborhood::Moore.offsets().len(), 26);
        assert_eq!(Neighborhood::VonNeumann.offsets().len(), 6);
        assert_eq!(Neighborhood::Moore.max_neighbors(), 26);
        assert_eq!(Neighborhood::VonNeumann.max_neighbors(), 6);
    }

    #[test]
    fn test_offsets_exclude_center() {
        for &(dx, dy, dz) in Neighborhood::Moore.offsets() {
            assert!((dx, dy, dz) != (0, 0, 0));
        }
    }

    #[test]
    fn test_moore_offsets_distinct() {
        let offsets = Neighborhood::Moore.offsets();
        for (i, a) in offsets.iter().enumerate() {
            for b in &offsets[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_default_config_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_dimension() {
        let mut config = SimConfig::default();
        config.dimension = 0;
        assert_eq!(
            config.validate(),
            Err(ConfigError::DimensionOutOfRange(0))
        );
        config.dimension = 101;
        assert!(config.validate().is_err());
        config.dimension = 100;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_states() {
        let mut config = SimConfig::default();
        config.states = 1;
        assert_eq!(config.validate(), Err(ConfigError::StatesOutOfRange(1)));
        config.states = 65;
        assert!(config.validate().is_err());
        config.states = 64;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_fill() {
        let mut config = SimConfig::default();
        config.fill_probability = 1.5;
        assert!(config.validate().is_err());

        config = SimConfig::default();
        config.fill_diameter = f32::NAN;
        assert!(config.validate().is_err());
        config.fill_diameter = -1.0;
        assert!(config.validate().is_err());
    }
}
