//! The host-facing simulation session.
//!
//! Owns one lattice plus the configuration it was built from and a
//! generation counter. Hosts drive pacing themselves: the session has no
//! clock, it just advances a generation per [`Simulation::step`] call.

use crate::cell::Cell;
use crate::config::SimConfig;
use crate::error::ConfigError;
use crate::lattice::Lattice;

/// A configured, seeded cellular-automaton run.
///
/// # Example
///
/// ```
/// use ca3d::{RuleSet, SimConfig, Simulation};
///
/// let config = SimConfig {
///     dimension: 16,
///     states: 5,
///     survive: RuleSet::parse("4"),
///     spawn: RuleSet::parse("4"),
///     fill_diameter: 8.0,
///     fill_probability: 0.3,
///     ..SimConfig::default()
/// };
///
/// let mut sim = Simulation::new(config, 12345).unwrap();
/// sim.steps(10);
/// assert_eq!(sim.generation(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct Simulation {
    config: SimConfig,
    lattice: Lattice,
    generation: u64,
}

impl Simulation {
    /// Validates the configuration, builds the lattice, and seeds the
    /// fill region with the given RNG seed.
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut lattice = Lattice::new(
            config.dimension,
            config.boundary,
            config.neighborhood,
            config.states,
        );
        lattice.fill(
            config.fill_shape,
            config.fill_diameter,
            config.fill_probability,
            seed,
        );
        Ok(Self {
            config,
            lattice,
            generation: 0,
        })
    }

    /// Advances one generation.
    pub fn step(&mut self) {
        self.lattice.step(self.config.survive, self.config.spawn);
        self.generation += 1;
    }

    /// Advances `n` generations.
    pub fn steps(&mut self, n: usize) {
        for _ in 0..n {
            self.step();
        }
    }

    /// Discards the current lattice and rebuilds from a new
    /// configuration. Lattices are re-created, never resized in place.
    pub fn reset(&mut self, config: SimConfig, seed: u64) -> Result<(), ConfigError> {
        *self = Self::new(config, seed)?;
        Ok(())
    }

    /// Returns the active configuration.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Returns the number of generations stepped since the last reset.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the lattice for read access.
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Returns the lattice for direct mutation (custom seeding).
    ///
    /// After writing cells directly the count cache is stale; the next
    /// step recounts automatically.
    pub fn lattice_mut(&mut self) -> &mut Lattice {
        &mut self.lattice
    }

    /// Returns a read-only view of one cell.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn cell(&self, x: usize, y: usize, z: usize) -> Cell {
        self.lattice.cell(x, y, z)
    }

    /// Returns the number of non-empty cells.
    pub fn population(&self) -> usize {
        self.lattice.population()
    }
}
