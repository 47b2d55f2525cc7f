//! 3D multi-state cellular automaton engine.
//!
//! Maintains a cubic lattice of "vitality" cells and advances it through
//! discrete, synchronous generations under generalized survive/spawn
//! rules, with configurable neighborhood topology (Moore or von Neumann)
//! and boundary behavior (toroidal or bounded). Alive-neighbor counts are
//! cached and maintained incrementally as cells change, so a generation
//! costs O(changed cells × neighbors) instead of a full recount of up to
//! 100³ cells.
//!
//! Cells hold an integer vitality: the maximum means fully alive, zero
//! means empty, and values in between are decaying remnants that fade one
//! step per generation regardless of the rules. Rendering collaborators
//! read cells through the [`Cell`] view (`is_alive`, `is_empty`,
//! [`decay_fraction`](Cell::decay_fraction)); the engine itself does no
//! rendering, persistence, or threading.
//!
//! # Example
//!
//! ```
//! use ca3d::{RuleSet, SimConfig, Simulation};
//!
//! // The classic 4/4/5 "clouds in a box" rule.
//! let config = SimConfig {
//!     dimension: 20,
//!     states: 5,
//!     survive: RuleSet::parse("4"),
//!     spawn: RuleSet::parse("4"),
//!     fill_diameter: 10.0,
//!     fill_probability: 0.3,
//!     ..SimConfig::default()
//! };
//!
//! let mut sim = Simulation::new(config, 12345)?;
//! sim.steps(20);
//!
//! let cell = sim.cell(10, 10, 10);
//! if !cell.is_empty() {
//!     println!("vitality fraction: {}", cell.decay_fraction());
//! }
//! # Ok::<(), ca3d::ConfigError>(())
//! ```
//!
//! Rule strings are tolerant by design: `"4-6,9"` marks counts 4, 5, 6
//! and 9; unrecognized text is skipped silently so hosts can parse
//! partially-typed input without errors. See [`RuleSet::parse`].

mod cell;
mod config;
mod error;
mod lattice;
mod presets;
mod rng;
mod rule;
mod sim;

pub use cell::{transition, Cell};
pub use config::{
    Boundary, FillShape, Neighborhood, SimConfig, MAX_DIMENSION, MAX_STATES,
};
pub use error::ConfigError;
pub use lattice::Lattice;
pub use presets::{Preset, DEFAULT_PRESET, PRESETS};
pub use rule::{RuleSet, MAX_NEIGHBORS};
pub use sim::Simulation;
