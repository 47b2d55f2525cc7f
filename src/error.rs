//! Error types for ca3d.

use crate::config::{MAX_DIMENSION, MAX_STATES};
use thiserror::Error;

/// Errors produced by configuration validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Lattice dimension outside `1..=100`.
    #[error("dimension must be in 1..={MAX_DIMENSION}, got {0}")]
    DimensionOutOfRange(usize),

    /// State count outside `2..=64`.
    #[error("states must be in 2..={MAX_STATES}, got {0}")]
    StatesOutOfRange(u8),

    /// Fill probability outside `[0, 1]`.
    #[error("fill probability must be in [0, 1], got {0}")]
    ProbabilityOutOfRange(f32),

    /// Fill diameter negative or not finite.
    #[error("fill diameter must be finite and non-negative, got {0}")]
    DiameterOutOfRange(f32),
}
