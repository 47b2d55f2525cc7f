//! The per-cell vitality state machine.
//!
//! Cells hold a "vitality" in `[0, states - 1]`: `states - 1` is fully
//! alive, `0` is empty, and anything in between is a decaying remnant of
//! a previously alive cell. Decaying cells ignore the rules entirely and
//! fade one step per generation; only fully alive neighbors count toward
//! survive/spawn decisions.

use crate::rule::RuleSet;

/// Computes the next vitality of a cell.
///
/// - Alive (`current == states_minus_one`): stays alive if `survive`
///   contains the neighbor count, otherwise starts decaying.
/// - Empty (`current == 0`): becomes fully alive if `spawn` contains the
///   neighbor count, otherwise stays empty.
/// - Decaying: loses one vitality unconditionally. Decay is not
///   reversible; a decaying cell must reach empty and re-spawn before it
///   can be alive again.
///
/// `neighbors` counts fully alive neighbors only.
pub fn transition(
    current: u8,
    neighbors: u8,
    survive: RuleSet,
    spawn: RuleSet,
    states_minus_one: u8,
) -> u8 {
    if current == states_minus_one {
        if survive.contains(neighbors) {
            current
        } else {
            current - 1
        }
    } else if current == 0 {
        if spawn.contains(neighbors) {
            states_minus_one
        } else {
            0
        }
    } else {
        current - 1
    }
}

/// A read-only view of one cell, for rendering collaborators.
///
/// Bundles the vitality with the automaton's alive threshold so the
/// queries need no extra context.
///
/// # Example
///
/// ```
/// use ca3d::{Boundary, Lattice, Neighborhood};
///
/// let mut lattice = Lattice::new(8, Boundary::Wrap, Neighborhood::Moore, 5);
/// lattice.set(1, 2, 3, 4);
///
/// let cell = lattice.cell(1, 2, 3);
/// assert!(cell.is_alive());
/// assert_eq!(cell.decay_fraction(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    value: u8,
    states_minus_one: u8,
}

impl Cell {
    pub(crate) fn new(value: u8, states_minus_one: u8) -> Self {
        Self {
            value,
            states_minus_one,
        }
    }

    /// Returns the raw vitality value.
    pub fn value(&self) -> u8 {
        self.value
    }

    /// Returns true if the cell is fully alive.
    pub fn is_alive(&self) -> bool {
        self.value == self.states_minus_one
    }

    /// Returns true if the cell is empty.
    pub fn is_empty(&self) -> bool {
        self.value == 0
    }

    /// Returns true if the cell is fading out.
    pub fn is_decaying(&self) -> bool {
        !self.is_alive() && !self.is_empty()
    }

    /// Returns how far the cell is from disappearing, in `[0, 1]`.
    ///
    /// `1.0` means fully alive, `0.0` means about to disappear (or
    /// empty), linear in between. For a binary automaton (two states, no
    /// decay range) the alive state maps to `1.0`.
    pub fn decay_fraction(&self) -> f32 {
        if self.value == 0 {
            return 0.0;
        }
        if self.states_minus_one == 1 {
            return 1.0;
        }
        (self.value - 1) as f32 / (self.states_minus_one - 1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules(survive: &[u8], spawn: &[u8]) -> (RuleSet, RuleSet) {
        (RuleSet::from_counts(survive), RuleSet::from_counts(spawn))
    }

    #[test]
    fn test_alive_survives() {
        let (survive, spawn) = rules(&[4], &[4]);
        assert_eq!(transition(4, 4, survive, spawn, 4), 4);
    }

    #[test]
    fn test_alive_starts_decaying() {
        let (survive, spawn) = rules(&[4], &[4]);
        assert_eq!(transition(4, 3, survive, spawn, 4), 3);
    }

    #[test]
    fn test_empty_spawns() {
        let (survive, spawn) = rules(&[], &[6, 7]);
        assert_eq!(transition(0, 6, survive, spawn, 9), 9);
        assert_eq!(transition(0, 5, survive, spawn, 9), 0);
    }

    #[test]
    fn test_decaying_ignores_rules() {
        // Survive and spawn match the count, but a decaying cell fades
        // regardless.
        let (survive, spawn) = rules(&[3], &[3]);
        assert_eq!(transition(2, 3, survive, spawn, 4), 1);
        assert_eq!(transition(1, 3, survive, spawn, 4), 0);
    }

    #[test]
    fn test_binary_automaton() {
        // Two states: alive death goes straight to empty.
        let (survive, spawn) = rules(&[2, 3], &[3]);
        assert_eq!(transition(1, 0, survive, spawn, 1), 0);
        assert_eq!(transition(1, 2, survive, spawn, 1), 1);
        assert_eq!(transition(0, 3, survive, spawn, 1), 1);
    }

    #[test]
    fn test_cell_queries() {
        let alive = Cell::new(4, 4);
        assert!(alive.is_alive() && !alive.is_empty() && !alive.is_decaying());

        let empty = Cell::new(0, 4);
        assert!(empty.is_empty() && !empty.is_alive());

        let decaying = Cell::new(2, 4);
        assert!(decaying.is_decaying());
    }

    #[test]
    fn test_decay_fraction_linear() {
        assert_eq!(Cell::new(4, 4).decay_fraction(), 1.0);
        assert_eq!(Cell::new(3, 4).decay_fraction(), 2.0 / 3.0);
        assert_eq!(Cell::new(1, 4).decay_fraction(), 0.0);
        assert_eq!(Cell::new(0, 4).decay_fraction(), 0.0);
    }

    #[test]
    fn test_decay_fraction_binary() {
        // No decay range exists; the alive state is defined as 1.0.
        assert_eq!(Cell::new(1, 1).decay_fraction(), 1.0);
        assert_eq!(Cell::new(0, 1).decay_fraction(), 0.0);
    }
}
