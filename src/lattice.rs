//! The cubic lattice and its incrementally-maintained neighbor counts.
//!
//! The lattice owns two flat arrays of `dimension³` entries: cell
//! vitalities and, per cell, a cached count of fully alive neighbors.
//! Stepping reads all decisions from a frozen snapshot of the counts and
//! patches the live counts with ±1 deltas as cells cross the alive/empty
//! edges, so a generation costs O(changed cells × neighbors) in count
//! maintenance instead of a full O(cells × neighbors) recount.

use glam::Vec3;

use crate::cell::{transition, Cell};
use crate::config::{Boundary, FillShape, Neighborhood};
use crate::rng::SimpleRng;
use crate::rule::RuleSet;

/// A fixed-size cubic lattice of vitality cells.
///
/// Cells are stored in a flat buffer with the linear index convention
/// `index = x + y·D + z·D²` where `D` is the dimension.
///
/// # Example
///
/// ```
/// use ca3d::{Boundary, Lattice, Neighborhood, RuleSet};
///
/// let mut lattice = Lattice::new(16, Boundary::Wrap, Neighborhood::Moore, 5);
/// lattice.fill(ca3d::FillShape::Cube, 6.0, 0.5, 12345);
/// lattice.step(RuleSet::parse("4"), RuleSet::parse("4"));
/// ```
#[derive(Debug, Clone)]
pub struct Lattice {
    dimension: usize,
    boundary: Boundary,
    neighborhood: Neighborhood,
    states_minus_one: u8,
    /// Cell vitalities, `len == dimension³`.
    cells: Vec<u8>,
    /// Cached alive-neighbor counts, parallel to `cells`.
    counts: Vec<u8>,
    /// Output buffer for the next generation, reused across steps.
    next_cells: Vec<u8>,
    /// Frozen copy of `counts` that step decisions read from.
    snapshot: Vec<u8>,
    /// Set by direct cell writes; forces a recount before the next step.
    stale_counts: bool,
}

impl Lattice {
    /// Creates an all-empty lattice.
    ///
    /// `states` is the number of vitality states; `states - 1` is the
    /// alive value.
    ///
    /// # Panics
    /// Panics if `dimension == 0` or `states < 2`.
    pub fn new(
        dimension: usize,
        boundary: Boundary,
        neighborhood: Neighborhood,
        states: u8,
    ) -> Self {
        assert!(dimension > 0, "dimension must be at least 1");
        assert!(states >= 2, "states must be at least 2");

        let len = dimension * dimension * dimension;
        Self {
            dimension,
            boundary,
            neighborhood,
            states_minus_one: states - 1,
            cells: vec![0; len],
            counts: vec![0; len],
            next_cells: vec![0; len],
            snapshot: vec![0; len],
            stale_counts: false,
        }
    }

    /// Returns the cells-per-axis dimension.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Returns the number of vitality states.
    pub fn states(&self) -> u8 {
        self.states_minus_one + 1
    }

    /// Returns the boundary mode.
    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    /// Returns the neighborhood topology.
    pub fn neighborhood(&self) -> Neighborhood {
        self.neighborhood
    }

    /// Returns the total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the lattice holds no cells. Never true in
    /// practice, since the dimension is at least 1.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Converts coordinates to the linear index `x + y·D + z·D²`.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn index_of(&self, x: usize, y: usize, z: usize) -> usize {
        let d = self.dimension;
        assert!(x < d && y < d && z < d, "cell ({x}, {y}, {z}) out of range");
        x + y * d + z * d * d
    }

    /// Converts a linear index back to `(x, y, z)` coordinates.
    pub fn position_of(&self, index: usize) -> (usize, usize, usize) {
        let d = self.dimension;
        (index % d, (index / d) % d, index / (d * d))
    }

    /// Returns the vitality of a cell.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn get(&self, x: usize, y: usize, z: usize) -> u8 {
        self.cells[self.index_of(x, y, z)]
    }

    /// Returns the vitality of a cell, or `None` if out of bounds.
    pub fn try_get(&self, x: i32, y: i32, z: i32) -> Option<u8> {
        let d = self.dimension as i32;
        if x >= 0 && x < d && y >= 0 && y < d && z >= 0 && z < d {
            Some(self.cells[self.index_of(x as usize, y as usize, z as usize)])
        } else {
            None
        }
    }

    /// Writes a cell vitality directly.
    ///
    /// Marks the neighbor-count cache stale; the next [`step`](Self::step)
    /// recounts before deciding, or call
    /// [`recount_neighbors`](Self::recount_neighbors) eagerly.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn set(&mut self, x: usize, y: usize, z: usize, vitality: u8) {
        let index = self.index_of(x, y, z);
        self.cells[index] = vitality;
        self.stale_counts = true;
    }

    /// Returns a read-only capability view of one cell.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn cell(&self, x: usize, y: usize, z: usize) -> Cell {
        Cell::new(self.get(x, y, z), self.states_minus_one)
    }

    /// Returns a read-only capability view of the cell at a linear index.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn cell_at(&self, index: usize) -> Cell {
        Cell::new(self.cells[index], self.states_minus_one)
    }

    /// Returns the raw vitality buffer, indexed by `x + y·D + z·D²`.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Returns the cached alive-neighbor count of a cell.
    ///
    /// # Panics
    /// Panics if any coordinate is outside `0..dimension`.
    pub fn neighbor_count(&self, x: usize, y: usize, z: usize) -> u8 {
        self.counts[self.index_of(x, y, z)]
    }

    /// Returns the number of non-empty cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0).count()
    }

    /// Returns the number of fully alive cells.
    pub fn alive_count(&self) -> usize {
        let alive = self.states_minus_one;
        self.cells.iter().filter(|&&v| v == alive).count()
    }

    /// Resets every cell to empty and every count to zero.
    pub fn clear(&mut self) {
        self.cells.fill(0);
        self.counts.fill(0);
        self.stale_counts = false;
    }

    fn is_alive(&self, vitality: u8) -> bool {
        vitality == self.states_minus_one
    }

    /// Resolves a neighbor coordinate under the boundary mode.
    ///
    /// Returns the neighbor's linear index, or `None` when a bounded
    /// lattice excludes the offset.
    fn neighbor_index(
        &self,
        x: usize,
        y: usize,
        z: usize,
        offset: (i32, i32, i32),
    ) -> Option<usize> {
        let d = self.dimension as i32;
        let nx = x as i32 + offset.0;
        let ny = y as i32 + offset.1;
        let nz = z as i32 + offset.2;

        let (nx, ny, nz) = match self.boundary {
            Boundary::Wrap => (
                nx.rem_euclid(d) as usize,
                ny.rem_euclid(d) as usize,
                nz.rem_euclid(d) as usize,
            ),
            Boundary::Bounded => {
                if nx < 0 || nx >= d || ny < 0 || ny >= d || nz < 0 || nz >= d {
                    return None;
                }
                (nx as usize, ny as usize, nz as usize)
            }
        };
        Some(nx + ny * self.dimension + nz * self.dimension * self.dimension)
    }

    /// Counts the fully alive neighbors of one cell from scratch.
    fn count_alive_neighbors(&self, x: usize, y: usize, z: usize) -> u8 {
        let mut count = 0;
        for &offset in self.neighborhood.offsets() {
            if let Some(index) = self.neighbor_index(x, y, z, offset) {
                if self.is_alive(self.cells[index]) {
                    count += 1;
                }
            }
        }
        count
    }

    /// Recomputes every cached neighbor count from the current cells.
    ///
    /// O(cells × neighbors); used after bulk seeding or direct writes.
    /// Stepping keeps the cache correct incrementally, so well-behaved
    /// hosts only pay this once per reset.
    pub fn recount_neighbors(&mut self) {
        self.stale_counts = false;
        for index in 0..self.cells.len() {
            let (x, y, z) = self.position_of(index);
            self.counts[index] = self.count_alive_neighbors(x, y, z);
        }
    }

    /// Applies a ±1 delta to the live counts of every neighbor of a cell.
    fn bump_neighbors(&mut self, x: usize, y: usize, z: usize, delta: i16) {
        for &offset in self.neighborhood.offsets() {
            if let Some(index) = self.neighbor_index(x, y, z, offset) {
                self.counts[index] = (self.counts[index] as i16 + delta) as u8;
            }
        }
    }

    /// Advances one generation under the given survive/spawn rules.
    ///
    /// Synchronous semantics: every cell's transition reads the pre-step
    /// neighbor counts, so no cell sees another cell's decision from the
    /// same generation. Returns only after the whole generation has been
    /// computed and swapped in.
    pub fn step(&mut self, survive: RuleSet, spawn: RuleSet) {
        let states_minus_one = self.states_minus_one;
        self.step_with(move |current, neighbors| {
            transition(current, neighbors, survive, spawn, states_minus_one)
        });
    }

    /// Advances one generation with a custom transition function
    /// `f(current_vitality, alive_neighbor_count) -> next_vitality`.
    ///
    /// Count deltas are derived from the alive/empty edges each cell
    /// crosses, so `f` must respect the vitality machine's shape: an
    /// empty cell either stays empty or becomes fully alive (never a
    /// decay value), and no cell jumps from a decay value to alive.
    /// [`transition`] satisfies this; so does anything built from it.
    pub fn step_with<F: Fn(u8, u8) -> u8>(&mut self, f: F) {
        if self.stale_counts {
            self.recount_neighbors();
        }
        self.snapshot.copy_from_slice(&self.counts);
        self.step_in_order(0..self.cells.len(), f);
    }

    /// The step core. `order` must visit every cell index exactly once;
    /// any order produces the same result because decisions read only the
    /// snapshot and count deltas commute.
    fn step_in_order<F: Fn(u8, u8) -> u8>(
        &mut self,
        order: impl IntoIterator<Item = usize>,
        f: F,
    ) {
        for index in order {
            let current = self.cells[index];
            let next = f(current, self.snapshot[index]);
            self.next_cells[index] = next;

            let was_alive = self.is_alive(current);
            let was_empty = current == 0;
            if was_alive && !self.is_alive(next) {
                let (x, y, z) = self.position_of(index);
                self.bump_neighbors(x, y, z, -1);
            }
            if was_empty && next != 0 {
                let (x, y, z) = self.position_of(index);
                self.bump_neighbors(x, y, z, 1);
            }
        }
        std::mem::swap(&mut self.cells, &mut self.next_cells);
    }

    /// Seeds the lattice: every cell whose center lies inside the shape
    /// (centered on the grid center) becomes alive with probability
    /// `probability`, otherwise empty. Cells outside the shape are left
    /// untouched. Recounts neighbors once at the end.
    pub fn fill(&mut self, shape: FillShape, diameter: f32, probability: f32, seed: u64) {
        let mut rng = SimpleRng::new(seed);
        let center = Vec3::splat((self.dimension as f32 - 1.0) * 0.5);
        let radius = diameter * 0.5;

        for index in 0..self.cells.len() {
            let (x, y, z) = self.position_of(index);
            let p = Vec3::new(x as f32, y as f32, z as f32);
            let inside = match shape {
                FillShape::Cube => {
                    let d = (p - center).abs();
                    d.x < radius && d.y < radius && d.z < radius
                }
                FillShape::Sphere => p.distance(center) < radius,
            };
            if inside {
                self.cells[index] = if rng.next_f32() < probability {
                    self.states_minus_one
                } else {
                    0
                };
            }
        }
        self.recount_neighbors();
    }
}
