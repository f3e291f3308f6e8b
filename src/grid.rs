// grid.rs - The Life engine: a square edge-clamped grid and the B3/S23 step

use rand::Rng;

/// State of a single cell. Cells are value types with no identity beyond
/// their grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }

    pub fn toggled(self) -> Cell {
        match self {
            Cell::Dead => Cell::Alive,
            Cell::Alive => Cell::Dead,
        }
    }
}

// Offsets of the 8 surrounding positions.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// A square `size × size` grid of cells, stored flattened row-major
/// (`row * size + col`).
///
/// The grid is edge-clamped, not toroidal: positions outside the bounds
/// simply have no cell, so a corner cell sees at most 3 neighbors and an
/// edge cell at most 5.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a `size × size` grid with every cell set to `fill`.
    pub fn new(size: usize, fill: Cell) -> Self {
        Self {
            size,
            cells: vec![fill; size * size],
        }
    }

    /// Creates a `size × size` grid where each cell is independently
    /// alive with probability `alive_probability`.
    pub fn random<R: Rng>(size: usize, alive_probability: f64, rng: &mut R) -> Self {
        let cells = (0..size * size)
            .map(|_| {
                if rng.gen_bool(alive_probability) {
                    Cell::Alive
                } else {
                    Cell::Dead
                }
            })
            .collect();
        Self { size, cells }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Number of live cells in the whole grid.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Counts the live neighbors of `(row, col)`. Out-of-bounds positions
    /// are skipped, never wrapped around.
    pub fn live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;
        for &(dr, dc) in &NEIGHBOR_OFFSETS {
            let nr = row as i32 + dr;
            let nc = col as i32 + dc;
            if nr < 0 || nc < 0 || nr >= self.size as i32 || nc >= self.size as i32 {
                continue;
            }
            if self.get(nr as usize, nc as usize).is_alive() {
                count += 1;
            }
        }
        count
    }

    /// Computes the next generation from a fixed snapshot of `self`.
    ///
    /// Every cell is decided from the CURRENT grid only; the input is
    /// never mutated, so no rule can observe a half-updated neighbor.
    pub fn next_generation(&self) -> Grid {
        let mut next = self.clone();
        for row in 0..self.size {
            for col in 0..self.size {
                let n = self.live_neighbors(row, col);
                let current = self.get(row, col);

                // Under/overpopulation applies regardless of the current
                // state and takes precedence over birth.
                next.cells[row * self.size + col] = if n < 2 || n > 3 {
                    Cell::Dead
                } else if current == Cell::Dead && n == 3 {
                    Cell::Alive
                } else {
                    // A live cell with 2 or 3 neighbors survives.
                    current
                };
            }
        }
        next
    }

    /// Returns a copy of the grid with `(row, col)` set to `value` and
    /// every other cell unchanged.
    pub fn with_cell(&self, row: usize, col: usize, value: Cell) -> Grid {
        debug_assert!(row < self.size && col < self.size);
        let mut next = self.clone();
        next.cells[row * self.size + col] = value;
        next
    }
}
