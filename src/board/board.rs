//! Board structure with cell values and empty-cell queries

use super::{Coord, Dims, EMPTY};

/// Game board: an N×N grid of cells, each empty or holding a value in 1..=N.
///
/// The board is a plain value type. Search nodes take full independent
/// copies via `Clone`, so a child can be mutated without touching its
/// parent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    dims: Dims,
    cells: Vec<u8>,
}

impl Board {
    /// Create an empty board for the given block dimensions.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            cells: vec![EMPTY; dims.cell_count()],
        }
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Board side N = n·m
    #[inline]
    pub fn side(&self) -> usize {
        self.dims.side()
    }

    /// Get the value at a cell (`EMPTY` if unfilled)
    #[inline]
    pub fn get(&self, pos: Coord) -> u8 {
        self.cells[pos.to_index(self.side())]
    }

    /// Write a value into a cell. Legality is the caller's responsibility;
    /// the move generator never produces a write that violates uniqueness.
    #[inline]
    pub fn put(&mut self, pos: Coord, value: u8) {
        debug_assert!(value >= 1 && value as usize <= self.side());
        let idx = pos.to_index(self.side());
        self.cells[idx] = value;
    }

    /// Check if a cell is empty
    #[inline]
    pub fn is_cell_empty(&self, pos: Coord) -> bool {
        self.get(pos) == EMPTY
    }

    /// Number of empty cells — also the upper bound on remaining plies
    #[inline]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == EMPTY).count()
    }

    /// Check if no cell has been filled yet
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|&v| v == EMPTY)
    }

    /// Check if every cell has been filled
    #[inline]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&v| v != EMPTY)
    }

    /// Iterate over empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Coord> + '_ {
        let side = self.side();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &v)| v == EMPTY)
            .map(move |(idx, _)| Coord::from_index(idx, side))
    }
}
