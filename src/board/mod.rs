//! Board representation for competitive Sudoku

pub mod board;
pub mod parse;
pub mod regions;

// Re-exports
pub use board::Board;
pub use parse::ParseBoardError;
pub use regions::{RegionId, RegionIndex};

use thiserror::Error;

/// Value of an empty cell
pub const EMPTY: u8 = 0;

/// Block dimensions of a board: blocks are `m` rows tall and `n` columns
/// wide, tiling the board in an n×m grid. The board side is N = n·m.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    n: u8,
    m: u8,
}

/// Invalid block dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DimsError {
    #[error("block dimensions must be at least 1x1")]
    Empty,
    #[error("board side {0} exceeds the supported maximum of 64")]
    TooLarge(usize),
}

impl Dims {
    /// Create validated block dimensions. The board side n·m is capped at 64
    /// so a region's value set fits in a single `u64` mask.
    pub fn new(n: u8, m: u8) -> Result<Self, DimsError> {
        if n == 0 || m == 0 {
            return Err(DimsError::Empty);
        }
        let side = n as usize * m as usize;
        if side > 64 {
            return Err(DimsError::TooLarge(side));
        }
        Ok(Self { n, m })
    }

    /// Block width in columns
    #[inline]
    pub fn n(self) -> u8 {
        self.n
    }

    /// Block height in rows
    #[inline]
    pub fn m(self) -> u8 {
        self.m
    }

    /// Board side N = n·m
    #[inline]
    pub fn side(self) -> usize {
        self.n as usize * self.m as usize
    }

    /// Total cell count N²
    #[inline]
    pub fn cell_count(self) -> usize {
        self.side() * self.side()
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: u8,
    pub col: u8,
}

impl Coord {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index for a board of the given side
    #[inline]
    pub fn to_index(self, side: usize) -> usize {
        self.row as usize * side + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, side: usize) -> Self {
        Self {
            row: (idx / side) as u8,
            col: (idx % side) as u8,
        }
    }
}

impl PartialOrd for Coord {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Coord {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dims_valid() {
        let dims = Dims::new(2, 3).unwrap();
        assert_eq!(dims.side(), 6);
        assert_eq!(dims.cell_count(), 36);
    }

    #[test]
    fn test_dims_rejects_zero() {
        assert_eq!(Dims::new(0, 3), Err(DimsError::Empty));
        assert_eq!(Dims::new(3, 0), Err(DimsError::Empty));
    }

    #[test]
    fn test_dims_rejects_oversized() {
        assert_eq!(Dims::new(9, 9), Err(DimsError::TooLarge(81)));
        assert!(Dims::new(8, 8).is_ok());
    }

    #[test]
    fn test_coord_index_round_trip() {
        let side = 6;
        for idx in 0..side * side {
            let c = Coord::from_index(idx, side);
            assert_eq!(c.to_index(side), idx);
        }
    }

    #[test]
    fn test_coord_ordering_is_row_major() {
        assert!(Coord::new(0, 5) < Coord::new(1, 0));
        assert!(Coord::new(2, 1) < Coord::new(2, 2));
    }
}
