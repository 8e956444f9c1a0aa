//! Region index: rows, columns and blocks with O(1) per-cell lookup
//!
//! A region is a set of N cells that must hold distinct values: one of the
//! N rows, N columns or N blocks. The index is built once per board
//! dimensions and is immutable afterwards. Each cell stores its three
//! region ids in a fixed-size array, so the hot path never scans region
//! lists to find membership.

use super::{Board, Coord, Dims, EMPTY};

/// Identifier of a region. Layout: rows are `0..N`, columns `N..2N`,
/// blocks `2N..3N`.
pub type RegionId = usize;

/// Static partition of the board into rows, columns and blocks.
#[derive(Debug, Clone)]
pub struct RegionIndex {
    dims: Dims,
    /// Cell lists per region, `3N` entries
    regions: Vec<Vec<Coord>>,
    /// Per-cell `[row id, column id, block id]`, row-major
    cell_regions: Vec<[RegionId; 3]>,
}

impl RegionIndex {
    /// Build the index for the given dimensions.
    pub fn new(dims: Dims) -> Self {
        let side = dims.side();
        let mut regions: Vec<Vec<Coord>> = vec![Vec::with_capacity(side); 3 * side];

        for row in 0..side as u8 {
            for col in 0..side as u8 {
                let pos = Coord::new(row, col);
                regions[Self::row_id(pos)].push(pos);
                regions[Self::col_id(pos, side)].push(pos);
                regions[Self::block_id(pos, dims)].push(pos);
            }
        }

        let mut cell_regions = Vec::with_capacity(dims.cell_count());
        for row in 0..side as u8 {
            for col in 0..side as u8 {
                let pos = Coord::new(row, col);
                cell_regions.push([
                    Self::row_id(pos),
                    Self::col_id(pos, side),
                    Self::block_id(pos, dims),
                ]);
            }
        }

        Self {
            dims,
            regions,
            cell_regions,
        }
    }

    #[inline]
    fn row_id(pos: Coord) -> RegionId {
        pos.row as usize
    }

    #[inline]
    fn col_id(pos: Coord, side: usize) -> RegionId {
        side + pos.col as usize
    }

    /// Blocks are m rows tall and n columns wide, tiling the board in an
    /// n×m grid: row band `row / m`, column stripe `col / n`.
    #[inline]
    fn block_id(pos: Coord, dims: Dims) -> RegionId {
        let band = pos.row as usize / dims.m() as usize;
        let stripe = pos.col as usize / dims.n() as usize;
        2 * dims.side() + band * dims.m() as usize + stripe
    }

    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Total number of regions (3N)
    #[inline]
    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    /// The three regions a cell belongs to: `[row, column, block]`
    #[inline]
    pub fn cell_regions(&self, pos: Coord) -> [RegionId; 3] {
        self.cell_regions[pos.to_index(self.dims.side())]
    }

    /// Cells of a region, in construction order
    #[inline]
    pub fn cells(&self, region: RegionId) -> &[Coord] {
        &self.regions[region]
    }

    /// Number of empty cells per region for the given board.
    pub fn empty_counts(&self, board: &Board) -> Vec<u8> {
        self.regions
            .iter()
            .map(|cells| cells.iter().filter(|&&p| board.is_cell_empty(p)).count() as u8)
            .collect()
    }

    /// Per-region bitmask of values already present: bit `v - 1` is set when
    /// value `v` occurs in the region. Fits in a `u64` because the board
    /// side is capped at 64.
    pub fn value_masks(&self, board: &Board) -> Vec<u64> {
        self.regions
            .iter()
            .map(|cells| {
                let mut mask = 0u64;
                for &pos in cells {
                    let v = board.get(pos);
                    if v != EMPTY {
                        mask |= 1 << (v - 1);
                    }
                }
                mask
            })
            .collect()
    }
}
