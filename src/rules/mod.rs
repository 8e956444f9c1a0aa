//! Legal move generation
//!
//! A move (pos, value) is legal iff the cell is empty, the move is not
//! taboo, and the value does not already occur in the cell's row, column or
//! block. Generation order is deterministic: cells row-major, values
//! ascending, so a search over the resulting list is reproducible.

use smallvec::SmallVec;

use crate::board::{Coord, RegionIndex};
use crate::game::{GameState, Move};

/// Inline-allocated move buffer. Spills to the heap on large boards.
pub type MoveList = SmallVec<[Move; 64]>;

/// Bitmask of candidate values for one cell: bit `v - 1` set when value `v`
/// is absent from all three of the cell's regions.
#[inline]
fn candidate_mask(index: &RegionIndex, value_masks: &[u64], pos: Coord) -> u64 {
    let side = index.dims().side();
    let all = if side == 64 { u64::MAX } else { (1u64 << side) - 1 };
    let [row, col, block] = index.cell_regions(pos);
    all & !(value_masks[row] | value_masks[col] | value_masks[block])
}

/// Generate every legal move of a state, in deterministic order.
///
/// An empty result is a valid outcome (stalemate); the caller decides what
/// to do with it.
pub fn legal_moves(state: &GameState, index: &RegionIndex) -> MoveList {
    let value_masks = index.value_masks(&state.board);
    let mut moves = MoveList::new();

    for pos in state.board.empty_cells() {
        let mut candidates = candidate_mask(index, &value_masks, pos);
        while candidates != 0 {
            let value = candidates.trailing_zeros() as u8 + 1;
            candidates &= candidates - 1;
            if !state.is_taboo(pos, value) {
                moves.push(Move::new(pos, value));
            }
        }
    }
    moves
}

/// Check a single move against the same rules the generator applies.
pub fn is_legal(state: &GameState, index: &RegionIndex, mv: Move) -> bool {
    let side = state.board.side();
    if (mv.pos.row as usize) >= side || (mv.pos.col as usize) >= side {
        return false;
    }
    if mv.value < 1 || mv.value as usize > side {
        return false;
    }
    if !state.board.is_cell_empty(mv.pos) || state.is_taboo(mv.pos, mv.value) {
        return false;
    }
    let value_masks = index.value_masks(&state.board);
    candidate_mask(index, &value_masks, mv.pos) & (1 << (mv.value - 1)) != 0
}
