//! Move scoring and state evaluation
//!
//! Two independent concerns live here:
//!
//! - the **completion bonus** a move earns, determined by how many of its
//!   three regions it fills to completion (the region had exactly one empty
//!   cell and the move is the one that fills it);
//! - the **state evaluation** used at search cutoffs: the score difference
//!   from the perspective of the player to move.

use crate::board::RegionIndex;
use crate::game::{GameState, Move};

/// Points for completing 0, 1, 2 or 3 regions with a single move. Fixed
/// game policy: completing several regions at once pays the combined bonus
/// as one lookup, not a sum of per-region awards.
pub const COMPLETION_BONUS: [u32; 4] = [0, 1, 3, 7];

/// Completion bonus for a move, given the per-region empty counts of the
/// state the move is played in (see [`RegionIndex::empty_counts`]).
#[inline]
pub fn move_bonus(mv: Move, index: &RegionIndex, empty_counts: &[u8]) -> u32 {
    let completed = index
        .cell_regions(mv.pos)
        .iter()
        .filter(|&&region| empty_counts[region] == 1)
        .count();
    COMPLETION_BONUS[completed]
}

/// Evaluate a state from the perspective of the player to move: own score
/// minus the opponent's. Zero-sum by construction: flipping the turn negates
/// the value, which is what the negamax sign flip in the search relies on.
#[inline]
pub fn evaluate(state: &GameState) -> i32 {
    state.score(state.to_move) - state.score(state.to_move.opponent())
}
