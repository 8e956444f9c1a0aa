//! Game state and successor construction
//!
//! A `GameState` is one node's worth of game data: board snapshot, taboo
//! list, the moves played so far, both players' scores and whose turn it is.
//! Search nodes never share state: `apply` builds a fully independent copy,
//! so alpha-beta can explore a child and discard it without side effects on
//! the parent.

use crate::board::{Board, Coord};

use super::{Move, Player, TabooMove};

/// Full game state at one node of the game tree.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Board snapshot owned by this node
    pub board: Board,
    /// Moves forbidden by the harness, regardless of uniqueness
    pub taboo_moves: Vec<TabooMove>,
    /// Moves played so far on this branch, oldest first. Doubles as the
    /// replay guard: a (pos, value) that appears here is never generated
    /// again on this branch because its cell is no longer empty.
    pub moves: Vec<Move>,
    /// Scores indexed by `Player::index()`
    pub scores: [i32; 2],
    /// The player whose turn it is. Stored explicitly so the evaluator's
    /// perspective and the maximizing side are always the same thing.
    pub to_move: Player,
}

impl GameState {
    /// Create an initial state: first player to move, zero scores.
    pub fn new(board: Board, taboo_moves: Vec<TabooMove>) -> Self {
        Self {
            board,
            taboo_moves,
            moves: Vec::new(),
            scores: [0, 0],
            to_move: Player::First,
        }
    }

    /// Check whether the harness has forbidden a move
    #[inline]
    pub fn is_taboo(&self, pos: Coord, value: u8) -> bool {
        let probe = Move::new(pos, value);
        self.taboo_moves.iter().any(|t| t.forbids(probe))
    }

    /// Score of the given player
    #[inline]
    pub fn score(&self, player: Player) -> i32 {
        self.scores[player.index()]
    }

    /// Produce the successor state for a legal move and its completion
    /// bonus. The parent is untouched: the child gets its own board copy,
    /// history and scores, and the turn passes to the other player.
    #[must_use]
    pub fn apply(&self, mv: Move, bonus: u32) -> GameState {
        let mut child = self.clone();
        child.board.put(mv.pos, mv.value);
        child.moves.push(mv);
        child.scores[self.to_move.index()] += bonus as i32;
        child.to_move = self.to_move.opponent();
        child
    }
}
