//! Game-level types: players, moves and taboo moves

pub mod state;

pub use state::GameState;

use crate::board::Coord;

/// The two players of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    First,
    Second,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }

    /// Index into per-player score arrays
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Player::First => 0,
            Player::Second => 1,
        }
    }
}

/// A candidate action: write `value` into the cell at `pos`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub pos: Coord,
    pub value: u8,
}

impl Move {
    #[inline]
    pub fn new(pos: Coord, value: u8) -> Self {
        Self { pos, value }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.pos, self.value)
    }
}

/// A coordinate+value combination that is forbidden regardless of the
/// uniqueness rules. Supplied by the game harness, which detects moves that
/// are legal by uniqueness but would make the puzzle unsolvable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TabooMove {
    pub pos: Coord,
    pub value: u8,
}

impl TabooMove {
    #[inline]
    pub fn new(pos: Coord, value: u8) -> Self {
        Self { pos, value }
    }

    /// Check whether this taboo entry forbids the given move
    #[inline]
    pub fn forbids(self, mv: Move) -> bool {
        self.pos == mv.pos && self.value == mv.value
    }
}

impl From<Move> for TabooMove {
    #[inline]
    fn from(mv: Move) -> Self {
        Self {
            pos: mv.pos,
            value: mv.value,
        }
    }
}
