//! Competitive Sudoku agent engine
//!
//! A turn-based game-playing agent for competitive Sudoku: two players
//! alternate writing values into an N×N board (N = n·m), scoring points for
//! every row, column or block a move completes. Given a partially filled
//! board and a set of taboo moves, the agent picks a legal move maximizing
//! its score advantage before a wall-clock deadline.
//!
//! # Architecture
//!
//! - [`board`]: board grid, block dimensions, region index, text format
//! - [`game`]: players, moves, taboo moves, game state and successors
//! - [`rules`]: legal move generation under the uniqueness constraints
//! - [`eval`]: completion-bonus scoring and state evaluation
//! - [`search`]: iterative deepening alpha-beta with a time budget
//! - [`engine`]: the agent tying it all together behind a proposal sink
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use sudoku_duel::{Agent, Board, ChildPolicy, GameState};
//!
//! let board: Board = "2 2\n\
//!     1 . . .\n\
//!     . 2 . .\n\
//!     . . 3 .\n\
//!     . . . 4\n"
//!     .parse()
//!     .unwrap();
//! let state = GameState::new(board, Vec::new());
//!
//! let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_millis(200));
//! if let Some(mv) = agent.best_move(&state) {
//!     println!("agent plays {mv}");
//! }
//! ```
//!
//! # Anytime behavior
//!
//! The agent proposes a fast legal guess before deepening begins and
//! replaces it after every fully completed search depth. Interrupting the
//! budget at any point leaves the last proposal standing, so the harness
//! always has a legal move to play.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Coord, Dims, RegionIndex};
pub use engine::{Agent, LastProposal, ProposalSink};
pub use game::{GameState, Move, Player, TabooMove};
pub use search::{ChildPolicy, SearchResult, Searcher};
