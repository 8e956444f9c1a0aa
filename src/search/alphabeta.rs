//! Iterative deepening alpha-beta search with a wall-clock budget
//!
//! The searcher expands an implicit game tree of alternating players.
//! Every node owns an independent [`GameState`] copy, so the recursion has
//! no shared mutable state and a discarded branch leaves nothing behind.
//!
//! Time control is cooperative: the clock is checked before each depth
//! iteration and before each node expansion. When the budget runs out the
//! recursion unwinds immediately and the proposal from the last fully
//! completed depth stands — the search is an anytime algorithm, never left
//! without an answer once the first depth-1 pass finishes.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sudoku_duel::board::{Board, RegionIndex};
//! use sudoku_duel::engine::LastProposal;
//! use sudoku_duel::game::GameState;
//! use sudoku_duel::search::{ChildPolicy, Searcher};
//!
//! let board: Board = "2 2\n1 . . .\n. 2 . .\n. . 3 .\n. . . 4\n".parse().unwrap();
//! let state = GameState::new(board, Vec::new());
//! let index = RegionIndex::new(state.board.dims());
//!
//! let mut searcher = Searcher::new(&index, ChildPolicy::AllMoves, Duration::from_millis(200));
//! let mut sink = LastProposal::new();
//! let result = searcher.run(&state, &mut sink);
//! assert!(result.best_move.is_some());
//! ```

use std::time::{Duration, Instant};

use log::debug;

use crate::board::RegionIndex;
use crate::engine::ProposalSink;
use crate::eval::{evaluate, move_bonus};
use crate::game::{GameState, Move};
use crate::rules::{legal_moves, MoveList};

/// Infinity for alpha-beta bounds; comfortably above any reachable score
/// difference (at most 7 points per move, N² moves per game).
const INF: i32 = i32::MAX / 2;

/// Child-generation policy for the search tree.
///
/// The forced-move restriction shrinks the branching factor but can drop
/// high-value multi-region completions from consideration, so the choice is
/// an explicit, testable configuration rather than a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChildPolicy {
    /// Expand every legal move at every node.
    #[default]
    AllMoves,
    /// When one or more regions have exactly one empty cell, expand only
    /// the legal moves targeting those cells; otherwise fall back to all
    /// legal moves.
    ForcedFirst,
}

/// Search diagnostics.
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Beta cutoffs taken (subtrees proven irrelevant)
    pub beta_cutoffs: u64,
    /// Depth passes that ran to completion
    pub depths_completed: u32,
}

/// Result of one top-level search invocation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Best move from the deepest completed pass, if any pass completed
    pub best_move: Option<Move>,
    /// Root value backing `best_move`
    pub score: i32,
    /// Deepest fully completed depth
    pub depth: usize,
    /// Total nodes expanded
    pub nodes: u64,
    /// Search diagnostics
    pub stats: SearchStats,
}

/// Iterative deepening negamax alpha-beta searcher.
///
/// Created once per top-level invocation; the budget clock starts at
/// construction.
pub struct Searcher<'a> {
    index: &'a RegionIndex,
    policy: ChildPolicy,
    start: Instant,
    budget: Duration,
    nodes: u64,
    stats: SearchStats,
}

impl<'a> Searcher<'a> {
    pub fn new(index: &'a RegionIndex, policy: ChildPolicy, budget: Duration) -> Self {
        Self {
            index,
            policy,
            start: Instant::now(),
            budget,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Check whether the wall-clock budget is spent.
    #[inline]
    fn time_up(&self) -> bool {
        self.start.elapsed() >= self.budget
    }

    /// Generate the children of a node: one successor per selected legal
    /// move, each carrying the mover's completion bonus.
    fn expand(&self, state: &GameState) -> Vec<(Move, GameState)> {
        let moves = legal_moves(state, self.index);
        let empty_counts = self.index.empty_counts(&state.board);

        let selected: MoveList = match self.policy {
            ChildPolicy::AllMoves => moves,
            ChildPolicy::ForcedFirst => {
                // A move "targets" a single-empty-cell region when its cell
                // is that region's last empty cell.
                let forced: MoveList = moves
                    .iter()
                    .copied()
                    .filter(|mv| {
                        self.index
                            .cell_regions(mv.pos)
                            .iter()
                            .any(|&region| empty_counts[region] == 1)
                    })
                    .collect();
                if forced.is_empty() {
                    moves
                } else {
                    forced
                }
            }
        };

        selected
            .into_iter()
            .map(|mv| {
                let bonus = move_bonus(mv, self.index, &empty_counts);
                (mv, state.apply(mv, bonus))
            })
            .collect()
    }

    /// Negamax with alpha-beta pruning. The value is always from the
    /// perspective of the player to move in `state`; the caller negates it
    /// across the turn flip. Cutoff (depth exhausted, time exhausted, or no
    /// legal moves) returns the static evaluation.
    fn negamax(&mut self, state: &GameState, depth: usize, mut alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        if depth == 0 || self.time_up() {
            return evaluate(state);
        }

        let children = self.expand(state);
        if children.is_empty() {
            // Terminal: stalemate or full board
            return evaluate(state);
        }

        let mut best = -INF;
        for (_, child) in &children {
            best = best.max(-self.negamax(child, depth - 1, -beta, -alpha));
            if self.time_up() {
                // Unwind; the interrupted root pass discards this value
                break;
            }
            if best >= beta {
                self.stats.beta_cutoffs += 1;
                return best;
            }
            alpha = alpha.max(best);
        }
        best
    }

    /// Run iterative deepening from the root, proposing the best root move
    /// through `sink` after every fully completed depth.
    ///
    /// The depth bound is the number of empty cells (no deeper ply can
    /// exist). Each root child is searched with a fresh full window; the
    /// first child achieving the maximum value is kept, so ties break
    /// stably left-to-right in generation order.
    pub fn run(&mut self, root: &GameState, sink: &mut dyn ProposalSink) -> SearchResult {
        let bound = root.board.empty_count();
        let mut result = SearchResult {
            best_move: None,
            score: 0,
            depth: 0,
            nodes: 0,
            stats: SearchStats::default(),
        };

        for depth in 1..bound {
            if self.time_up() {
                debug!("budget spent before depth {depth}, keeping depth {} result", result.depth);
                break;
            }

            let children = self.expand(root);
            if children.is_empty() {
                break;
            }

            let mut best_move = None;
            let mut best_score = -INF;
            let mut completed = true;

            for (mv, child) in &children {
                if self.time_up() {
                    completed = false;
                    break;
                }
                let score = -self.negamax(child, depth - 1, -INF, INF);
                if self.time_up() {
                    completed = false;
                    break;
                }
                if score > best_score {
                    best_score = score;
                    best_move = Some(*mv);
                }
            }

            if !completed {
                debug!("depth {depth} pass interrupted, keeping depth {} result", result.depth);
                break;
            }

            if let Some(mv) = best_move {
                debug!("depth {depth} complete: best {mv} score {best_score}");
                sink.propose(mv);
                self.stats.depths_completed += 1;
                result.best_move = Some(mv);
                result.score = best_score;
                result.depth = depth;
            }
        }

        result.nodes = self.nodes;
        result.stats = self.stats.clone();
        result
    }
}
