//! Top-level agent driving the search
//!
//! The agent is the piece the game harness talks to. Its only externally
//! observable action is proposing moves through a [`ProposalSink`]; the
//! harness enforces the real deadline and plays whatever was proposed last.
//!
//! Per invocation the agent:
//!
//! 1. builds the region index and generates the root's legal moves;
//! 2. immediately proposes a fast initial guess, so a proposal exists even
//!    if the budget expires before any search pass completes;
//! 3. runs iterative deepening alpha-beta, which replaces the proposal
//!    after every completed depth.
//!
//! Every proposal is legal at the root at the moment it is made.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use sudoku_duel::board::Board;
//! use sudoku_duel::engine::Agent;
//! use sudoku_duel::game::GameState;
//! use sudoku_duel::search::ChildPolicy;
//!
//! let board: Board = "2 2\n1 . . .\n. 2 . .\n. . 3 .\n. . . 4\n".parse().unwrap();
//! let state = GameState::new(board, Vec::new());
//!
//! let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_millis(100));
//! let mv = agent.best_move(&state).unwrap();
//! println!("agent plays {mv}");
//! ```

use std::time::Duration;

use log::{info, warn};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::board::RegionIndex;
use crate::game::{GameState, Move};
use crate::rules::legal_moves;
use crate::search::{ChildPolicy, SearchResult, SearchStats, Searcher};

/// Receiver for move proposals — the agent's outward interface.
///
/// The agent may call [`propose`](ProposalSink::propose) several times per
/// invocation; each call supersedes the previous one. The harness keeps the
/// last proposal and plays it when time is up.
pub trait ProposalSink {
    fn propose(&mut self, mv: Move);
}

/// Sink keeping only the most recent proposal.
#[derive(Debug, Default)]
pub struct LastProposal {
    last: Option<Move>,
}

impl LastProposal {
    pub fn new() -> Self {
        Self::default()
    }

    /// The most recent proposal, if any
    #[inline]
    pub fn last(&self) -> Option<Move> {
        self.last
    }

    /// Take the most recent proposal, leaving the sink empty
    #[inline]
    pub fn take(&mut self) -> Option<Move> {
        self.last.take()
    }
}

impl ProposalSink for LastProposal {
    #[inline]
    fn propose(&mut self, mv: Move) {
        self.last = Some(mv);
    }
}

/// Default wall-clock budget per move
const DEFAULT_BUDGET: Duration = Duration::from_secs(60);

/// Competitive Sudoku agent: anytime move selection under a time budget.
pub struct Agent {
    policy: ChildPolicy,
    budget: Duration,
    rng: SmallRng,
}

impl Agent {
    /// Create an agent with the default configuration: all legal moves
    /// expanded, 60 second budget.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ChildPolicy::default(), DEFAULT_BUDGET)
    }

    /// Create an agent with an explicit child policy and time budget.
    #[must_use]
    pub fn with_config(policy: ChildPolicy, budget: Duration) -> Self {
        Self {
            policy,
            budget,
            rng: SmallRng::from_os_rng(),
        }
    }

    /// Like [`with_config`](Agent::with_config), but with a fixed RNG seed
    /// for reproducible empty-board openings.
    #[must_use]
    pub fn with_seed(policy: ChildPolicy, budget: Duration, seed: u64) -> Self {
        Self {
            policy,
            budget,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn policy(&self) -> ChildPolicy {
        self.policy
    }

    #[must_use]
    pub fn budget(&self) -> Duration {
        self.budget
    }

    /// Compute a move for the given state, streaming proposals into `sink`.
    ///
    /// If the root has no legal moves nothing is proposed and the result is
    /// empty — a defined outcome, not an error. Otherwise at least one
    /// legal proposal is made before any deep search begins.
    pub fn compute_best_move(
        &mut self,
        state: &GameState,
        sink: &mut dyn ProposalSink,
    ) -> SearchResult {
        let index = RegionIndex::new(state.board.dims());
        let moves = legal_moves(state, &index);

        if moves.is_empty() {
            warn!("no legal moves at root, nothing to propose");
            return SearchResult {
                best_move: None,
                score: 0,
                depth: 0,
                nodes: 0,
                stats: SearchStats::default(),
            };
        }

        let initial = self.initial_proposal(state, &moves);
        info!("initial proposal: {initial} ({} legal moves)", moves.len());
        sink.propose(initial);

        let mut searcher = Searcher::new(&index, self.policy, self.budget);
        let result = searcher.run(state, sink);
        info!(
            "search done: depth {} nodes {} best {:?}",
            result.depth, result.nodes, result.best_move
        );
        result
    }

    /// Convenience wrapper returning the last proposal directly.
    #[must_use]
    pub fn best_move(&mut self, state: &GameState) -> Option<Move> {
        let mut sink = LastProposal::new();
        self.compute_best_move(state, &mut sink);
        sink.take()
    }

    /// Fast initial guess, made before deepening begins.
    ///
    /// On a fully empty board every move is equivalent, so one is picked at
    /// random. Otherwise the move targets the cell with the fewest legal
    /// candidate values: the most constrained cell is the most informative
    /// one to commit early.
    fn initial_proposal(&mut self, state: &GameState, moves: &[Move]) -> Move {
        if state.board.is_board_empty() {
            let idx = self.rng.random_range(0..moves.len());
            return moves[idx];
        }

        // Moves are grouped by cell (row-major generation order); keep the
        // first move of the smallest group.
        let mut best = moves[0];
        let mut best_count = usize::MAX;
        let mut i = 0;
        while i < moves.len() {
            let pos = moves[i].pos;
            let mut j = i;
            while j < moves.len() && moves[j].pos == pos {
                j += 1;
            }
            if j - i < best_count {
                best_count = j - i;
                best = moves[i];
            }
            i = j;
        }
        best
    }
}

impl Default for Agent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Board, Coord};
    use crate::eval::move_bonus;
    use crate::game::TabooMove;
    use crate::rules::is_legal;
    use std::time::Instant;

    struct RecordingSink {
        proposals: Vec<Move>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                proposals: Vec::new(),
            }
        }
    }

    impl ProposalSink for RecordingSink {
        fn propose(&mut self, mv: Move) {
            self.proposals.push(mv);
        }
    }

    fn state_from(text: &str) -> GameState {
        let board: Board = text.parse().unwrap();
        GameState::new(board, Vec::new())
    }

    fn fast_agent(ms: u64) -> Agent {
        Agent::with_seed(ChildPolicy::AllMoves, Duration::from_millis(ms), 7)
    }

    #[test]
    fn test_near_zero_budget_still_proposes_exactly_once() {
        let state = state_from("2 2\n1 . . .\n. 2 . .\n. . 3 .\n. . . 4\n");
        let mut agent = Agent::with_seed(ChildPolicy::AllMoves, Duration::ZERO, 7);

        let index = RegionIndex::new(state.board.dims());
        let mut sink = RecordingSink::new();
        let start = Instant::now();
        agent.compute_best_move(&state, &mut sink);

        assert_eq!(sink.proposals.len(), 1);
        assert!(is_legal(&state, &index, sink.proposals[0]));
        assert!(start.elapsed() < Duration::from_secs(2));
    }

    #[test]
    fn test_empty_board_proposes_random_legal_move() {
        let state = state_from("2 2\n. . . .\n. . . .\n. . . .\n. . . .\n");
        let index = RegionIndex::new(state.board.dims());

        let mut agent = Agent::with_seed(ChildPolicy::AllMoves, Duration::ZERO, 42);
        let mv = agent.best_move(&state).unwrap();
        assert!(is_legal(&state, &index, mv));

        // Same seed, same opening
        let mut twin = Agent::with_seed(ChildPolicy::AllMoves, Duration::ZERO, 42);
        assert_eq!(twin.best_move(&state), Some(mv));
    }

    #[test]
    fn test_initial_proposal_targets_most_constrained_cell() {
        // (0,0) has a single candidate (4); every other empty cell has more
        let state = state_from("2 2\n. 3 2 1\n. . . .\n. . . .\n. . . .\n");
        let mut agent = fast_agent(0);

        let mut sink = RecordingSink::new();
        agent.compute_best_move(&state, &mut sink);
        assert_eq!(sink.proposals[0], Move::new(Coord::new(0, 0), 4));
    }

    #[test]
    fn test_no_legal_moves_means_no_proposal_and_no_panic() {
        let state = state_from("2 2\n4 3 2 1\n2 1 4 3\n3 4 1 2\n1 2 3 4\n");
        let mut agent = fast_agent(50);

        let mut sink = RecordingSink::new();
        let result = agent.compute_best_move(&state, &mut sink);

        assert!(result.best_move.is_none());
        assert!(sink.proposals.is_empty());
        assert!(agent.best_move(&state).is_none());
    }

    #[test]
    fn test_taboo_root_stalemate() {
        // One empty cell whose only uniqueness-legal value is taboo
        let board: Board = "2 2\n. 3 2 1\n2 1 4 3\n3 4 1 2\n1 2 3 4\n".parse().unwrap();
        let taboo = vec![TabooMove::new(Coord::new(0, 0), 4)];
        let state = GameState::new(board, taboo);

        let mut agent = fast_agent(50);
        assert!(agent.best_move(&state).is_none());
    }

    #[test]
    fn test_all_proposals_are_legal_at_root() {
        let state = state_from("2 2\n1 2 . .\n. . 1 2\n2 . . 1\n. 1 2 .\n");
        let index = RegionIndex::new(state.board.dims());
        let mut agent = fast_agent(500);

        let mut sink = RecordingSink::new();
        agent.compute_best_move(&state, &mut sink);

        assert!(!sink.proposals.is_empty());
        for mv in &sink.proposals {
            assert!(is_legal(&state, &index, *mv), "illegal proposal {mv}");
        }
    }

    #[test]
    fn test_forced_last_cell_is_proposed() {
        let state = state_from("2 2\n. 3 2 1\n2 1 4 3\n3 4 1 2\n1 2 3 4\n");
        let mut agent = fast_agent(100);

        let mv = agent.best_move(&state).unwrap();
        assert_eq!(mv, Move::new(Coord::new(0, 0), 4));
    }

    #[test]
    fn test_full_game_playout_stays_consistent() {
        // Two agents alternate on a 4x4 board until no move is left; every
        // applied move must be legal in the state it was chosen for.
        let mut state = state_from("2 2\n. . . .\n. . . .\n. . . .\n. . . .\n");
        let index = RegionIndex::new(state.board.dims());
        let mut agent = Agent::with_seed(ChildPolicy::AllMoves, Duration::from_millis(20), 99);

        for _ in 0..state.board.dims().cell_count() {
            let Some(mv) = agent.best_move(&state) else {
                break;
            };
            assert!(is_legal(&state, &index, mv));
            let counts = index.empty_counts(&state.board);
            let bonus = move_bonus(mv, &index, &counts);
            state = state.apply(mv, bonus);
        }

        assert!(state.scores[0] >= 0 && state.scores[1] >= 0);
        assert!(state.board.is_full() || agent.best_move(&state).is_none());
    }

    #[test]
    fn test_forced_first_policy_plays_a_legal_move() {
        let state = state_from("2 2\n. 3 2 1\n2 . . .\n3 . . .\n1 . . .\n");
        let index = RegionIndex::new(state.board.dims());
        let mut agent = Agent::with_seed(ChildPolicy::ForcedFirst, Duration::from_millis(100), 7);

        let mv = agent.best_move(&state).unwrap();
        assert!(is_legal(&state, &index, mv));
    }
}
