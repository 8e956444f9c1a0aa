//! Competitive Sudoku agent CLI
//!
//! A command-line walkthrough of the agent on a few scenarios.
//! Set `RUST_LOG=debug` to watch the search deepen.

use std::time::Duration;

use sudoku_duel::board::{Board, Coord, RegionIndex};
use sudoku_duel::engine::{Agent, ProposalSink};
use sudoku_duel::game::{GameState, Move, TabooMove};
use sudoku_duel::search::ChildPolicy;

/// Sink printing every proposal as it arrives.
struct PrintingSink {
    count: usize,
}

impl ProposalSink for PrintingSink {
    fn propose(&mut self, mv: Move) {
        self.count += 1;
        println!("  proposal #{}: {}", self.count, mv);
    }
}

fn main() {
    env_logger::init();

    println!("===========================================");
    println!("    Competitive Sudoku Agent v0.1.0");
    println!("===========================================\n");

    println!("--- Scenario 1: Empty Board ---");
    scenario_empty_board();

    println!("\n--- Scenario 2: Forced Last Cell ---");
    scenario_forced_cell();

    println!("\n--- Scenario 3: Taboo Move ---");
    scenario_taboo();

    println!("\n--- Scenario 4: Timed Mid-Game Search ---");
    scenario_timed_search();

    println!("\n===========================================");
    println!("         All Scenarios Completed");
    println!("===========================================");
}

fn parse(text: &str) -> Board {
    match text.parse() {
        Ok(board) => board,
        Err(e) => {
            eprintln!("bad board text: {e}");
            std::process::exit(1);
        }
    }
}

fn scenario_empty_board() {
    let board = parse("2 2\n. . . .\n. . . .\n. . . .\n. . . .\n");
    println!("{board}");

    let state = GameState::new(board, Vec::new());
    let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_millis(200));

    match agent.best_move(&state) {
        Some(mv) => println!("  agent plays {mv} (random opening on an empty board)"),
        None => println!("  no move found"),
    }
}

fn scenario_forced_cell() {
    let board = parse(
        "2 2\n\
         . 3 2 1\n\
         2 1 4 3\n\
         3 4 1 2\n\
         1 2 3 4\n",
    );
    println!("{board}");

    let state = GameState::new(board, Vec::new());
    let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_millis(200));

    match agent.best_move(&state) {
        Some(mv) => {
            println!("  agent plays {mv}");
            println!("  expected: (0,0) -> 4 (the only legal move)");
        }
        None => println!("  no move found"),
    }
}

fn scenario_taboo() {
    let board = parse(
        "2 2\n\
         . 3 2 1\n\
         2 1 4 3\n\
         3 4 1 2\n\
         1 2 3 4\n",
    );
    println!("{board}");
    println!("  taboo: (0,0) -> 4");

    let taboo = vec![TabooMove::new(Coord::new(0, 0), 4)];
    let state = GameState::new(board, taboo);
    let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_millis(200));

    match agent.best_move(&state) {
        Some(mv) => println!("  unexpected move {mv}"),
        None => println!("  agent proposes nothing: the only candidate is taboo"),
    }
}

fn scenario_timed_search() {
    let board = parse(
        "2 3\n\
         1 . . . . 6\n\
         . . 3 . . .\n\
         . 5 . . 2 .\n\
         . . . 4 . .\n\
         6 . . . . 1\n\
         . 2 . . 5 .\n",
    );
    println!("{board}");

    let state = GameState::new(board, Vec::new());
    let index = RegionIndex::new(state.board.dims());
    println!(
        "  {} empty cells, {} regions",
        state.board.empty_count(),
        index.region_count()
    );

    let mut agent = Agent::with_config(ChildPolicy::AllMoves, Duration::from_secs(1));
    let mut sink = PrintingSink { count: 0 };
    let result = agent.compute_best_move(&state, &mut sink);

    println!(
        "  final: {:?} at depth {} after {} nodes ({} beta cutoffs)",
        result.best_move, result.depth, result.nodes, result.stats.beta_cutoffs
    );
}
