use std::time::{Duration, Instant};

use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::board::{Board, Player, Square};
use crate::rules::legal_moves;
use crate::search::alphabeta::{SearchParams, Searcher};
use crate::search::eval::Eval;

/// The nominal per-move wall-clock budget for the time-bounded strategies.
pub const DEFAULT_MOVETIME: Duration = Duration::from_secs(2);

/// A move-selection policy. The orchestrator guarantees at least one legal
/// move exists before calling, and independently re-validates whatever comes
/// back; a bad return is a protocol violation surfaced as an error there,
/// not corrected here.
pub trait Strategy {
    fn choose_move(
        &mut self,
        player: Player,
        board: &Board,
        depth: u32,
        start: Instant,
    ) -> Option<Square>;
}

/// Look up a strategy by its CLI name.
pub fn by_name(name: &str, movetime: Duration, seed: Option<u64>) -> Option<Box<dyn Strategy>> {
    match name {
        "random" => Some(Box::new(match seed {
            Some(seed) => RandomStrategy::seeded(seed),
            None => RandomStrategy::new(),
        })),
        "negamax" => Some(Box::new(NegamaxStrategy)),
        "heuristic" => Some(Box::new(HeuristicStrategy::new(movetime))),
        "alphabeta" => Some(Box::new(AlphaBetaStrategy::new(movetime))),
        _ => None,
    }
}

/// Uniform random choice over the legal moves. Baseline opponent.
pub struct RandomStrategy {
    rng: SmallRng,
}

impl RandomStrategy {
    pub fn new() -> RandomStrategy {
        RandomStrategy {
            rng: SmallRng::from_entropy(),
        }
    }

    pub fn seeded(seed: u64) -> RandomStrategy {
        RandomStrategy {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        RandomStrategy::new()
    }
}

impl Strategy for RandomStrategy {
    fn choose_move(
        &mut self,
        player: Player,
        board: &Board,
        _depth: u32,
        _start: Instant,
    ) -> Option<Square> {
        legal_moves(player, board).choose(&mut self.rng).copied()
    }
}

/// Full-width negamax to the depth budget with material evaluation. No
/// deadline, so only safe at shallow depths.
pub struct NegamaxStrategy;

impl Strategy for NegamaxStrategy {
    fn choose_move(
        &mut self,
        player: Player,
        board: &Board,
        depth: u32,
        start: Instant,
    ) -> Option<Square> {
        let mut searcher = Searcher::new(SearchParams {
            depth,
            movetime: None,
            use_pruning: false,
            eval: Eval::Material,
        });
        searcher.search(board, player, start).bestmove
    }
}

/// Negamax with the weighted positional evaluation and a soft wall-clock
/// cutoff, no pruning.
pub struct HeuristicStrategy {
    movetime: Duration,
}

impl HeuristicStrategy {
    pub fn new(movetime: Duration) -> HeuristicStrategy {
        HeuristicStrategy { movetime }
    }
}

impl Default for HeuristicStrategy {
    fn default() -> Self {
        HeuristicStrategy::new(DEFAULT_MOVETIME)
    }
}

impl Strategy for HeuristicStrategy {
    fn choose_move(
        &mut self,
        player: Player,
        board: &Board,
        depth: u32,
        start: Instant,
    ) -> Option<Square> {
        let mut searcher = Searcher::new(SearchParams {
            depth,
            movetime: Some(self.movetime),
            use_pruning: false,
            eval: Eval::Positional,
        });
        searcher.search(board, player, start).bestmove
    }
}

/// The full engine: alpha-beta pruned negamax, positional evaluation, soft
/// wall-clock cutoff. Value-identical to `HeuristicStrategy` at equal depth
/// when time is unlimited; pruning only skips branches that cannot change
/// the result.
pub struct AlphaBetaStrategy {
    movetime: Duration,
}

impl AlphaBetaStrategy {
    pub fn new(movetime: Duration) -> AlphaBetaStrategy {
        AlphaBetaStrategy { movetime }
    }
}

impl Default for AlphaBetaStrategy {
    fn default() -> Self {
        AlphaBetaStrategy::new(DEFAULT_MOVETIME)
    }
}

impl Strategy for AlphaBetaStrategy {
    fn choose_move(
        &mut self,
        player: Player,
        board: &Board,
        depth: u32,
        start: Instant,
    ) -> Option<Square> {
        let mut searcher = Searcher::new(SearchParams {
            depth,
            movetime: Some(self.movetime),
            use_pruning: true,
            eval: Eval::Positional,
        });
        searcher.search(board, player, start).bestmove
    }
}
