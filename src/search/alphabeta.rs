use std::time::{Duration, Instant};

use log::debug;

use crate::board::{Board, Player, Square};
use crate::rules::{legal_moves, make_move};
use crate::search::eval::{Eval, SCORE_INF};

/// Knobs for a single search invocation.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Depth budget in plies.
    pub depth: u32,
    /// Soft wall-clock budget measured from the start instant handed to
    /// `search`. None means unbounded.
    pub movetime: Option<Duration>,
    /// Apply alpha-beta cutoffs. Off, the full tree is explored and the
    /// window stays infinite, which the pruning-equivalence tests rely on.
    pub use_pruning: bool,
    pub eval: Eval,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: 4,
            movetime: None,
            use_pruning: true,
            eval: Eval::Positional,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct SearchResult {
    pub bestmove: Option<Square>,
    pub score: i32,
    pub nodes: u64,
}

/// Depth-limited negamax over disposable board clones. One `Searcher` per
/// invocation; it carries the deadline and node counter through the
/// recursion.
pub struct Searcher {
    depth: u32,
    movetime: Option<Duration>,
    use_pruning: bool,
    eval: Eval,
    deadline: Option<Instant>,
    pub nodes: u64,
}

impl Searcher {
    pub fn new(params: SearchParams) -> Searcher {
        Searcher {
            depth: params.depth,
            movetime: params.movetime,
            use_pruning: params.use_pruning,
            eval: params.eval,
            deadline: None,
            nodes: 0,
        }
    }

    /// Pick a move for `player`. The deadline is anchored to `start`, which
    /// the orchestrator captures before invoking the strategy, so time spent
    /// between capture and call counts against the budget.
    pub fn search(&mut self, board: &Board, player: Player, start: Instant) -> SearchResult {
        self.deadline = self.movetime.map(|t| start + t);
        self.nodes = 0;

        let moves = legal_moves(player, board);
        let Some(&first) = moves.first() else {
            return SearchResult {
                bestmove: None,
                score: self.eval.score(player, board),
                nodes: self.nodes,
            };
        };

        let mut alpha = -SCORE_INF;
        let beta = SCORE_INF;
        let mut best_score = -SCORE_INF;
        let mut bestmove = first;

        for mv in moves {
            // Soft cutoff: observed between sibling evaluations only, so an
            // in-flight branch runs to completion before we notice.
            if self.out_of_time() {
                debug!("search out of time at root, returning {}", bestmove);
                break;
            }
            let mut child = board.clone();
            make_move(mv, player, &mut child);
            let score = -self.negamax(&child, player.opponent(), self.depth.saturating_sub(1), -beta, -alpha);
            if score > best_score {
                best_score = score;
                bestmove = mv;
            }
            if self.use_pruning && score > alpha {
                alpha = score;
            }
        }

        SearchResult {
            bestmove: Some(bestmove),
            score: best_score,
            nodes: self.nodes,
        }
    }

    fn negamax(&mut self, board: &Board, player: Player, depth: u32, alpha: i32, beta: i32) -> i32 {
        self.nodes += 1;

        let moves = legal_moves(player, board);
        if depth == 0 || moves.is_empty() {
            return self.eval.score(player, board);
        }
        if self.out_of_time() {
            // Deadline hit mid-tree: stand on the static evaluation.
            return self.eval.score(player, board);
        }

        let mut alpha = alpha;
        let mut best = -SCORE_INF;
        for mv in moves {
            let mut child = board.clone();
            make_move(mv, player, &mut child);
            let score = -self.negamax(&child, player.opponent(), depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if self.use_pruning {
                if score > alpha {
                    alpha = score;
                }
                if alpha >= beta {
                    break;
                }
            }
            if self.out_of_time() {
                break;
            }
        }
        best
    }

    fn out_of_time(&self) -> bool {
        match self.deadline {
            Some(deadline) => Instant::now() >= deadline,
            None => false,
        }
    }
}
