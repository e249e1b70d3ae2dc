use crate::board::{Board, Player, Square};

/// Per-square positional weights, indexed by padded square. Corners dominate,
/// the cells next to a corner are liabilities until the corner is taken, and
/// border cells carry weight 0 so they can never contribute.
#[rustfmt::skip]
pub const SQUARE_WEIGHTS: [i32; 100] = [
    0,   0,   0,  0,  0,  0,  0,   0,   0, 0,
    0, 120, -20, 20,  5,  5, 20, -20, 120, 0,
    0, -20, -40, -5, -5, -5, -5, -40, -20, 0,
    0,  20,  -5, 15,  3,  3, 15,  -5,  20, 0,
    0,   5,  -5,  3,  3,  3,  3,  -5,   5, 0,
    0,   5,  -5,  3,  3,  3,  3,  -5,   5, 0,
    0,  20,  -5, 15,  3,  3, 15,  -5,  20, 0,
    0, -20, -40, -5, -5, -5, -5, -40, -20, 0,
    0, 120, -20, 20,  5,  5, 20, -20, 120, 0,
    0,   0,   0,  0,  0,  0,  0,   0,   0, 0,
];

/// Upper bound on any score either evaluation can produce; used as the
/// search infinity.
pub const SCORE_INF: i32 = 10_000;

/// Material differential from `player`'s perspective: own pieces minus the
/// opponent's.
pub fn material_score(player: Player, board: &Board) -> i32 {
    let own = player.piece();
    let opp = player.opponent().piece();
    let mut score = 0;
    for sq in Square::all() {
        let piece = board[sq];
        if piece == own {
            score += 1;
        } else if piece == opp {
            score -= 1;
        }
    }
    score
}

/// Weighted positional differential from `player`'s perspective.
pub fn weighted_score(player: Player, board: &Board) -> i32 {
    let own = player.piece();
    let opp = player.opponent().piece();
    let mut score = 0;
    for sq in Square::all() {
        let piece = board[sq];
        if piece == own {
            score += SQUARE_WEIGHTS[sq.index()];
        } else if piece == opp {
            score -= SQUARE_WEIGHTS[sq.index()];
        }
    }
    score
}

/// Which static evaluation a search should apply at its leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Eval {
    Material,
    Positional,
}

impl Eval {
    pub fn score(self, player: Player, board: &Board) -> i32 {
        match self {
            Eval::Material => material_score(player, board),
            Eval::Positional => weighted_score(player, board),
        }
    }
}
