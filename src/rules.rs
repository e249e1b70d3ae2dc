//! Move legality and application: bracket detection along the eight
//! directions, legal-move enumeration, and the flip procedure.

use crate::board::{Board, Piece, Player, Square, DIRECTIONS};

/// Is `mv` one of the 64 playable squares? A pure range check, independent
/// of occupancy or legality.
pub fn is_valid(mv: Square) -> bool {
    mv.is_playable()
}

/// Walk from `square` along `dir` and return the far endpoint of a bracket:
/// a run of at least one opponent piece terminated by one of `player`'s own.
/// Returns None when the adjacent cell is already `player`'s, or when the
/// run ends on an empty or border cell instead.
pub fn find_bracket(square: Square, player: Player, board: &Board, dir: i8) -> Option<Square> {
    let mut bracket = square.step(dir);
    if board[bracket] == player.piece() {
        return None;
    }
    let opp = player.opponent().piece();
    while board[bracket] == opp {
        bracket = bracket.step(dir);
    }
    match board[bracket] {
        Piece::Empty | Piece::Border => None,
        _ => Some(bracket),
    }
}

/// A move is legal when the square is empty and some direction brackets.
pub fn is_legal(mv: Square, player: Player, board: &Board) -> bool {
    board[mv] == Piece::Empty
        && DIRECTIONS
            .iter()
            .any(|&dir| find_bracket(mv, player, board, dir).is_some())
}

/// All legal moves for `player`, in playable-square enumeration order.
pub fn legal_moves(player: Player, board: &Board) -> Vec<Square> {
    Square::all()
        .filter(|&sq| is_legal(sq, player, board))
        .collect()
}

/// Can `player` move at all? Short-circuits without building the full list.
pub fn any_legal_move(player: Player, board: &Board) -> bool {
    Square::all().any(|sq| is_legal(sq, player, board))
}

/// Place `player`'s piece on `mv` and flip every bracketed run. Callers are
/// responsible for legality; an illegal move places a piece and flips
/// nothing. Legality is checked once at the orchestrator boundary, not here.
pub fn make_move(mv: Square, player: Player, board: &mut Board) {
    board[mv] = player.piece();
    for dir in DIRECTIONS {
        make_flips(mv, player, board, dir);
    }
}

/// Flip the run between `mv` (exclusive) and the bracket endpoint
/// (exclusive) in `dir`. No-op when there is no bracket.
fn make_flips(mv: Square, player: Player, board: &mut Board, dir: i8) {
    let Some(bracket) = find_bracket(mv, player, board, dir) else {
        return;
    };
    let mut sq = mv.step(dir);
    while sq != bracket {
        board[sq] = player.piece();
        sq = sq.step(dir);
    }
}
