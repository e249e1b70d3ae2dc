//! Move-path counting for movegen validation. A pass (a player with no
//! legal move while the opponent still has one) consumes a ply; a finished
//! game counts its leaf once.

use crate::board::{Board, Player};
use crate::rules::{any_legal_move, legal_moves, make_move};

pub fn perft(board: &Board, player: Player, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }
    let moves = legal_moves(player, board);
    if moves.is_empty() {
        if !any_legal_move(player.opponent(), board) {
            return 1;
        }
        return perft(board, player.opponent(), depth - 1);
    }
    let mut nodes = 0;
    for mv in moves {
        let mut child = board.clone();
        make_move(mv, player, &mut child);
        nodes += perft(&child, player.opponent(), depth - 1);
    }
    nodes
}
