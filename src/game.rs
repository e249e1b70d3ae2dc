//! The turn orchestrator: alternates players, skips a player with no legal
//! move, validates every strategy-returned move before committing it, and
//! reports the final piece counts.

use std::time::Instant;

use log::{debug, info};
use thiserror::Error;

use crate::board::{Board, Player, Square};
use crate::rules::{any_legal_move, is_legal, is_valid, make_move};
use crate::search::strategy::Strategy;

/// Default search depth budget in plies.
pub const DEFAULT_DEPTH: u32 = 4;

/// Fatal to the current game; carries enough context to diagnose which
/// strategy misbehaved. Never retried or recovered internally.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("{player} cannot move to square {mv}\n{board}")]
    IllegalMove {
        player: Player,
        mv: Square,
        board: Board,
    },
    /// A strategy produced no move despite the any_legal_move guard.
    #[error("{player} strategy returned no move\n{board}")]
    NoMove { player: Player, board: Board },
}

#[derive(Debug, Clone)]
pub struct Outcome {
    pub board: Board,
    pub black: u32,
    pub white: u32,
}

impl Outcome {
    pub fn winner(&self) -> Option<Player> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Player::Black),
            std::cmp::Ordering::Less => Some(Player::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Who moves after `prev`? The opponent if it has a legal move; otherwise
/// `prev` again (the opponent is skipped); None once neither side can move.
pub fn next_player(board: &Board, prev: Player) -> Option<Player> {
    let opp = prev.opponent();
    if any_legal_move(opp, board) {
        Some(opp)
    } else if any_legal_move(prev, board) {
        Some(prev)
    } else {
        None
    }
}

/// Ask `strategy` for a move and validate it. The start instant is captured
/// here so the strategy's whole deliberation counts against its budget.
pub fn get_move(
    strategy: &mut dyn Strategy,
    player: Player,
    board: &Board,
    depth: u32,
) -> Result<Square, GameError> {
    let start = Instant::now();
    match strategy.choose_move(player, board, depth, start) {
        Some(mv) if is_valid(mv) && is_legal(mv, player, board) => Ok(mv),
        Some(mv) => Err(GameError::IllegalMove {
            player,
            mv,
            board: board.clone(),
        }),
        None => Err(GameError::NoMove {
            player,
            board: board.clone(),
        }),
    }
}

/// Play a full game from the standard opening position, Black to move.
pub fn play(
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
    depth: u32,
) -> Result<Outcome, GameError> {
    play_from(Board::initial(), Player::Black, black, white, depth)
}

/// Play out a game from an arbitrary position. `first` moves first unless it
/// has no legal move, in which case the skip rule applies immediately.
pub fn play_from(
    mut board: Board,
    first: Player,
    black: &mut dyn Strategy,
    white: &mut dyn Strategy,
    depth: u32,
) -> Result<Outcome, GameError> {
    let mut to_move = if any_legal_move(first, &board) {
        Some(first)
    } else {
        next_player(&board, first)
    };

    while let Some(player) = to_move {
        let strategy: &mut dyn Strategy = match player {
            Player::Black => &mut *black,
            Player::White => &mut *white,
        };
        let mv = get_move(strategy, player, &board, depth)?;
        make_move(mv, player, &mut board);
        info!("{} plays {}", player, mv);
        debug!("\n{}", board);
        to_move = next_player(&board, player);
    }

    let (black_count, white_count) = board.counts();
    Ok(Outcome {
        board,
        black: black_count,
        white: white_count,
    })
}
