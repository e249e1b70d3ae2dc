use std::time::Instant;

use flipbot::board::{Board, Piece, Player, Square};
use flipbot::game::{self, GameError};
use flipbot::search::strategy::{RandomStrategy, Strategy};

/// Records how often it is asked to move; never produces a move.
struct Spy {
    calls: u32,
}

impl Strategy for Spy {
    fn choose_move(
        &mut self,
        _player: Player,
        _board: &Board,
        _depth: u32,
        _start: Instant,
    ) -> Option<Square> {
        self.calls += 1;
        None
    }
}

/// Always returns the same square, legal or not.
struct Fixed(Square);

impl Strategy for Fixed {
    fn choose_move(
        &mut self,
        _player: Player,
        _board: &Board,
        _depth: u32,
        _start: Instant,
    ) -> Option<Square> {
        Some(self.0)
    }
}

/// Black to move with a single flippable White piece; White never gets a
/// turn in this position and the game ends after one move.
fn one_move_board() -> Board {
    let mut board = Board::empty();
    board[Square(11)] = Piece::Black;
    board[Square(12)] = Piece::White;
    board
}

#[test]
fn opponent_without_moves_is_skipped() {
    let board = one_move_board();
    // White has no bracket anywhere; Black keeps the turn.
    assert_eq!(game::next_player(&board, Player::White), Some(Player::Black));
    assert_eq!(game::next_player(&board, Player::Black), Some(Player::Black));
}

#[test]
fn both_players_stuck_is_terminal() {
    let mut board = Board::empty();
    board[Square(44)] = Piece::Black;
    assert_eq!(game::next_player(&board, Player::Black), None);
    assert_eq!(game::next_player(&board, Player::White), None);
}

#[test]
fn skipped_player_strategy_is_never_invoked() {
    let mut black = RandomStrategy::seeded(7);
    let mut white = Spy { calls: 0 };
    let outcome = game::play_from(one_move_board(), Player::Black, &mut black, &mut white, 2)
        .expect("game should finish");
    assert_eq!(white.calls, 0, "white strategy was invoked while stuck");
    assert_eq!((outcome.black, outcome.white), (3, 0));
    assert_eq!(outcome.winner(), Some(Player::Black));
}

#[test]
fn terminal_state_reports_counts_without_further_mutation() {
    let mut black = RandomStrategy::seeded(1);
    let mut white = RandomStrategy::seeded(2);
    let board = one_move_board();
    let outcome = game::play_from(board, Player::Black, &mut black, &mut white, 2)
        .expect("game should finish");
    assert_eq!(outcome.board.counts(), (outcome.black, outcome.white));
    assert_eq!(outcome.board[Square(13)], Piece::Black);
}

#[test]
fn illegal_move_from_a_strategy_is_fatal_with_context() {
    let mut black = Fixed(Square(44)); // occupied centre square
    let mut white = RandomStrategy::seeded(3);
    let err = game::play(&mut black, &mut white, 2).expect_err("occupied square must be rejected");
    match err {
        GameError::IllegalMove { player, mv, board } => {
            assert_eq!(player, Player::Black);
            assert_eq!(mv, Square(44));
            assert_eq!(board, Board::initial());
        }
        other => panic!("expected IllegalMove, got {other}"),
    }
}

#[test]
fn off_board_move_from_a_strategy_is_fatal() {
    let mut black = Fixed(Square(0)); // border cell, fails the validity check
    let mut white = RandomStrategy::seeded(3);
    let err = game::play(&mut black, &mut white, 2).expect_err("border square must be rejected");
    assert!(matches!(err, GameError::IllegalMove { player: Player::Black, mv: Square(0), .. }));
}

#[test]
fn random_self_play_always_finishes() {
    for seed in 0..5 {
        let mut black = RandomStrategy::seeded(seed);
        let mut white = RandomStrategy::seeded(seed + 100);
        let outcome = game::play(&mut black, &mut white, 1).expect("random game should finish");
        let total = outcome.black + outcome.white;
        assert!((4..=64).contains(&total), "implausible piece total {total}");
        assert_eq!(outcome.board.counts(), (outcome.black, outcome.white));
    }
}
