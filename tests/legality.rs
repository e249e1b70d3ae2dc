use pretty_assertions::assert_eq;

use flipbot::board::{Board, Piece, Player, Square, DOWN, DOWN_LEFT, RIGHT, UP};
use flipbot::rules::{any_legal_move, find_bracket, is_legal, is_valid, legal_moves, make_move};

#[test]
fn opening_legal_moves_for_black() {
    let board = Board::initial();
    let moves = legal_moves(Player::Black, &board);
    assert_eq!(moves, vec![Square(35), Square(46), Square(53), Square(64)]);
}

#[test]
fn opening_legal_moves_for_white() {
    let board = Board::initial();
    let moves = legal_moves(Player::White, &board);
    assert_eq!(moves, vec![Square(34), Square(43), Square(56), Square(65)]);
}

#[test]
fn each_opening_move_flips_exactly_one_white_piece() {
    let board = Board::initial();
    for mv in legal_moves(Player::Black, &board) {
        let mut child = board.clone();
        make_move(mv, Player::Black, &mut child);
        assert_eq!(child.counts(), (4, 1), "move {mv} should flip one white piece");
    }
}

#[test]
fn legal_moves_agrees_with_is_legal_and_is_exhaustive() {
    // A position a few plies in, to get a less symmetric board.
    let mut board = Board::initial();
    let mut player = Player::Black;
    for _ in 0..4 {
        let moves = legal_moves(player, &board);
        make_move(moves[0], player, &mut board);
        player = player.opponent();
    }

    for player in [Player::Black, Player::White] {
        let moves = legal_moves(player, &board);
        for &mv in &moves {
            assert!(is_legal(mv, player, &board));
        }
        for sq in Square::all() {
            assert_eq!(
                moves.contains(&sq),
                is_legal(sq, player, &board),
                "enumeration and is_legal disagree on {sq} for {player}"
            );
        }
        assert_eq!(any_legal_move(player, &board), !moves.is_empty());
    }
}

#[test]
fn find_bracket_positive_case() {
    let board = Board::initial();
    // 35 -> 45 (White) -> 55 (Black): bracket endpoint is 55.
    assert_eq!(find_bracket(Square(35), Player::Black, &board, DOWN), Some(Square(55)));
}

#[test]
fn find_bracket_refuses_adjacent_empty() {
    let board = Board::initial();
    assert_eq!(find_bracket(Square(35), Player::Black, &board, UP), None);
}

#[test]
fn find_bracket_refuses_adjacent_own_piece() {
    let board = Board::initial();
    // 34 -> 44 is already Black; a zero-length run is not a bracket.
    assert_eq!(find_bracket(Square(34), Player::Black, &board, DOWN), None);
}

#[test]
fn find_bracket_refuses_adjacent_border() {
    let board = Board::initial();
    assert_eq!(find_bracket(Square(18), Player::Black, &board, RIGHT), None);
}

#[test]
fn find_bracket_refuses_run_ending_on_empty() {
    let board = Board::initial();
    // 36 -> 45 (White) -> 54 (White) -> 63 (Empty): no terminating own piece.
    assert_eq!(find_bracket(Square(36), Player::Black, &board, DOWN_LEFT), None);
}

#[test]
fn isolated_empty_square_is_illegal() {
    let board = Board::initial();
    assert!(!is_legal(Square(11), Player::Black, &board));
    assert!(!is_legal(Square(88), Player::White, &board));
}

#[test]
fn occupied_square_is_illegal() {
    let board = Board::initial();
    assert!(!is_legal(Square(44), Player::Black, &board));
    assert!(!is_legal(Square(44), Player::White, &board));
}

#[test]
fn is_valid_is_a_pure_range_check() {
    for sq in Square::all() {
        assert!(is_valid(sq));
    }
    for raw in [0u8, 9, 10, 19, 90, 99, 5, 60, 69] {
        assert!(!is_valid(Square(raw)), "square {raw} should be invalid");
    }
    // Validity ignores occupancy: the occupied centre squares are valid.
    assert!(is_valid(Square(44)));
}

#[test]
fn no_legal_move_on_a_board_without_opponent_pieces() {
    let mut board = Board::empty();
    board[Square(44)] = Piece::Black;
    assert!(!any_legal_move(Player::Black, &board));
    assert!(!any_legal_move(Player::White, &board));
    assert!(legal_moves(Player::White, &board).is_empty());
}
