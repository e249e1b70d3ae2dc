pub mod board;
pub mod game;
pub mod perft;
pub mod rules;
pub mod search;

pub use board::{Board, Piece, Player, Square};
pub use game::{GameError, Outcome};
