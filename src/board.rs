use std::fmt;
use std::ops::{Index, IndexMut};

/// The board is a flat array of 100 cells: an 8x8 playable area inside a
/// one-cell border of sentinel pieces. Square (row, col) lives at index
/// `row * 10 + col`, so moving to a neighbour is a single integer add and
/// walks off the edge land on a `Border` cell instead of out of bounds.
pub const BOARD_CELLS: usize = 100;

pub const UP: i8 = -10;
pub const DOWN: i8 = 10;
pub const LEFT: i8 = -1;
pub const RIGHT: i8 = 1;
pub const UP_RIGHT: i8 = -9;
pub const DOWN_RIGHT: i8 = 11;
pub const DOWN_LEFT: i8 = 9;
pub const UP_LEFT: i8 = -11;

pub const DIRECTIONS: [i8; 8] = [
    UP, UP_RIGHT, RIGHT, DOWN_RIGHT, DOWN, DOWN_LEFT, LEFT, UP_LEFT,
];

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Piece {
    Empty,
    Black,
    White,
    Border,
}

impl Piece {
    pub fn glyph(self) -> char {
        match self {
            Piece::Empty => '.',
            Piece::Black => '@',
            Piece::White => 'o',
            Piece::Border => '?',
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    Black,
    White,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }

    pub fn piece(self) -> Piece {
        match self {
            Player::Black => Piece::Black,
            Player::White => Piece::White,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => write!(f, "Black"),
            Player::White => write!(f, "White"),
        }
    }
}

/// A cell index into the padded grid. Playable squares have row and col
/// digits in 1..=8; everything else is border.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Square(pub u8);

impl Square {
    pub fn from_coords(row: u8, col: u8) -> Square {
        Square(row * 10 + col)
    }

    pub fn row(self) -> u8 {
        self.0 / 10
    }

    pub fn col(self) -> u8 {
        self.0 % 10
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// One step along a direction delta. Stays inside the flat array as long
    /// as the starting cell is playable or adjacent to the playable area.
    pub fn step(self, dir: i8) -> Square {
        Square((self.0 as i16 + dir as i16) as u8)
    }

    pub fn is_playable(self) -> bool {
        (1..=8).contains(&self.row()) && (1..=8).contains(&self.col())
    }

    /// All 64 playable squares in ascending index order. Deterministic and
    /// restartable; every board scan in the crate uses this order.
    pub fn all() -> impl Iterator<Item = Square> {
        (11u8..89).map(Square).filter(|sq| sq.is_playable())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Piece; BOARD_CELLS],
}

impl Board {
    /// A board with the border set and every playable square empty.
    pub fn empty() -> Board {
        let mut cells = [Piece::Border; BOARD_CELLS];
        for sq in Square::all() {
            cells[sq.index()] = Piece::Empty;
        }
        Board { cells }
    }

    /// The standard opening position: two diagonals of opposite colour in
    /// the four centre squares.
    pub fn initial() -> Board {
        let mut board = Board::empty();
        board[Square(44)] = Piece::Black;
        board[Square(55)] = Piece::Black;
        board[Square(45)] = Piece::White;
        board[Square(54)] = Piece::White;
        board
    }

    pub fn count(&self, piece: Piece) -> u32 {
        Square::all().filter(|&sq| self[sq] == piece).count() as u32
    }

    /// (black, white) piece counts.
    pub fn counts(&self) -> (u32, u32) {
        let mut black = 0;
        let mut white = 0;
        for sq in Square::all() {
            match self[sq] {
                Piece::Black => black += 1,
                Piece::White => white += 1,
                _ => {}
            }
        }
        (black, white)
    }
}

impl Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Piece {
        &self.cells[sq.index()]
    }
}

impl IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Piece {
        &mut self.cells[sq.index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  1 2 3 4 5 6 7 8")?;
        for row in 1..=8u8 {
            write!(f, "{}", row)?;
            for col in 1..=8u8 {
                write!(f, " {}", self[Square::from_coords(row, col)].glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
