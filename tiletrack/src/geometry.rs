use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Number of ranks and files.
pub const BOARD_SIZE: u8 = 9;

/// Number of squares on the board.
pub const NUM_SQUARES: u8 = BOARD_SIZE * BOARD_SIZE;

/// The square holding the starting tile: the bottom-left corner, `a1`.
pub const START_SQUARE: Square = Square(72);

/// One of the 81 squares of the board.
///
/// Squares are numbered row-major starting at the top-left corner, so index 0
/// is `a9` and index 80 is `i1`. The rank counts rows from the bottom and the
/// file counts columns from the left, both starting at 0.
///
/// ```
/// use tiletrack::{square, Square};
/// let sq = square!("c2");
/// assert_eq!((sq.rank(), sq.file()), (1, 2));
/// assert_eq!(sq.index(), 65);
/// assert_eq!(Square::new(65), Some(sq));
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Square(u8);

impl Square {
    /// Returns `None` if the index is not on the board.
    pub fn new(index: i16) -> Option<Self> {
        if (0..i16::from(NUM_SQUARES)).contains(&index) {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    pub fn from_rank_file(rank: u8, file: u8) -> Option<Self> {
        if rank >= BOARD_SIZE || file >= BOARD_SIZE {
            return None;
        }
        Some(Self((BOARD_SIZE - 1 - rank) * BOARD_SIZE + file))
    }

    pub fn index(self) -> u8 {
        self.0
    }

    pub fn rank(self) -> u8 {
        BOARD_SIZE - 1 - self.0 / BOARD_SIZE
    }

    pub fn file(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// The raw index one step in `direction`. May be off the board, and
    /// horizontal steps may wrap into the neighboring row.
    pub fn step_index(self, direction: Direction) -> i16 {
        i16::from(self.0) + direction.delta()
    }

    /// All squares in ascending index order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..NUM_SQUARES).map(Square)
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let file_char = char::from(b'a' + self.file());
        write!(f, "{}{}", file_char, self.rank() + 1)
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareOutOfRange;

    fn try_from(index: u8) -> Result<Self, Self::Error> {
        Square::new(i16::from(index)).ok_or(SquareOutOfRange(index))
    }
}

impl From<Square> for u8 {
    fn from(square: Square) -> u8 {
        square.0
    }
}

/// The error type for converting an out-of-range index into a [`Square`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SquareOutOfRange(pub u8);

impl std::error::Error for SquareOutOfRange {}

impl std::fmt::Display for SquareOutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Square index {} is out of range (must be below {})",
            self.0, NUM_SQUARES
        )
    }
}

/// The error type for the [`FromStr`] instance of [`Square`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareFromStrErr {
    LessThanTwoChars,
    MoreThanTwoChars,
    InvalidFile,
    InvalidRank,
}

impl FromStr for Square {
    type Err = SquareFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let file_char = chars.next().ok_or(SquareFromStrErr::LessThanTwoChars)?;
        let rank_char = chars.next().ok_or(SquareFromStrErr::LessThanTwoChars)?;
        if chars.next().is_some() {
            return Err(SquareFromStrErr::MoreThanTwoChars);
        }
        let file = match file_char {
            'a'..='i' => file_char as u8 - b'a',
            _ => return Err(SquareFromStrErr::InvalidFile),
        };
        let rank = match rank_char {
            '1'..='9' => rank_char as u8 - b'1',
            _ => return Err(SquareFromStrErr::InvalidRank),
        };
        // Both are below BOARD_SIZE at this point
        Square::from_rank_file(rank, file).ok_or(SquareFromStrErr::InvalidRank)
    }
}

/// Shorthand for creating squares from their two-character name.
///
/// The first character is the file (`a` to `i`), the second the rank (`1` to `9`).
/// ```
/// # use tiletrack::{square, START_SQUARE};
/// assert_eq!(square!("a1"), START_SQUARE);
/// ```
#[macro_export]
macro_rules! square {
    ($name:literal) => {
        <$crate::Square as std::str::FromStr>::from_str($name)
            .expect("Invalid square name given to square! macro")
    };
}
#[allow(unused_imports)]
pub(crate) use square;

/// The four directions in which a tile can connect to its neighbor.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Change of the square index when stepping in this direction.
    pub fn delta(self) -> i16 {
        match self {
            Direction::Up => -i16::from(BOARD_SIZE),
            Direction::Down => i16::from(BOARD_SIZE),
            Direction::Left => -1,
            Direction::Right => 1,
        }
    }

    pub fn is_vertical(self) -> bool {
        matches!(self, Direction::Up | Direction::Down)
    }
}

/// Rank of a raw square index, or `None` if it is off the board.
pub fn rank_of(index: i16) -> Option<u8> {
    Square::new(index).map(Square::rank)
}

/// File of a raw square index, or `None` if it is off the board.
pub fn file_of(index: i16) -> Option<u8> {
    Square::new(index).map(Square::file)
}

/// Coarse adjacency test on raw indices.
///
/// True for the same square or an index difference of 1, 8, 9 or 10. This
/// does not know about row boundaries (e.g. `i3` and `a2` count as touching),
/// so it can only be used to rule squares out.
pub fn are_touching(a: i16, b: i16) -> bool {
    matches!((a - b).abs(), 0 | 1 | 8 | 9 | 10)
}
