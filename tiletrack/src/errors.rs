use crate::{Square, TileType};

/// The error type for [`Board::place()`](crate::Board::place).
///
/// The turn driver only ever places tiles on free squares, so seeing this
/// error means the board's bookkeeping is broken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalPlacement {
    Occupied {
        square: Square,
        tile: TileType,
        existing_tile: TileType,
    },
}

impl std::error::Error for IllegalPlacement {}

impl std::fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IllegalPlacement::Occupied {
                square,
                tile,
                existing_tile,
            } => write!(
                f,
                "Tried to place {:?} on {}, which is already occupied by {:?}",
                tile, square, existing_tile
            ),
        }
    }
}
