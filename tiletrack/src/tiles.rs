use serde::{Deserialize, Serialize};

use crate::Direction;

/// A tile that can be placed on the board.
///
/// The four curves are rotations of a quarter-circle track piece, the two
/// straights are horizontal and vertical track pieces. `AnchorStart` only
/// ever appears once, on the starting square.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileType {
    AnchorStart,
    CurveNE,
    CurveES,
    CurveEN,
    CurveSW,
    StraightHorizontal,
    StraightVertical,
}

pub const NUM_TILE_TYPES: usize = 7;

/// All tile types, in the order that is used for scanning the board.
pub static ALL_TILE_TYPES: [TileType; NUM_TILE_TYPES] = [
    TileType::AnchorStart,
    TileType::CurveNE,
    TileType::CurveES,
    TileType::CurveEN,
    TileType::CurveSW,
    TileType::StraightHorizontal,
    TileType::StraightVertical,
];

pub static CURVES: [TileType; 4] = [
    TileType::CurveNE,
    TileType::CurveES,
    TileType::CurveEN,
    TileType::CurveSW,
];

pub static STRAIGHTS: [TileType; 2] = [TileType::StraightHorizontal, TileType::StraightVertical];

/// One of the two ways a tile can attach to the previously placed tile.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Connector {
    /// Where the new tile goes, relative to the previous tile.
    pub direction: Direction,
    /// The tile types the previous tile must have for this connector to apply.
    pub predecessors: &'static [TileType],
}

const FROM_BELOW: &[TileType] = &[
    TileType::CurveEN,
    TileType::CurveSW,
    TileType::StraightVertical,
    TileType::AnchorStart,
];
const FROM_ABOVE: &[TileType] = &[
    TileType::CurveNE,
    TileType::CurveES,
    TileType::StraightVertical,
];
const FROM_RIGHT: &[TileType] = &[
    TileType::CurveES,
    TileType::CurveEN,
    TileType::StraightHorizontal,
];
const FROM_LEFT: &[TileType] = &[
    TileType::CurveNE,
    TileType::CurveSW,
    TileType::StraightHorizontal,
];

const fn connector(direction: Direction) -> Connector {
    let predecessors = match direction {
        Direction::Up => FROM_BELOW,
        Direction::Down => FROM_ABOVE,
        Direction::Left => FROM_RIGHT,
        Direction::Right => FROM_LEFT,
    };
    Connector {
        direction,
        predecessors,
    }
}

/// Connectors of the six placeable tile types, indexed by `tile as usize - 1`.
///
/// The order within each pair is the order in which candidates are reported.
static CONNECTORS: [[Connector; 2]; 6] = [
    [connector(Direction::Up), connector(Direction::Left)],
    [connector(Direction::Right), connector(Direction::Up)],
    [connector(Direction::Right), connector(Direction::Down)],
    [connector(Direction::Left), connector(Direction::Down)],
    [connector(Direction::Right), connector(Direction::Left)],
    [connector(Direction::Up), connector(Direction::Down)],
];

impl TileType {
    /// The connectors of this tile, in evaluation order.
    ///
    /// Empty for `AnchorStart`, which is never drawn.
    pub fn connectors(self) -> &'static [Connector] {
        match self {
            TileType::AnchorStart => &[],
            _ => &CONNECTORS[self as usize - 1][..],
        }
    }

    pub fn is_curve(self) -> bool {
        CURVES.contains(&self)
    }

    pub fn is_straight(self) -> bool {
        STRAIGHTS.contains(&self)
    }

    /// The character used to draw this tile.
    pub fn symbol(self) -> char {
        match self {
            TileType::AnchorStart => 'S',
            TileType::CurveNE => '┌',
            TileType::CurveES => '┐',
            TileType::CurveEN => '┘',
            TileType::CurveSW => '└',
            TileType::StraightHorizontal => '─',
            TileType::StraightVertical => '│',
        }
    }
}

impl std::fmt::Display for TileType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
