use arrayvec::ArrayVec;

use crate::{are_touching, file_of, rank_of, Board, Connector, Square, TileType};

/// Maximum number of candidates a [`MoveList`] can hold.
///
/// Every tile has two connectors, so at most two are ever used.
pub const MOVE_LIST_CAPACITY: usize = 16;

/// Candidate squares for the next tile, in the order they were found.
pub type MoveList = ArrayVec<Square, MOVE_LIST_CAPACITY>;

/// Computes the squares where `tile` may be attached to the tile on `anchor`.
///
/// The connectors of `tile` are tried in order, and for each one the square
/// next to `anchor` in the connector's direction is a candidate if
/// - the tile on `anchor` is one of the connector's predecessors,
/// - the square is on the board and empty, and
/// - it is exactly one rank (for vertical connectors) or one file (for
///   horizontal connectors) away from `anchor`, i.e. the step did not wrap
///   around the edge of the board.
///
/// The result is empty if `anchor` is empty or `tile` has no connectors.
/// This function never modifies the board.
pub fn legal_squares(board: &Board, anchor: Square, tile: TileType) -> MoveList {
    let mut moves = MoveList::new();

    let Some(predecessor) = board.type_at(anchor) else {
        return moves;
    };

    for connector in tile.connectors() {
        if let Some(square) = candidate(board, anchor, predecessor, connector) {
            moves.push(square);
        }
    }

    moves
}

fn candidate(
    board: &Board,
    anchor: Square,
    predecessor: TileType,
    connector: &Connector,
) -> Option<Square> {
    if !connector.predecessors.contains(&predecessor) {
        return None;
    }

    let anchor_index = i16::from(anchor.index());
    let index = anchor.step_index(connector.direction);
    if !are_touching(index, anchor_index) {
        return None;
    }
    if board.type_at_index(index).is_some() {
        return None;
    }

    let continuous = if connector.direction.is_vertical() {
        rank_of(index).map(|rank| rank.abs_diff(anchor.rank())) == Some(1)
    } else {
        file_of(index).map(|file| file.abs_diff(anchor.file())) == Some(1)
    };
    if !continuous {
        return None;
    }

    Square::new(index)
}
