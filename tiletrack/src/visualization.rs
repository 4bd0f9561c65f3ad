use crate::{Board, Square, SquareSet, TileType, ALL_TILE_TYPES, BOARD_SIZE};

/// Placeholder drawn for an empty square.
pub const EMPTY_SQUARE_CHAR: char = '.';

/// Draws the board as a 9x9 grid, rank 9 at the top.
///
/// Every square is drawn as a space followed by the tile's symbol, or
/// [`EMPTY_SQUARE_CHAR`] if there is no tile.
pub fn visualize_board(board: &Board) -> String {
    let mut result = String::new();
    for square in Square::all() {
        result.push(' ');
        result.push(board.type_at(square).map_or(EMPTY_SQUARE_CHAR, TileType::symbol));
        if square.file() == BOARD_SIZE - 1 {
            result.push('\n');
        }
    }
    result
}

/// Draws every tile type's squares as a 0/1 grid, with a heading each.
pub fn visualize_layers(board: &Board) -> String {
    let mut result = String::new();
    for tile in ALL_TILE_TYPES {
        result += &format!("{:?} ({}):\n", tile, tile.symbol());
        result += &visualize_square_set(board.layer(tile));
    }
    result
}

/// Draws a set of squares as a 9x9 grid of `1`s and `0`s.
pub fn visualize_square_set(set: SquareSet) -> String {
    format!("{:?}", set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{square, Game};

    #[test]
    fn starting_board() {
        let drawing = visualize_board(&Board::new());
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines.len(), 9);
        for line in &lines[..8] {
            assert_eq!(*line, " . . . . . . . . .");
        }
        assert_eq!(lines[8], " S . . . . . . . .");
    }

    #[test]
    fn placed_tiles() {
        let mut game = Game::new();
        game.place_tile(TileType::CurveNE).unwrap();
        game.place_tile(TileType::StraightHorizontal).unwrap();
        let drawing = visualize_board(game.board());
        let lines: Vec<&str> = drawing.lines().collect();
        assert_eq!(lines[7], " ┌ ─ . . . . . . .");
        assert_eq!(lines[8], " S . . . . . . . .");
        assert_eq!(game.anchor(), square!("b2"));
    }

    #[test]
    fn layers() {
        let drawing = visualize_layers(&Board::new());
        assert!(drawing.starts_with("AnchorStart (S):\n"));
        // One heading and nine rows per tile type
        assert_eq!(drawing.lines().count(), 7 * 10);
        assert_eq!(drawing.matches('1').count(), 1);
    }
}
