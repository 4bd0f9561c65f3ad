use quickcheck::{Arbitrary, Gen};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::{Board, Game, Square, TileType, ALL_TILE_TYPES, NUM_SQUARES};

/// A board produced by actually playing a game, plus a square to use as
/// the anchor for the next tile.
#[derive(Clone, Debug)]
pub struct ReachableBoard {
    pub board: Board,
    /// Usually the game's anchor, sometimes another square (possibly empty).
    pub anchor: Square,
}

impl Arbitrary for ReachableBoard {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut rng = StdRng::seed_from_u64(u64::arbitrary(g));
        let turns = u16::arbitrary(g) % 1000;
        let mut game = Game::new();
        for _ in 0..turns {
            game.play_turn(&mut rng).unwrap();
        }
        let anchor = match u8::arbitrary(g) % 4 {
            0 => Square::arbitrary(g),
            1 => *g
                .choose(&Vec::from_iter(game.board().occupancy()))
                .unwrap(),
            _ => game.anchor(),
        };
        ReachableBoard {
            board: game.into_board(),
            anchor,
        }
    }
}

impl Arbitrary for Square {
    fn arbitrary(g: &mut Gen) -> Self {
        Square::new(i16::from(u8::arbitrary(g) % NUM_SQUARES)).unwrap()
    }
}

impl Arbitrary for TileType {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&ALL_TILE_TYPES).unwrap()
    }
}
