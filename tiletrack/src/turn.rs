use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    legal_squares, Board, IllegalPlacement, Square, TileType, CURVES, START_SQUARE, STRAIGHTS,
};

/// The coarse outcome of rolling the die, before a concrete tile is chosen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TileCategory {
    /// No tile this turn.
    Carrot,
    Curve,
    Straight,
}

/// The faces of the die.
pub static DIE_FACES: [TileCategory; 6] = [
    TileCategory::Carrot,
    TileCategory::Carrot,
    TileCategory::Carrot,
    TileCategory::Curve,
    TileCategory::Curve,
    TileCategory::Straight,
];

impl TileCategory {
    /// Rolls the die.
    pub fn roll<R: Rng>(rng: &mut R) -> Self {
        DIE_FACES[rng.gen_range(0..DIE_FACES.len())]
    }

    /// Picks a concrete tile of this category uniformly at random.
    ///
    /// Returns `None` for [`TileCategory::Carrot`] without touching the RNG.
    pub fn resolve<R: Rng>(self, rng: &mut R) -> Option<TileType> {
        match self {
            TileCategory::Carrot => None,
            TileCategory::Curve => CURVES.choose(rng).copied(),
            TileCategory::Straight => STRAIGHTS.choose(rng).copied(),
        }
    }
}

/// Summarizes the outcome of playing a turn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnOutcome {
    /// The die showed a carrot, nothing was drawn.
    Skipped,
    /// A tile was drawn but there was no free square to attach it to.
    Blocked { tile: TileType },
    /// The tile was placed, and its square is the new anchor.
    Placed { tile: TileType, square: Square },
}

/// The state of a running game: the board plus the square of the most
/// recently placed tile.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    anchor: Square,
}

impl Game {
    /// Starts a game on the starting board, anchored at [`START_SQUARE`].
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            anchor: START_SQUARE,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square of the most recently placed tile.
    pub fn anchor(&self) -> Square {
        self.anchor
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Plays one turn: rolls the die, draws a tile and tries to place it.
    ///
    /// Returns an error only if the board's bookkeeping is broken.
    pub fn play_turn<R: Rng>(&mut self, rng: &mut R) -> Result<TurnOutcome, IllegalPlacement> {
        let category = TileCategory::roll(rng);
        trace!(?category, anchor = %self.anchor, "Rolled");
        match category.resolve(rng) {
            Some(tile) => self.place_tile(tile),
            None => Ok(TurnOutcome::Skipped),
        }
    }

    /// Attaches `tile` to the anchor at the first legal square that is free,
    /// and makes that square the new anchor.
    ///
    /// If there is no such square, nothing changes.
    pub fn place_tile(&mut self, tile: TileType) -> Result<TurnOutcome, IllegalPlacement> {
        let moves = legal_squares(&self.board, self.anchor, tile);
        let Some(&square) = moves.iter().find(|&&sq| !self.board.is_occupied(sq)) else {
            trace!(?tile, anchor = %self.anchor, "No free square");
            return Ok(TurnOutcome::Blocked { tile });
        };
        self.board.place(tile, square)?;
        debug!(?tile, %square, "Placed tile");
        self.anchor = square;
        Ok(TurnOutcome::Placed { tile, square })
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::square;

    fn play(seed: u64, turns: usize) -> (Game, Vec<TurnOutcome>) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut game = Game::new();
        let outcomes = (0..turns)
            .map(|_| game.play_turn(&mut rng).unwrap())
            .collect();
        (game, outcomes)
    }

    quickcheck! {
        fn same_seed_same_board(seed: u64) -> bool {
            let (game_1, outcomes_1) = play(seed, 200);
            let (game_2, outcomes_2) = play(seed, 200);
            game_1.board() == game_2.board()
                && game_1.anchor() == game_2.anchor()
                && outcomes_1 == outcomes_2
        }

        fn occupancy_only_grows(seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::new();
            for _ in 0..300 {
                let before = game.board().occupancy();
                let anchor_before = game.anchor();
                let outcome = game.play_turn(&mut rng).unwrap();
                let after = game.board().occupancy();
                if (before & after) != before || !game.board().is_consistent() {
                    return false;
                }
                let grew_by_one = match outcome {
                    TurnOutcome::Placed { tile, square } => {
                        after == before.insert(square)
                            && game.anchor() == square
                            && game.board().type_at(square) == Some(tile)
                    }
                    TurnOutcome::Blocked { .. } | TurnOutcome::Skipped => {
                        after == before && game.anchor() == anchor_before
                    }
                };
                if !grew_by_one {
                    return false;
                }
            }
            true
        }
    }

    #[test]
    fn die_weights() {
        let count = |c: TileCategory| DIE_FACES.iter().filter(|&&f| f == c).count();
        assert_eq!(count(TileCategory::Carrot), 3);
        assert_eq!(count(TileCategory::Curve), 2);
        assert_eq!(count(TileCategory::Straight), 1);
    }

    #[test]
    fn resolve_stays_in_category() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert_eq!(TileCategory::Carrot.resolve(&mut rng), None);
            assert!(TileCategory::Curve.resolve(&mut rng).unwrap().is_curve());
            assert!(TileCategory::Straight.resolve(&mut rng).unwrap().is_straight());
        }
    }

    #[test]
    fn every_category_is_rolled() {
        let mut rng = StdRng::seed_from_u64(1);
        let rolls: Vec<TileCategory> = (0..600).map(|_| TileCategory::roll(&mut rng)).collect();
        for face in DIE_FACES {
            assert!(rolls.contains(&face));
        }
    }

    #[test]
    fn first_placement_from_start() {
        let mut game = Game::new();
        let outcome = game.place_tile(TileType::CurveNE).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Placed {
                tile: TileType::CurveNE,
                square: square!("a2")
            }
        );
        assert_eq!(game.anchor(), square!("a2"));
        assert_eq!(game.board().type_at(square!("a2")), Some(TileType::CurveNE));
        assert_eq!(game.board().type_at(START_SQUARE), Some(TileType::AnchorStart));
        assert_eq!(game.board().len(), 2);
    }

    #[test]
    fn blocked_turn_keeps_anchor() {
        let mut game = Game::new();
        // The anchor only leads upwards
        let outcome = game.place_tile(TileType::StraightHorizontal).unwrap();
        assert_eq!(
            outcome,
            TurnOutcome::Blocked {
                tile: TileType::StraightHorizontal
            }
        );
        assert_eq!(game.anchor(), START_SQUARE);
        assert_eq!(game.board().len(), 1);
    }

    #[test]
    fn occupied_candidates_keep_anchor() {
        let mut game = Game::new();
        game.board.place(TileType::CurveSW, square!("a2")).unwrap();
        let before = game.board().clone();
        for tile in CURVES.iter().chain(STRAIGHTS.iter()) {
            let outcome = game.place_tile(*tile).unwrap();
            assert_eq!(outcome, TurnOutcome::Blocked { tile: *tile });
            assert_eq!(game.anchor(), START_SQUARE);
        }
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn chain_of_tiles() {
        let mut game = Game::new();
        // a1 -> a2 (curve ┌ leads right), then a horizontal straight to b2
        for (tile, expected) in [
            (TileType::CurveNE, square!("a2")),
            (TileType::StraightHorizontal, square!("b2")),
            (TileType::StraightHorizontal, square!("c2")),
            (TileType::CurveES, square!("d2")),
        ] {
            assert_eq!(
                game.place_tile(tile).unwrap(),
                TurnOutcome::Placed {
                    tile,
                    square: expected
                }
            );
        }
        assert_eq!(game.anchor(), square!("d2"));
    }

    #[test]
    fn long_run_terminates() {
        let mut rng = StdRng::seed_from_u64(0xC0FFEE);
        let mut game = Game::new();
        for _ in 0..10_001 {
            game.play_turn(&mut rng).unwrap();
        }
        assert!(game.board().is_consistent());
        assert!(game.board().len() >= 1 && game.board().len() <= 81);
        assert!(game.board().is_occupied(game.anchor()));
    }
}
