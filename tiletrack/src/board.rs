mod square_set;

use serde::{Deserialize, Serialize};

pub use square_set::*;

use crate::{IllegalPlacement, Square, TileType, ALL_TILE_TYPES, NUM_TILE_TYPES, START_SQUARE};

/// The tiles on the board.
///
/// Holds one [`SquareSet`] per tile type plus their union. The per-type sets
/// are pairwise disjoint and tiles are never removed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// All the squares holding a tile of a given type, indexed by `TileType as usize`.
    layers: [SquareSet; NUM_TILE_TYPES],
    /// The union of all layers.
    occupancy: SquareSet,
}

/// A single tile on the board, including its square.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub square: Square,
    pub tile: TileType,
}

impl Board {
    /// Creates a board without any tiles.
    pub fn empty() -> Self {
        Self {
            layers: [SquareSet::new(); NUM_TILE_TYPES],
            occupancy: SquareSet::new(),
        }
    }

    /// Creates the starting board: a single `AnchorStart` tile on [`START_SQUARE`].
    pub fn new() -> Self {
        let mut board = Self::empty();
        board.layers[TileType::AnchorStart as usize] = SquareSet::new().insert(START_SQUARE);
        board.occupancy = board.occupancy.insert(START_SQUARE);
        board
    }

    /// Puts `tile` on `square`.
    ///
    /// Fails without modifying the board if the square is already occupied.
    pub fn place(&mut self, tile: TileType, square: Square) -> Result<(), IllegalPlacement> {
        if let Some(existing_tile) = self.type_at(square) {
            return Err(IllegalPlacement::Occupied {
                square,
                tile,
                existing_tile,
            });
        }
        self.layers[tile as usize] = self.layers[tile as usize].insert(square);
        self.occupancy = self.occupancy.insert(square);
        debug_assert!(self.is_consistent());
        Ok(())
    }

    /// The type of the tile on `square`, if any.
    ///
    /// Layers are checked in [`ALL_TILE_TYPES`] order and the first hit wins.
    pub fn type_at(&self, square: Square) -> Option<TileType> {
        if !self.occupancy.contains(square) {
            return None;
        }
        ALL_TILE_TYPES
            .iter()
            .copied()
            .find(|&tile| self.layers[tile as usize].contains(square))
    }

    /// Like [`Self::type_at()`], but for a raw index that may be off the board.
    pub fn type_at_index(&self, index: i16) -> Option<TileType> {
        Square::new(index).and_then(|square| self.type_at(square))
    }

    pub fn is_occupied(&self, square: Square) -> bool {
        self.occupancy.contains(square)
    }

    /// All squares holding a tile.
    pub fn occupancy(&self) -> SquareSet {
        self.occupancy
    }

    /// All squares holding a tile of type `tile`.
    pub fn layer(&self, tile: TileType) -> SquareSet {
        self.layers[tile as usize]
    }

    /// Number of tiles on the board.
    pub fn len(&self) -> u32 {
        self.occupancy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.occupancy.is_empty()
    }

    /// The tiles on the board, in ascending square order.
    pub fn placements(&self) -> Vec<Placement> {
        self.occupancy
            .into_iter()
            .filter_map(|square| self.type_at(square).map(|tile| Placement { square, tile }))
            .collect()
    }

    /// Checks that the layers are pairwise disjoint and that their union is
    /// the occupancy set.
    pub fn is_consistent(&self) -> bool {
        let mut union = SquareSet::new();
        for layer in self.layers {
            if !union.is_disjoint(layer) {
                return false;
            }
            union |= layer;
        }
        union == self.occupancy
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
