use std::collections::BTreeMap;

use serde::Serialize;
use tiletrack::{visualize_board, visualize_layers, Placement, Square, TileType, ALL_TILE_TYPES};

use crate::{Simulation, TurnStats};

/// Everything about a finished run that is worth printing.
#[derive(Serialize)]
pub struct Report {
    pub seed: u64,
    pub stats: TurnStats,
    pub anchor: Square,
    /// Number of tiles of each type on the board.
    pub tile_counts: BTreeMap<TileType, u32>,
    pub tiles: Vec<Placement>,
}

impl Report {
    pub fn new(seed: u64, simulation: &Simulation) -> Self {
        let board = simulation.game.board();
        let tile_counts = ALL_TILE_TYPES
            .iter()
            .map(|&tile| (tile, board.layer(tile).len()))
            .filter(|&(_, count)| count > 0)
            .collect();
        Self {
            seed,
            stats: simulation.stats,
            anchor: simulation.game.anchor(),
            tile_counts,
            tiles: board.placements(),
        }
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// The board as a grid, optionally followed by one grid per tile type.
pub fn render_text(simulation: &Simulation, show_layers: bool) -> String {
    let mut result = visualize_board(simulation.game.board());
    if show_layers {
        result += "\n";
        result += &visualize_layers(simulation.game.board());
    }
    result
}
