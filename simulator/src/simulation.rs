use anyhow::Context;
use rand::Rng;
use serde::Serialize;
use tiletrack::{Game, TurnOutcome};
use tracing::{debug, info};

/// Counts of how each turn went.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct TurnStats {
    pub placed: usize,
    pub blocked: usize,
    pub skipped: usize,
}

impl TurnStats {
    pub fn record(&mut self, outcome: TurnOutcome) {
        match outcome {
            TurnOutcome::Placed { .. } => self.placed += 1,
            TurnOutcome::Blocked { .. } => self.blocked += 1,
            TurnOutcome::Skipped => self.skipped += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.placed + self.blocked + self.skipped
    }
}

/// A finished run.
pub struct Simulation {
    pub game: Game,
    pub stats: TurnStats,
}

/// Plays a priming turn followed by `turns` further turns on a fresh game.
///
/// Returns an error only if the board's bookkeeping breaks down.
pub fn run_simulation<R: Rng>(rng: &mut R, turns: usize) -> anyhow::Result<Simulation> {
    let mut game = Game::new();
    let mut stats = TurnStats::default();

    for turn_idx in 0..=turns {
        let outcome = game
            .play_turn(rng)
            .with_context(|| format!("Turn {} could not be played", turn_idx))?;
        if let TurnOutcome::Placed { tile, square } = outcome {
            debug!(turn_idx, ?tile, %square);
        }
        stats.record(outcome);
    }

    info!(
        placed = stats.placed,
        blocked = stats.blocked,
        skipped = stats.skipped,
        tiles = game.board().len(),
        anchor = %game.anchor(),
        "Simulation finished"
    );

    Ok(Simulation { game, stats })
}
