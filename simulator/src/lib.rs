mod report;
mod simulation;
pub use report::*;
pub use simulation::*;

/// Number of turns played after the priming turn when nothing else is configured.
pub const DEFAULT_TURNS: usize = 10_000;
