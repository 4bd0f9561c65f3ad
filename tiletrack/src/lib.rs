pub use board::*;
pub use errors::*;
pub use geometry::*;
pub use legality::*;
pub use tiles::*;
pub use turn::*;
pub use visualization::*;

#[cfg(test)]
mod arbitrary;
mod bitset;
mod board;
mod errors;
mod geometry;
mod legality;
mod tiles;
mod turn;
mod visualization;
