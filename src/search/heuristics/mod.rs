mod heuristic;
mod manhattan_distance;
mod misplaced_tiles;
#[cfg(test)]
mod zero_heuristic;

pub use heuristic::{Cost, Heuristic, HeuristicName};
pub use manhattan_distance::ManhattanDistance;
pub use misplaced_tiles::MisplacedTiles;
#[cfg(test)]
pub use zero_heuristic::ZeroHeuristic;
