mod board;
mod dims;
mod error;
pub mod heuristics;
mod moves;
mod packed_board;
mod problem;
pub mod search_engines;
mod solve;
mod validate;
mod verbosity;

pub use board::{Board, Tiles};
pub use dims::Dims;
pub use error::{BoardError, ConfigError, EngineError};
pub use heuristics::{Cost, Heuristic, HeuristicName};
pub use moves::{Move, MoveSequence, ParseMoveError};
pub use packed_board::PackedBoard;
pub use problem::Problem;
pub use solve::solve;
pub use validate::validate;
pub use verbosity::Verbosity;
