use crate::search::search_engines::SearchEngineName;
use thiserror::Error;

/// Top level error type surfaced by [`solve`](crate::search::solve) and by
/// problem construction.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("malformed board: {0}")]
    MalformedBoard(#[from] BoardError),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// A tile listing that does not describe a permutation of `0..cells` for the
/// configured grid.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("board has {actual} tiles, expected {expected}")]
    WrongLength { expected: usize, actual: usize },
    #[error("tile value {value} is out of range for a board of {cells} cells")]
    TileOutOfRange { value: u8, cells: usize },
    #[error("tile value {value} appears more than once")]
    DuplicateTile { value: u8 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("unsupported grid {rows}x{cols}, supported grids have 1 to 16 cells")]
    UnsupportedDims { rows: u8, cols: u8 },
    #[error("invalid dimension spec {input:?}, expected ROWSxCOLS")]
    InvalidDims { input: String },
    #[error("search engine {0:?} requires a heuristic")]
    MissingHeuristic(SearchEngineName),
}
