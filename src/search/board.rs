use crate::search::{BoardError, Dims, Move};
use itertools::Itertools;
use smallvec::SmallVec;
use std::fmt;
use strum::IntoEnumIterator;

/// Row-major tile values of a board. Small enough to live inline for every
/// supported grid.
pub type Tiles = SmallVec<[u8; 16]>;

/// A puzzle configuration: a permutation of `0..cells` laid out row-major,
/// with `0` standing for the blank cell. The blank's index is cached because
/// every move and the solvability check start from it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    tiles: Tiles,
    blank: u8,
}

impl Board {
    /// Builds a board from a row-major tile listing, rejecting anything that
    /// is not a permutation of `0..dims.cells()`.
    pub fn new(dims: Dims, tiles: impl Into<Tiles>) -> Result<Self, BoardError> {
        let tiles = tiles.into();
        let cells = dims.cells();
        if tiles.len() != cells {
            return Err(BoardError::WrongLength {
                expected: cells,
                actual: tiles.len(),
            });
        }
        let mut seen = [false; 16];
        for &value in &tiles {
            if usize::from(value) >= cells {
                return Err(BoardError::TileOutOfRange { value, cells });
            }
            if seen[usize::from(value)] {
                return Err(BoardError::DuplicateTile { value });
            }
            seen[usize::from(value)] = true;
        }
        let blank = tiles
            .iter()
            .position(|&value| value == 0)
            .expect("A validated permutation contains the blank");
        Ok(Self {
            tiles,
            blank: blank as u8,
        })
    }

    /// The conventional goal for a grid: tiles in increasing order with the
    /// blank in the last cell.
    pub fn standard_goal(dims: Dims) -> Board {
        let cells = dims.cells();
        let tiles: Tiles = (1..cells)
            .map(|value| value as u8)
            .chain(std::iter::once(0))
            .collect();
        Board::from_parts(tiles, (cells - 1) as u8)
    }

    /// Assembles a board whose tiles are already known to be a valid
    /// permutation with the blank at `blank`.
    pub(crate) fn from_parts(tiles: Tiles, blank: u8) -> Board {
        Board { tiles, blank }
    }

    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn blank_index(&self) -> usize {
        usize::from(self.blank)
    }

    /// Applies a single move, returning `None` when the blank sits on the
    /// edge the move points at.
    pub fn apply(&self, dims: Dims, mv: Move) -> Option<Board> {
        let blank = usize::from(self.blank);
        let cols = usize::from(dims.cols());
        let target = match mv {
            Move::Left => (blank % cols > 0).then(|| blank - 1),
            Move::Right => (blank % cols + 1 < cols).then(|| blank + 1),
            Move::Up => blank.checked_sub(cols),
            Move::Down => (blank + cols < dims.cells()).then(|| blank + cols),
        }?;
        let mut tiles = self.tiles.clone();
        tiles.swap(blank, target);
        Some(Board {
            tiles,
            blank: target as u8,
        })
    }

    /// All boards one legal move away, paired with the move that produces
    /// them, always in `L`, `R`, `U`, `D` order.
    pub fn neighbors(&self, dims: Dims) -> SmallVec<[(Board, Move); 4]> {
        Move::iter()
            .filter_map(|mv| self.apply(dims, mv).map(|board| (board, mv)))
            .collect()
    }
}

impl fmt::Display for Board {
    /// Displays the row-major tile listing, the same shape board files use.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tiles.iter().join(" "))
    }
}
