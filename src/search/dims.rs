use crate::search::ConfigError;
use std::str::FromStr;

/// Boards with more cells than this cannot be packed into a [`PackedBoard`]
/// key, so they are rejected at configuration time.
///
/// [`PackedBoard`]: crate::search::PackedBoard
pub const MAX_CELLS: usize = 16;

/// The shape of a puzzle grid. Rows and columns are independent, so
/// rectangular boards such as 2x3 are supported alongside the classic
/// squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    rows: u8,
    cols: u8,
}

impl Dims {
    pub fn new(rows: u8, cols: u8) -> Result<Self, ConfigError> {
        let cells = usize::from(rows) * usize::from(cols);
        if cells == 0 || cells > MAX_CELLS {
            return Err(ConfigError::UnsupportedDims { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// The total number of cells, blank included.
    pub fn cells(&self) -> usize {
        usize::from(self.rows) * usize::from(self.cols)
    }

    pub fn row_of(&self, index: usize) -> usize {
        index / usize::from(self.cols)
    }

    pub fn col_of(&self, index: usize) -> usize {
        index % usize::from(self.cols)
    }
}

impl FromStr for Dims {
    type Err = ConfigError;

    /// Parses a `ROWSxCOLS` spec such as `4x4` or `2x3`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rows, cols) = s.split_once('x').ok_or_else(|| ConfigError::InvalidDims {
            input: s.to_owned(),
        })?;
        let rows = rows.trim().parse().map_err(|_| ConfigError::InvalidDims {
            input: s.to_owned(),
        })?;
        let cols = cols.trim().parse().map_err(|_| ConfigError::InvalidDims {
            input: s.to_owned(),
        })?;
        Dims::new(rows, cols)
    }
}
