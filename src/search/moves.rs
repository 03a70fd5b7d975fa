use itertools::Itertools;
use std::fmt;
use std::str::FromStr;
use strum_macros::{Display, EnumIter};
use thiserror::Error;

/// One step of a solution: the direction the blank cell slides. The tile on
/// the other side of the swap moves the opposite way, so `Left` means the
/// blank moves left and the tile to its left moves right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Move {
    #[strum(serialize = "L")]
    Left,
    #[strum(serialize = "R")]
    Right,
    #[strum(serialize = "U")]
    Up,
    #[strum(serialize = "D")]
    Down,
}

impl Move {
    /// The move that undoes this one.
    pub fn opposite(&self) -> Move {
        match self {
            Move::Left => Move::Right,
            Move::Right => Move::Left,
            Move::Up => Move::Down,
            Move::Down => Move::Up,
        }
    }
}

/// Error from parsing a move label that is not one of `L`, `R`, `U`, `D`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("unknown move label {0:?}")]
pub struct ParseMoveError(pub char);

/// An ordered list of moves transforming one board into another.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MoveSequence {
    steps: Vec<Move>,
}

impl MoveSequence {
    pub fn empty() -> Self {
        Self { steps: vec![] }
    }

    pub fn new(steps: Vec<Move>) -> Self {
        Self { steps }
    }

    pub fn steps(&self) -> &[Move] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl FromStr for MoveSequence {
    type Err = ParseMoveError;

    /// Reads a compact label string such as `RDLDDRR`. Whitespace is
    /// ignored, anything else is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut steps = vec![];
        for c in s.chars() {
            match c {
                'L' => steps.push(Move::Left),
                'R' => steps.push(Move::Right),
                'U' => steps.push(Move::Up),
                'D' => steps.push(Move::Down),
                c if c.is_ascii_whitespace() => {}
                other => return Err(ParseMoveError(other)),
            }
        }
        Ok(Self { steps })
    }
}

impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.steps.iter().join(""))
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.into_iter()
    }
}

impl std::ops::Deref for MoveSequence {
    type Target = [Move];

    fn deref(&self) -> &Self::Target {
        &self.steps
    }
}
