//! Provides parsers for board files.

use crate::parsers::{space_separated_list1, ParseResult, Parser, Span};
use nom::combinator::map;
use std::path::PathBuf;

/// Parses a single tile value.
pub fn parse_tile<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, u8> {
    nom::character::complete::u8(input.into())
}

/// Parses a board file: whitespace separated tile values in row-major
/// order, with `#` starting a comment that runs to the end of the line.
///
/// ## Example
/// ```
/// # use tilesearch::parsers::{parse_raw_board, preamble::*};
/// let input = r#"1 2 3
/// 4 5 0 # bottom row
/// "#;
/// let (_, board) = parse_raw_board(Span::new(input)).unwrap();
/// assert_eq!(board.values(), &[1, 2, 3, 4, 5, 0]);
/// ```
pub fn parse_raw_board<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, RawBoard> {
    map(space_separated_list1(parse_tile), RawBoard::new)(input.into())
}

/// A row-major tile listing as read from a board file, before any dimension
/// or permutation checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBoard {
    values: Vec<u8>,
}

impl RawBoard {
    pub fn new(values: Vec<u8>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[u8] {
        &self.values
    }

    pub fn into_values(self) -> Vec<u8> {
        self.values
    }

    pub fn from_path(path: &PathBuf) -> RawBoard {
        let text =
            std::fs::read_to_string(path).expect("Failed to read board file, does it exist?");
        Self::from_str(&text).expect("Failed to parse board file")
    }
}

impl Parser for RawBoard {
    type Item = RawBoard;

    /// Parses a board file.
    ///
    /// ## See also
    /// See [`parse_raw_board`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_raw_board(input)
    }
}
