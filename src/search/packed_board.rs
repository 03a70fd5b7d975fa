use crate::search::{Board, Dims, Tiles};

/// A board packed into a single `u64`, four bits per cell in row-major
/// order. Grids are capped at 16 cells and tile values at 15, so the packing
/// is exact: two keys compare equal if and only if they encode the same
/// configuration. Duplicate detection keys on this type directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PackedBoard(u64);

impl PackedBoard {
    pub fn pack(board: &Board) -> Self {
        let mut packed = 0u64;
        for (cell, &tile) in board.tiles().iter().enumerate() {
            packed |= u64::from(tile) << (4 * cell);
        }
        Self(packed)
    }

    /// Reconstructs the board. The grid shape is not stored in the key, so
    /// the caller supplies the `Dims` the board was packed under.
    pub fn unpack(&self, dims: Dims) -> Board {
        let mut tiles = Tiles::new();
        let mut blank = 0u8;
        for cell in 0..dims.cells() {
            let tile = ((self.0 >> (4 * cell)) & 0xf) as u8;
            if tile == 0 {
                blank = cell as u8;
            }
            tiles.push(tile);
        }
        Board::from_parts(tiles, blank)
    }
}
