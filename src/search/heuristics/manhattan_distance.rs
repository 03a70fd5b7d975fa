use crate::search::{
    heuristics::{Cost, Heuristic},
    Board, Dims, Problem,
};

/// Sum over non-blank tiles of the row and column offsets between each
/// tile's current cell and its goal cell. Dominates [`MisplacedTiles`]
/// while staying admissible, as every move changes one tile's offset by
/// exactly one.
///
/// [`MisplacedTiles`]: crate::search::heuristics::MisplacedTiles
#[derive(Debug)]
pub struct ManhattanDistance {
    dims: Dims,
    /// Goal cell of each tile value, indexed by value.
    goal_cell: [u8; 16],
}

impl ManhattanDistance {
    pub fn new(problem: &Problem) -> Self {
        let mut goal_cell = [0u8; 16];
        for (cell, &tile) in problem.goal().tiles().iter().enumerate() {
            goal_cell[usize::from(tile)] = cell as u8;
        }
        Self {
            dims: problem.dims(),
            goal_cell,
        }
    }
}

impl Heuristic for ManhattanDistance {
    fn evaluate(&self, board: &Board) -> Cost {
        let mut total = 0usize;
        for (cell, &tile) in board.tiles().iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal = usize::from(self.goal_cell[usize::from(tile)]);
            total += self.dims.row_of(cell).abs_diff(self.dims.row_of(goal))
                + self.dims.col_of(cell).abs_diff(self.dims.col_of(goal));
        }
        total as Cost
    }
}
