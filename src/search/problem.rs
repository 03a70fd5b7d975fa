use crate::search::{Board, BoardError, Dims, EngineError};

/// A search instance: the grid shape plus the initial and goal boards. Both
/// boards must be permutations of the same cell range, which `Board`
/// construction already guarantees per board; construction here only has to
/// rule out boards built for a different grid.
#[derive(Debug, Clone)]
pub struct Problem {
    dims: Dims,
    initial: Board,
    goal: Board,
}

impl Problem {
    pub fn new(dims: Dims, initial: Board, goal: Board) -> Result<Self, EngineError> {
        for board in [&initial, &goal] {
            if board.tiles().len() != dims.cells() {
                return Err(BoardError::WrongLength {
                    expected: dims.cells(),
                    actual: board.tiles().len(),
                }
                .into());
            }
        }
        Ok(Self {
            dims,
            initial,
            goal,
        })
    }

    pub fn dims(&self) -> Dims {
        self.dims
    }

    pub fn initial(&self) -> &Board {
        &self.initial
    }

    pub fn goal(&self) -> &Board {
        &self.goal
    }

    /// Decides reachability without searching. The goal is reachable exactly
    /// when the permutation taking the initial board to the goal board has
    /// the same parity as the Manhattan distance between the two blank
    /// positions. Grids with a single row or column carry no such parity
    /// argument, so they report `true` and leave the verdict to the search.
    pub fn is_solvable(&self) -> bool {
        if self.dims.rows() < 2 || self.dims.cols() < 2 {
            return true;
        }

        let cells = self.dims.cells();
        let mut goal_cell = [0u8; 16];
        for (cell, &tile) in self.goal.tiles().iter().enumerate() {
            goal_cell[usize::from(tile)] = cell as u8;
        }

        // Parity of the permutation sending each cell to the goal cell of
        // its tile, by cycle decomposition. A cycle of even length flips the
        // parity.
        let mut visited = [false; 16];
        let mut odd_permutation = false;
        for start in 0..cells {
            if visited[start] {
                continue;
            }
            let mut cycle_len = 0usize;
            let mut cell = start;
            while !visited[cell] {
                visited[cell] = true;
                cell = usize::from(goal_cell[usize::from(self.initial.tiles()[cell])]);
                cycle_len += 1;
            }
            if cycle_len % 2 == 0 {
                odd_permutation = !odd_permutation;
            }
        }

        let from = self.initial.blank_index();
        let to = self.goal.blank_index();
        let blank_distance = self.dims.row_of(from).abs_diff(self.dims.row_of(to))
            + self.dims.col_of(from).abs_diff(self.dims.col_of(to));

        odd_permutation == (blank_distance % 2 == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn rejects_boards_of_the_wrong_size() {
        let initial = board(dims(2, 2), &[1, 2, 3, 0]);
        let goal = board(dims(2, 2), &[1, 2, 3, 0]);
        assert!(Problem::new(dims(3, 3), initial, goal).is_err());
    }

    #[test]
    fn a_solved_instance_is_solvable() {
        let goal = Board::standard_goal(dims(4, 4));
        let problem = Problem::new(dims(4, 4), goal.clone(), goal).unwrap();
        assert!(problem.is_solvable());
    }

    #[test]
    fn the_reference_instance_is_solvable() {
        assert!(reference_problem().is_solvable());
    }

    #[test]
    fn swapping_two_tiles_flips_solvability() {
        // the classic unsolvable 15-puzzle: 14 and 15 exchanged
        let problem = standard_problem(
            4,
            4,
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0],
        );
        assert!(!problem.is_solvable());

        let problem = standard_problem(3, 3, &[1, 2, 3, 4, 5, 6, 8, 7, 0]);
        assert!(!problem.is_solvable());
    }

    #[test]
    fn parity_accounts_for_the_blank_row() {
        // moving the blank an odd distance needs an odd permutation
        let problem = standard_problem(3, 3, &[1, 2, 3, 4, 5, 0, 7, 8, 6]);
        assert!(problem.is_solvable());
    }

    #[test]
    fn two_by_two_swap_is_unsolvable() {
        let problem = standard_problem(2, 2, &[2, 1, 3, 0]);
        assert!(!problem.is_solvable());
    }

    #[test]
    fn custom_goals_are_supported() {
        // same board on both sides, nonstandard goal layout
        let layout = [4, 1, 3, 0, 2, 5, 7, 8, 6];
        let initial = board(dims(3, 3), &layout);
        let goal = board(dims(3, 3), &layout);
        let problem = Problem::new(dims(3, 3), initial, goal).unwrap();
        assert!(problem.is_solvable());
    }

    #[test]
    fn degenerate_grids_defer_to_the_search() {
        let initial = board(dims(3, 1), &[2, 1, 0]);
        let goal = board(dims(3, 1), &[1, 2, 0]);
        let problem = Problem::new(dims(3, 1), initial, goal).unwrap();
        // tile order cannot change in a single column, but the parity
        // argument does not apply, so no verdict here
        assert!(problem.is_solvable());
    }
}
