use crate::search::{
    heuristics::{Cost, Heuristic},
    Board, Problem,
};

/// Count of non-blank tiles that are not on their goal cell. Each such tile
/// needs at least one move, so the count never overestimates.
#[derive(Debug)]
pub struct MisplacedTiles {
    goal: Board,
}

impl MisplacedTiles {
    pub fn new(problem: &Problem) -> Self {
        Self {
            goal: problem.goal().clone(),
        }
    }
}

impl Heuristic for MisplacedTiles {
    fn evaluate(&self, board: &Board) -> Cost {
        board
            .tiles()
            .iter()
            .zip(self.goal.tiles())
            .filter(|(&tile, &goal_tile)| tile != 0 && tile != goal_tile)
            .count() as Cost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ManhattanDistance;
    use crate::test_utils::*;

    #[test]
    fn zero_at_the_goal() {
        let problem = standard_problem(3, 3, &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(MisplacedTiles::new(&problem).evaluate(problem.goal()), 0);
    }

    #[test]
    fn counts_displaced_tiles_only() {
        let problem = reference_problem();
        assert_eq!(MisplacedTiles::new(&problem).evaluate(problem.initial()), 7);
    }

    #[test]
    fn the_blank_never_counts() {
        // every non-blank tile in place, blank one move away
        let problem = standard_problem(3, 3, &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(MisplacedTiles::new(&problem).evaluate(problem.initial()), 1);
    }

    #[test]
    fn never_above_manhattan_distance() {
        for tiles in [
            [3, 2, 1, 4, 5, 6, 7, 8, 0],
            [0, 1, 2, 4, 5, 3, 7, 8, 6],
            [4, 1, 3, 0, 2, 5, 7, 8, 6],
        ] {
            let problem = standard_problem(3, 3, &tiles);
            let misplaced = MisplacedTiles::new(&problem).evaluate(problem.initial());
            let manhattan = ManhattanDistance::new(&problem).evaluate(problem.initial());
            assert!(misplaced <= manhattan);
        }
    }

    #[test]
    fn never_above_the_true_distance() {
        use crate::search::PackedBoard;
        // every board of the 2x2 goal component, a twelve-board cycle
        let dims = dims(2, 2);
        let goal = Board::standard_goal(dims);
        let mut reachable = vec![goal.clone()];
        let mut seen = vec![PackedBoard::pack(&goal)];
        let mut next = 0;
        while next < reachable.len() {
            for (child, _) in reachable[next].neighbors(dims) {
                let key = PackedBoard::pack(&child);
                if !seen.contains(&key) {
                    seen.push(key);
                    reachable.push(child);
                }
            }
            next += 1;
        }
        assert_eq!(reachable.len(), 12);

        let mut problems: Vec<Problem> = reachable
            .into_iter()
            .map(|initial| Problem::new(dims, initial, goal.clone()).unwrap())
            .collect();
        problems.push(standard_problem(3, 3, &EIGHT_PUZZLE_FOUR));
        problems.push(standard_problem(3, 3, &EIGHT_PUZZLE_FIVE));
        for problem in &problems {
            let distance = shortest_by_enumeration(problem, 6).unwrap();
            let misplaced = MisplacedTiles::new(problem).evaluate(problem.initial());
            let manhattan = ManhattanDistance::new(problem).evaluate(problem.initial());
            assert!(misplaced <= manhattan, "on {:?}", problem.initial());
            assert!(manhattan as usize <= distance, "on {:?}", problem.initial());
        }
    }
}
