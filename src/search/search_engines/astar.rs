//! A* search
//!
//! The frontier orders nodes by f-value with ties broken towards the
//! earliest generated node, so runs are fully deterministic. With an
//! admissible heuristic the first goal taken off the frontier ends a
//! shortest solution.

use crate::search::{
    search_engines::{
        NodeId, SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    Cost, Heuristic, MoveSequence, PackedBoard, Problem,
};
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

#[derive(Debug)]
pub struct AStar {
    heuristic: Box<dyn Heuristic>,
}

impl AStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let dims = problem.dims();
        let initial_key = PackedBoard::pack(problem.initial());
        let goal_key = PackedBoard::pack(problem.goal());

        let mut frontier: PriorityQueue<NodeId, Reverse<(Cost, NodeId)>> = PriorityQueue::new();
        let mut search_space = SearchSpace::new(initial_key);

        let root_h = self.heuristic.evaluate(problem.initial());
        statistics.increment_evaluated_nodes();
        let root_node = search_space.get_root_node_mut();
        root_node.open(0, root_h);
        let root_id = root_node.get_node_id();
        frontier.push(root_id, Reverse((root_node.get_f(), root_id)));

        if initial_key == goal_key {
            return (SearchResult::Success(MoveSequence::empty()), statistics);
        }

        while let Some((node_id, _)) = frontier.pop() {
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            if search_space.get_board(node_id) == goal_key {
                // We get the node again so that the borrow checker knows it
                // is immutable
                let goal_node = search_space.get_node(node_id);
                return (
                    SearchResult::Success(search_space.extract_moves(goal_node)),
                    statistics,
                );
            }

            let board = search_space.get_board(node_id).unpack(dims);
            let children = board.neighbors(dims);
            statistics.increment_generated_moves(children.len());
            for (child_board, mv) in children {
                let child_key = PackedBoard::pack(&child_board);
                let child_node = search_space.insert_or_get_node(child_key, mv, node_id);
                match child_node.get_status() {
                    SearchNodeStatus::New => {
                        let h_value = self.heuristic.evaluate(&child_board);
                        statistics.increment_evaluated_nodes();
                        child_node.open(g_value + 1, h_value);
                        statistics.increment_generated_nodes();
                        let child_id = child_node.get_node_id();
                        frontier.push(child_id, Reverse((child_node.get_f(), child_id)));
                    }
                    _ => {
                        // A shorter route to a known board; relink it and
                        // requeue it with the improved f-value
                        if g_value + 1 < child_node.get_g() {
                            child_node.reopen(g_value + 1, node_id, mv);
                            statistics.increment_reopened_nodes();
                            let child_id = child_node.get_node_id();
                            frontier.push(child_id, Reverse((child_node.get_f(), child_id)));
                        }
                    }
                }
            }
        }

        (SearchResult::NoSolutionFound, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::{validate, HeuristicName};
    use crate::test_utils::*;

    fn solve_with(problem: &Problem, heuristic: Box<dyn Heuristic>) -> SearchResult {
        let mut engine = AStar::new(heuristic);
        let (result, _) = engine.search(problem, &mut TerminationCondition::default());
        result
    }

    #[test]
    fn finds_a_shortest_solution_on_the_reference_board() {
        let problem = reference_problem();
        let heuristic = HeuristicName::ManhattanDistance.create(&problem);
        match solve_with(&problem, heuristic) {
            SearchResult::Success(moves) => {
                assert_eq!(moves.len(), 7);
                assert!(validate(&moves, &problem).is_ok());
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn both_heuristics_agree_on_length() {
        let problem = standard_problem(3, 3, &EIGHT_PUZZLE_FIVE);
        for name in [
            HeuristicName::MisplacedTiles,
            HeuristicName::ManhattanDistance,
        ] {
            match solve_with(&problem, name.create(&problem)) {
                SearchResult::Success(moves) => assert_eq!(moves.len(), 5),
                other => panic!("expected a solution, got {other:?}"),
            }
        }
    }

    #[test]
    fn degrades_to_uniform_cost_without_guidance() {
        let problem = standard_problem(3, 3, &EIGHT_PUZZLE_FOUR);
        match solve_with(&problem, Box::new(ZeroHeuristic::new())) {
            SearchResult::Success(moves) => {
                assert_eq!(moves.len(), 4);
                assert!(validate(&moves, &problem).is_ok());
            }
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn exhausts_an_unsolvable_component() {
        let problem = standard_problem(2, 2, &[2, 1, 3, 0]);
        let heuristic = HeuristicName::ManhattanDistance.create(&problem);
        assert_eq!(solve_with(&problem, heuristic), SearchResult::NoSolutionFound);
    }
}
