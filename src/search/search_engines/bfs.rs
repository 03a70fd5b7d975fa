//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    MoveSequence, PackedBoard, Problem,
};
use std::collections::VecDeque;

#[derive(Debug)]
pub struct BFS {}

impl BFS {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for BFS {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let dims = problem.dims();
        let initial_key = PackedBoard::pack(problem.initial());
        let goal_key = PackedBoard::pack(problem.goal());

        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(initial_key);
        let root_node = search_space.get_root_node_mut();
        root_node.open_with_f(0);
        queue.push_back(root_node.get_node_id());

        if initial_key == goal_key {
            return (SearchResult::Success(MoveSequence::empty()), statistics);
        }

        while let Some(node_id) = queue.pop_front() {
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let f_value = node.get_f();
            statistics.increment_expanded_nodes();

            let board = search_space.get_board(node_id).unpack(dims);
            let children = board.neighbors(dims);
            statistics.increment_generated_moves(children.len());
            for (child_board, mv) in children {
                let child_key = PackedBoard::pack(&child_board);
                let child_node = search_space.insert_or_get_node(child_key, mv, node_id);
                if child_node.get_status() != SearchNodeStatus::New {
                    continue;
                }
                child_node.open_with_f(f_value + 1);
                statistics.increment_generated_nodes();
                if child_key == goal_key {
                    // Annoying clone to satisfy the borrow checker
                    let goal_node = child_node.clone();
                    return (
                        SearchResult::Success(search_space.extract_moves(&goal_node)),
                        statistics,
                    );
                }
                queue.push_back(child_node.get_node_id());
            }
        }

        (SearchResult::NoSolutionFound, statistics)
    }
}
