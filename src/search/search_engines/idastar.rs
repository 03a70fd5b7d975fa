//! Iterative deepening A*
//!
//! Starts with the heuristic estimate of the initial board as a threshold
//! on f = g + h and retries with the smallest f-value that exceeded the
//! previous threshold. Frames hold only the active path; the one piece of
//! state kept across probes is the set of boards already counted as
//! expanded, so a board walked again under a larger threshold is counted
//! once. With an admissible heuristic the first goal found ends a shortest
//! solution.

use crate::search::{
    search_engines::{
        SearchEngine, SearchResult, SearchStatistics, TerminationCondition, MAX_ACTIVE_DEPTH,
    },
    Board, Cost, Heuristic, Move, MoveSequence, PackedBoard, Problem,
};
use smallvec::SmallVec;
use std::collections::HashSet;
use tracing::debug;

#[derive(Debug)]
pub struct IDAStar {
    heuristic: Box<dyn Heuristic>,
}

impl IDAStar {
    pub fn new(heuristic: Box<dyn Heuristic>) -> Self {
        Self { heuristic }
    }
}

/// Outcome of a single cost-limited probe.
enum ProbeOutcome {
    Found(MoveSequence),
    /// Some branch exceeded the threshold; retry with the smallest f-value
    /// that did.
    NextThreshold(Cost),
    /// No branch exceeded the threshold, so raising it cannot reach
    /// anything new.
    Exhausted,
    Stopped(SearchResult),
}

/// One entry of the active path, carrying the path length spent reaching it.
struct Frame {
    key: PackedBoard,
    mv: Option<Move>,
    g: Cost,
    children: SmallVec<[(Board, Move); 4]>,
    next_child: usize,
}

impl SearchEngine for IDAStar {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        if PackedBoard::pack(problem.initial()) == PackedBoard::pack(problem.goal()) {
            return (SearchResult::Success(MoveSequence::empty()), statistics);
        }

        let mut threshold = self.heuristic.evaluate(problem.initial());
        statistics.increment_evaluated_nodes();
        let mut counted = HashSet::new();
        loop {
            debug!(threshold = threshold, "starting cost-limited probe");
            match self.probe(problem, threshold, &mut counted, &mut statistics, termination) {
                ProbeOutcome::Found(moves) => {
                    return (SearchResult::Success(moves), statistics);
                }
                ProbeOutcome::NextThreshold(next) => {
                    debug_assert!(next > threshold);
                    threshold = next;
                    statistics.increment_bound_iterations();
                }
                ProbeOutcome::Exhausted => {
                    return (SearchResult::NoSolutionFound, statistics);
                }
                ProbeOutcome::Stopped(result) => {
                    return (result, statistics);
                }
            }
        }
    }
}

impl IDAStar {
    /// Depth-first search pruned at f-values above `threshold`, tracking the
    /// smallest f-value it pruned. A board enters `counted` at its first
    /// expansion and is never recounted, no matter how often later probes
    /// walk it again.
    fn probe(
        &self,
        problem: &Problem,
        threshold: Cost,
        counted: &mut HashSet<PackedBoard>,
        statistics: &mut SearchStatistics,
        termination: &mut TerminationCondition,
    ) -> ProbeOutcome {
        let dims = problem.dims();
        let goal_key = PackedBoard::pack(problem.goal());
        // Cost::MAX stands for "nothing exceeded the threshold yet"
        let mut next_threshold = Cost::MAX;

        let root = problem.initial();
        let root_key = PackedBoard::pack(root);
        if counted.insert(root_key) {
            statistics.increment_expanded_nodes();
        }
        let root_children = root.neighbors(dims);
        statistics.increment_generated_moves(root_children.len());
        let mut stack: Vec<Frame> = vec![Frame {
            key: root_key,
            mv: None,
            g: 0,
            children: root_children,
            next_child: 0,
        }];

        loop {
            let taken = match stack.last_mut() {
                Some(frame) if frame.next_child < frame.children.len() => {
                    let pair = frame.children[frame.next_child].clone();
                    frame.next_child += 1;
                    Some((pair, frame.g))
                }
                Some(_) => None,
                None => break,
            };
            let ((child_board, mv), parent_g) = match taken {
                Some(entry) => entry,
                None => {
                    stack.pop();
                    continue;
                }
            };

            let g = parent_g + 1;
            let h = self.heuristic.evaluate(&child_board);
            statistics.increment_evaluated_nodes();
            let f = g + h;
            if f > threshold {
                next_threshold = next_threshold.min(f);
                continue;
            }

            let child_key = PackedBoard::pack(&child_board);
            if child_key == goal_key {
                let mut moves: Vec<Move> = stack.iter().filter_map(|frame| frame.mv).collect();
                moves.push(mv);
                return ProbeOutcome::Found(MoveSequence::new(moves));
            }
            // TODO: replace the linear scan with a path-local set if grids
            // beyond 4x4 ever push active paths past a few hundred moves
            if stack.iter().any(|frame| frame.key == child_key) {
                continue;
            }
            if stack.len() >= MAX_ACTIVE_DEPTH {
                return ProbeOutcome::Stopped(SearchResult::ResourceExhausted);
            }
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return ProbeOutcome::Stopped(result);
            }

            if counted.insert(child_key) {
                statistics.increment_expanded_nodes();
            }
            let children = child_board.neighbors(dims);
            statistics.increment_generated_moves(children.len());
            stack.push(Frame {
                key: child_key,
                mv: Some(mv),
                g,
                children,
                next_child: 0,
            });
        }

        if next_threshold == Cost::MAX {
            ProbeOutcome::Exhausted
        } else {
            ProbeOutcome::NextThreshold(next_threshold)
        }
    }
}
