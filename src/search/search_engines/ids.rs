//! Iterative deepening depth-first search
//!
//! Runs depth-limited probes with limits 0, 1, 2, ... until one finds the
//! goal or runs out of new boards to cut off. Each probe holds only the
//! active path, so memory stays proportional to the current limit no matter
//! how many boards the instance has. Boards already on the active path are
//! never re-entered, which keeps every probe finite.

use crate::search::{
    search_engines::{
        SearchEngine, SearchResult, SearchStatistics, TerminationCondition, MAX_ACTIVE_DEPTH,
    },
    Board, Move, MoveSequence, PackedBoard, Problem,
};
use smallvec::SmallVec;
use tracing::debug;

#[derive(Debug)]
pub struct IDS {}

impl IDS {
    pub fn new() -> Self {
        Self {}
    }
}

/// Outcome of a single depth-limited probe.
enum ProbeOutcome {
    Found(MoveSequence),
    /// At least one board was cut off at the limit, so a deeper probe could
    /// still find something.
    Cutoff,
    /// The probe finished without cutting anything off; deeper probes would
    /// see exactly the same boards.
    Exhausted,
    Stopped(SearchResult),
}

/// One entry of the active path. The children are generated once when the
/// frame is pushed and consumed left to right.
struct Frame {
    key: PackedBoard,
    mv: Option<Move>,
    children: SmallVec<[(Board, Move); 4]>,
    next_child: usize,
}

impl SearchEngine for IDS {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        if PackedBoard::pack(problem.initial()) == PackedBoard::pack(problem.goal()) {
            return (SearchResult::Success(MoveSequence::empty()), statistics);
        }

        let mut limit = 0u32;
        loop {
            debug!(depth_limit = limit, "starting depth-limited probe");
            match self.probe(problem, limit, &mut statistics, termination) {
                ProbeOutcome::Found(moves) => {
                    return (SearchResult::Success(moves), statistics);
                }
                ProbeOutcome::Cutoff => {
                    statistics.increment_bound_iterations();
                    limit += 1;
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

impl IDS {
    /// Depth-first search that goal-tests every generated board but only
    /// expands boards at depths up to `limit`.
    fn probe(
        &self,
        problem: &Problem,
        limit: u32,
        statistics: &mut SearchStatistics,
        termination: &mut TerminationCondition,
    ) -> ProbeOutcome {
        let dims = problem.dims();
        let goal_key = PackedBoard::pack(problem.goal());
        let mut cutoff = false;

        let root = problem.initial();
        statistics.increment_expanded_nodes();
        let root_children = root.neighbors(dims);
        statistics.increment_generated_moves(root_children.len());
        let mut stack: Vec<Frame> = vec![Frame {
            key: PackedBoard::pack(root),
            mv: None,
            children: root_children,
            next_child: 0,
        }];

        loop {
            let taken = match stack.last_mut() {
                Some(frame) if frame.next_child < frame.children.len() => {
                    let pair = frame.children[frame.next_child].clone();
                    frame.next_child += 1;
                    Some(pair)
                }
                Some(_) => None,
                None => break,
            };
            let (child_board, mv) = match taken {
                Some(pair) => pair,
                None => {
                    stack.pop();
                    continue;
                }
            };

            let child_key = PackedBoard::pack(&child_board);
            if child_key == goal_key {
                let mut moves: Vec<Move> = stack.iter().filter_map(|frame| frame.mv).collect();
                moves.push(mv);
                return ProbeOutcome::Found(MoveSequence::new(moves));
            }
            // The child sits one level below the top of the stack, so its
            // depth equals the stack length.
            if stack.len() > limit as usize {
                cutoff = true;
                continue;
            }
            if stack.iter().any(|frame| frame.key == child_key) {
                continue;
            }
            if stack.len() >= MAX_ACTIVE_DEPTH {
                return ProbeOutcome::Stopped(SearchResult::ResourceExhausted);
            }
            if let Some(result) = termination.should_terminate(statistics.expanded_nodes()) {
                return ProbeOutcome::Stopped(result);
            }

            statistics.increment_expanded_nodes();
            let children = child_board.neighbors(dims);
            statistics.increment_generated_moves(children.len());
            stack.push(Frame {
                key: child_key,
                mv: Some(mv),
                children,
                next_child: 0,
            });
        }

        if cutoff {
            ProbeOutcome::Cutoff
        } else {
            ProbeOutcome::Exhausted
        }
    }
}
