mod astar;
mod bfs;
mod idastar;
mod ids;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

use astar::AStar;
use bfs::BFS;
use idastar::IDAStar;
use ids::IDS;

pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;

/// Ceiling on the active path length of the depth-first engines. No
/// supported grid has shortest solutions anywhere near this, so hitting it
/// means the search is degenerate and should stop rather than overflow its
/// frame stack.
pub(crate) const MAX_ACTIVE_DEPTH: usize = 1 << 16;
