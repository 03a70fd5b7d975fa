use crate::search::{
    heuristics::{ManhattanDistance, MisplacedTiles},
    Board, Problem,
};
use std::fmt::Debug;

/// Path lengths and heuristic estimates, measured in moves. Every move costs
/// one, so `u32` comfortably covers any board the packing supports.
pub type Cost = u32;

/// An estimator of the number of moves still needed to reach the goal.
/// Implementations must be admissible, i.e. never overestimate, for the
/// informed engines to return shortest solutions.
pub trait Heuristic: Debug {
    fn evaluate(&self, board: &Board) -> Cost;
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum HeuristicName {
    #[clap(help = "Count of non-blank tiles that are not on their goal cell")]
    MisplacedTiles,
    #[clap(help = "Sum over non-blank tiles of row and column offsets from their goal cell")]
    ManhattanDistance,
}

impl HeuristicName {
    /// Builds the heuristic for a problem. The goal layout is folded in at
    /// construction time so that evaluation only looks at the queried board.
    pub fn create(&self, problem: &Problem) -> Box<dyn Heuristic> {
        match self {
            HeuristicName::MisplacedTiles => Box::new(MisplacedTiles::new(problem)),
            HeuristicName::ManhattanDistance => Box::new(ManhattanDistance::new(problem)),
        }
    }
}
