use crate::search::{
    heuristics::{Cost, Heuristic},
    Board,
};

/// Heuristic that always evaluates to zero, for exercising the informed
/// engines without any guidance.
#[derive(Clone, Debug, Default)]
pub struct ZeroHeuristic {}

impl ZeroHeuristic {
    pub fn new() -> Self {
        ZeroHeuristic {}
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&self, _board: &Board) -> Cost {
        0
    }
}
