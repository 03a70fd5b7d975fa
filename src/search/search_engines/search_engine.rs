use crate::search::{
    search_engines::{AStar, SearchStatistics, TerminationCondition, BFS, IDAStar, IDS},
    ConfigError, EngineError, HeuristicName, MoveSequence, Problem,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchResult {
    /// The search reached the goal; applying the moves in order transforms
    /// the initial board into the goal board.
    Success(MoveSequence),
    /// The goal is unreachable, either refuted outright or by exhausting
    /// every reachable board.
    NoSolutionFound,
    /// The expansion ceiling was hit before the search concluded.
    ExpansionLimitExceeded,
    /// The wall-clock ceiling was hit before the search concluded.
    TimeLimitExceeded,
    /// The memory ceiling was hit before the search concluded.
    MemoryLimitExceeded,
    /// An internal guard tripped before the search concluded.
    ResourceExhausted,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &Problem,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(help = "Breadth first search, shortest solutions, no heuristic")]
    BFS,
    #[clap(help = "Iterative deepening depth-first search, shortest solutions in bounded memory")]
    IDS,
    #[clap(help = "A* search, shortest solutions guided by an admissible heuristic")]
    AStar,
    #[clap(help = "Iterative deepening A*, heuristic guidance in bounded memory")]
    IDAStar,
}

impl SearchEngineName {
    /// Builds the engine. The informed engines refuse to start without a
    /// heuristic; the uninformed ones ignore a heuristic they are given.
    pub fn create(
        &self,
        heuristic_name: Option<HeuristicName>,
        problem: &Problem,
    ) -> Result<Box<dyn SearchEngine>, EngineError> {
        match self {
            SearchEngineName::BFS => Ok(Box::new(BFS::new())),
            SearchEngineName::IDS => Ok(Box::new(IDS::new())),
            SearchEngineName::AStar => {
                let heuristic_name = heuristic_name.ok_or(ConfigError::MissingHeuristic(*self))?;
                Ok(Box::new(AStar::new(heuristic_name.create(problem))))
            }
            SearchEngineName::IDAStar => {
                let heuristic_name = heuristic_name.ok_or(ConfigError::MissingHeuristic(*self))?;
                Ok(Box::new(IDAStar::new(heuristic_name.create(problem))))
            }
        }
    }

    /// Whether the engine registers every board it has seen. The iterative
    /// engines keep only the active path and never track unique generations.
    pub fn deduplicates(&self) -> bool {
        matches!(self, SearchEngineName::BFS | SearchEngineName::AStar)
    }
}
