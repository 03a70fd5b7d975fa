//! Entry point wiring a problem to an engine.

use crate::search::{
    search_engines::{SearchEngineName, SearchResult, SearchStatistics, TerminationCondition},
    EngineError, HeuristicName, Problem,
};
use tracing::info;

/// Runs a search engine against a problem.
///
/// Configuration is checked up front: the informed engines need a
/// heuristic. Instances a parity argument proves unreachable are reported
/// as [`SearchResult::NoSolutionFound`] without running the engine at all,
/// which protects the iterative engines from deepening forever on grids
/// too large to exhaust.
pub fn solve(
    problem: &Problem,
    engine_name: SearchEngineName,
    heuristic_name: Option<HeuristicName>,
    mut termination: TerminationCondition,
) -> Result<(SearchResult, SearchStatistics), EngineError> {
    let mut engine = engine_name.create(heuristic_name, problem)?;

    if !problem.is_solvable() {
        info!("the goal is unreachable by the parity argument, skipping the search");
        return Ok((SearchResult::NoSolutionFound, SearchStatistics::new()));
    }

    let (result, mut statistics) = engine.search(problem, &mut termination);
    statistics.finalise_search();
    termination.finalise();
    Ok((result, statistics))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::{validate, ConfigError};
    use crate::test_utils::*;

    /// Engine and heuristic pairings exercised by the cross-strategy tests.
    const STRATEGIES: [(SearchEngineName, Option<HeuristicName>); 6] = [
        (SearchEngineName::BFS, None),
        (SearchEngineName::IDS, None),
        (SearchEngineName::AStar, Some(HeuristicName::MisplacedTiles)),
        (SearchEngineName::AStar, Some(HeuristicName::ManhattanDistance)),
        (SearchEngineName::IDAStar, Some(HeuristicName::MisplacedTiles)),
        (
            SearchEngineName::IDAStar,
            Some(HeuristicName::ManhattanDistance),
        ),
    ];

    fn run(
        problem: &Problem,
        engine_name: SearchEngineName,
        heuristic_name: Option<HeuristicName>,
    ) -> (SearchResult, SearchStatistics) {
        solve(
            problem,
            engine_name,
            heuristic_name,
            TerminationCondition::default(),
        )
        .unwrap()
    }

    #[test]
    fn every_strategy_solves_the_reference_board_in_seven_moves() {
        let problem = reference_problem();
        for (engine_name, heuristic_name) in STRATEGIES {
            let (result, _) = run(&problem, engine_name, heuristic_name);
            match result {
                SearchResult::Success(moves) => {
                    assert_eq!(moves.len(), 7, "{engine_name:?} returned a non-optimal plan");
                    assert!(validate(&moves, &problem).is_ok());
                }
                other => panic!("{engine_name:?} failed: {other:?}"),
            }
        }
    }

    #[test]
    fn every_strategy_matches_brute_force_on_small_instances() {
        for (tiles, expected) in [(EIGHT_PUZZLE_FOUR, 4), (EIGHT_PUZZLE_FIVE, 5)] {
            let problem = standard_problem(3, 3, &tiles);
            assert_eq!(shortest_by_enumeration(&problem, 6), Some(expected));
            for (engine_name, heuristic_name) in STRATEGIES {
                let (result, _) = run(&problem, engine_name, heuristic_name);
                match result {
                    SearchResult::Success(moves) => {
                        assert_eq!(moves.len(), expected);
                        assert!(validate(&moves, &problem).is_ok());
                    }
                    other => panic!("{engine_name:?} failed: {other:?}"),
                }
            }
        }
    }

    #[test]
    fn a_solved_board_is_returned_without_expansions() {
        let goal = crate::search::Board::standard_goal(dims(4, 4));
        let problem = Problem::new(dims(4, 4), goal.clone(), goal).unwrap();
        for (engine_name, heuristic_name) in STRATEGIES {
            let (result, statistics) = run(&problem, engine_name, heuristic_name);
            match result {
                SearchResult::Success(moves) => assert!(moves.is_empty()),
                other => panic!("{engine_name:?} failed: {other:?}"),
            }
            assert_eq!(statistics.expanded_nodes(), 0);
        }
    }

    #[test]
    fn provably_unreachable_goals_skip_the_search() {
        let problem = standard_problem(
            4,
            4,
            &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 15, 14, 0],
        );
        for (engine_name, heuristic_name) in STRATEGIES {
            let (result, statistics) = run(&problem, engine_name, heuristic_name);
            assert_eq!(result, SearchResult::NoSolutionFound);
            assert_eq!(statistics.expanded_nodes(), 0);
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let problem = reference_problem();
        let (first, first_stats) = run(
            &problem,
            SearchEngineName::AStar,
            Some(HeuristicName::ManhattanDistance),
        );
        let (second, second_stats) = run(
            &problem,
            SearchEngineName::AStar,
            Some(HeuristicName::ManhattanDistance),
        );
        assert_eq!(first, second);
        assert_eq!(first_stats.expanded_nodes(), second_stats.expanded_nodes());
    }

    #[test]
    fn generation_counters_follow_the_engine_family() {
        let problem = standard_problem(3, 3, &EIGHT_PUZZLE_FIVE);
        for (engine_name, heuristic_name) in STRATEGIES {
            let (_, statistics) = run(&problem, engine_name, heuristic_name);
            assert!(statistics.generated_moves() > 0);
            if engine_name.deduplicates() {
                assert!(statistics.generated_nodes() > 0);
            } else {
                // the iterative engines hold only the active path and have
                // no way to tell a new board from a revisited one
                assert_eq!(statistics.generated_nodes(), 0);
            }
        }
    }

    #[test]
    fn informed_engines_require_a_heuristic() {
        let problem = reference_problem();
        for engine_name in [SearchEngineName::AStar, SearchEngineName::IDAStar] {
            let result = solve(
                &problem,
                engine_name,
                None,
                TerminationCondition::default(),
            );
            assert_eq!(
                result.unwrap_err(),
                EngineError::InvalidConfiguration(ConfigError::MissingHeuristic(engine_name))
            );
        }
    }

    #[test]
    fn uninformed_engines_ignore_a_heuristic() {
        let problem = standard_problem(3, 3, &EIGHT_PUZZLE_FOUR);
        let (result, _) = run(
            &problem,
            SearchEngineName::BFS,
            Some(HeuristicName::ManhattanDistance),
        );
        match result {
            SearchResult::Success(moves) => assert_eq!(moves.len(), 4),
            other => panic!("expected a solution, got {other:?}"),
        }
    }

    #[test]
    fn the_ceiling_is_reported_over_the_result() {
        let problem = reference_problem();
        let (result, _) = solve(
            &problem,
            SearchEngineName::BFS,
            None,
            TerminationCondition::new(Some(1), None, None),
        )
        .unwrap();
        assert_eq!(result, SearchResult::ExpansionLimitExceeded);
    }
}
