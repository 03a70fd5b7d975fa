use clap::Parser;
use memory_stats::memory_stats;
use std::{
    path::PathBuf,
    time::{Duration, Instant},
};
use tilesearch::parsers::RawBoard;
use tilesearch::search::{
    search_engines::{SearchEngineName, SearchResult, SearchStatistics, TerminationCondition},
    solve, validate, Board, Dims, EngineError, HeuristicName, Problem, Verbosity,
};
use tracing::info;

#[derive(Parser)]
#[command(version)]
/// Solve a sliding-tile puzzle.
struct Cli {
    #[arg(help = "The initial board file")]
    initial: PathBuf,
    #[arg(
        help = "The goal board file; when absent the standard goal with the \
        blank in the last cell is used.",
        long = "goal",
        id = "GOAL"
    )]
    goal: Option<PathBuf>,
    #[arg(
        help = "The grid dimensions as ROWSxCOLS",
        short = 'd',
        long = "dims",
        id = "DIMS",
        default_value = "4x4"
    )]
    dims: Dims,
    #[arg(
        value_enum,
        help = "The search engine to use",
        short = 'e',
        long = "engine",
        id = "ENGINE",
        default_value_t = SearchEngineName::AStar
    )]
    search_engine_name: SearchEngineName,
    #[arg(
        value_enum,
        help = "The heuristic evaluator to use, required by the informed \
        engines and ignored by the others.",
        long = "heuristic",
        id = "HEURISTIC"
    )]
    heuristic_name: Option<HeuristicName>,
    #[arg(
        help = "Stop after this many node expansions",
        long = "expansion-limit",
        id = "EXPANSIONS"
    )]
    expansion_limit: Option<u64>,
    #[arg(
        help = "Stop after this much wall-clock time, e.g. 90s or 5m",
        long = "time-limit",
        id = "TIME",
        value_parser = humantime::parse_duration
    )]
    time_limit: Option<Duration>,
    #[arg(
        help = "Stop once the process uses this much memory, in megabytes",
        long = "memory-limit-mb",
        id = "MEMORY"
    )]
    memory_limit_mb: Option<usize>,
    #[arg(
        help = "The output moves file",
        short = 'o',
        long = "output",
        id = "OUTPUT"
    )]
    moves_file: Option<PathBuf>,
    #[arg(
        value_enum,
        help = "The verbosity level",
        short = 'v',
        long = "verbosity",
        id = "VERBOSITY",
        default_value_t = Verbosity::Normal
    )]
    verbosity: Verbosity,
    #[arg(help = "Whether to use coloured output", short = 'c', long = "colour")]
    colour: bool,
}

fn main() {
    let cli = Cli::parse();

    let level: tracing::Level = cli.verbosity.into();
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(cli.colour)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let initial = RawBoard::from_path(&cli.initial);
    let goal = cli.goal.as_ref().map(RawBoard::from_path);

    let problem = match build_problem(cli.dims, initial, goal) {
        Ok(problem) => problem,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    let termination =
        TerminationCondition::new(cli.expansion_limit, cli.time_limit, cli.memory_limit_mb);
    let start_time = Instant::now();
    let outcome = solve(
        &problem,
        cli.search_engine_name,
        cli.heuristic_name,
        termination,
    );
    let (result, statistics) = match outcome {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(2);
        }
    };

    match result {
        SearchResult::Success(moves) => {
            info!("validating moves");
            match validate(&moves, &problem) {
                Ok(()) => info!("moves are valid"),
                Err(e) => {
                    info!("moves are invalid: {}", e);
                    return;
                }
            }
            info!("moves found");
            info!(moves_length = moves.len());

            println!("Moves found:");
            println!("{}", moves);
            println!("Moves length: {}", moves.len());
            print_statistics(&statistics, cli.search_engine_name, start_time);

            if let Some(path) = cli.moves_file {
                std::fs::write(path, moves.to_string()).expect("Failed to write moves file");
            }
        }
        _ => {
            info!("no moves found");
            println!("No moves found: {:?}", result);
            print_statistics(&statistics, cli.search_engine_name, start_time);
        }
    }
}

fn print_statistics(
    statistics: &SearchStatistics,
    engine_name: SearchEngineName,
    start_time: Instant,
) {
    println!("Nodes expanded: {}", statistics.expanded_nodes());
    // the iterative engines never register boards, so a unique-generation
    // count would always read zero there
    if engine_name.deduplicates() {
        println!("Nodes generated: {}", statistics.generated_nodes());
    } else {
        println!("Moves generated: {}", statistics.generated_moves());
    }
    println!("Time taken: {:.3} secs", start_time.elapsed().as_secs_f64());
    if let Some(usage) = memory_stats() {
        println!("Memory used: {} kB", usage.virtual_mem >> 10);
    }
}

fn build_problem(
    dims: Dims,
    initial: RawBoard,
    goal: Option<RawBoard>,
) -> Result<Problem, EngineError> {
    let initial = Board::new(dims, initial.into_values())?;
    let goal = match goal {
        Some(raw) => Board::new(dims, raw.into_values())?,
        None => Board::standard_goal(dims),
    };
    Problem::new(dims, initial, goal)
}
