use crate::search::{MoveSequence, Problem};

/// Replays the moves from the initial board and checks that they are all
/// legal and end exactly at the goal board.
pub fn validate(moves: &MoveSequence, problem: &Problem) -> Result<(), String> {
    let mut board = problem.initial().clone();
    for (step, mv) in moves.iter().enumerate() {
        board = board.apply(problem.dims(), *mv).ok_or_else(|| {
            format!("move {step} ({mv}) is not applicable to the board {board}")
        })?;
    }
    if board != *problem.goal() {
        return Err(format!(
            "the moves end at {board} instead of the goal {goal}",
            goal = problem.goal()
        ));
    }
    Ok(())
}
