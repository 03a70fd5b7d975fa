//! Fixtures shared between tests.

use crate::search::{Board, Dims, Move, Problem};

/// 4x4 board used throughout the docs and tests; seven moves from the
/// standard goal.
pub const REFERENCE_INITIAL: [u8; 16] = [1, 0, 2, 4, 5, 7, 3, 8, 9, 6, 11, 12, 13, 10, 14, 15];

/// 3x3 board exactly four moves from the standard goal; the Manhattan
/// estimate of the initial board is also four, which pins the distance.
pub const EIGHT_PUZZLE_FOUR: [u8; 9] = [0, 1, 2, 4, 5, 3, 7, 8, 6];

/// 3x3 board exactly five moves from the standard goal, same argument.
pub const EIGHT_PUZZLE_FIVE: [u8; 9] = [4, 1, 3, 0, 2, 5, 7, 8, 6];

pub fn dims(rows: u8, cols: u8) -> Dims {
    Dims::new(rows, cols).unwrap()
}

pub fn board(dims: Dims, tiles: &[u8]) -> Board {
    Board::new(dims, tiles).unwrap()
}

pub fn standard_problem(rows: u8, cols: u8, initial: &[u8]) -> Problem {
    let dims = dims(rows, cols);
    Problem::new(dims, board(dims, initial), Board::standard_goal(dims)).unwrap()
}

pub fn reference_problem() -> Problem {
    standard_problem(4, 4, &REFERENCE_INITIAL)
}

/// Shortest solution length by enumerating every move string up to `cap`
/// moves, the slow but obviously correct way.
pub fn shortest_by_enumeration(problem: &Problem, cap: u32) -> Option<usize> {
    let moves = [Move::Left, Move::Right, Move::Up, Move::Down];
    for len in 0..=cap {
        for encoded in 0..4usize.pow(len) {
            let mut board = problem.initial().clone();
            let mut code = encoded;
            let mut legal = true;
            for _ in 0..len {
                match board.apply(problem.dims(), moves[code % 4]) {
                    Some(next) => board = next,
                    None => {
                        legal = false;
                        break;
                    }
                }
                code /= 4;
            }
            if legal && board == *problem.goal() {
                return Some(len as usize);
            }
        }
    }
    None
}
