//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::game::Game;
use crate::side::Side;

/// Count the number of leaf positions at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of successors for `side` (a forced pass counts as one). A full board
/// contributes nothing below depth 0.
pub fn perft(board: &Board, side: Side, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let boards = board.next_boards(side);

    if depth == 1 {
        return boards.len() as u64;
    }

    boards
        .iter()
        .map(|succ| perft(succ, !side, depth - 1))
        .sum()
}
