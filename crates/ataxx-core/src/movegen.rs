//! Successor generation for the packed board, driven by the mask tables.

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::game::Game;
use crate::masks::{jump_mask, move_mask, subdivide_mask};
use crate::side::Side;
use crate::square::Square;

/// Reassemble a canonical board from the mover's point of view.
#[inline]
const fn assemble(side: Side, moving: Bitboard, waiting: Bitboard) -> Board {
    match side {
        Side::X => Board::new(moving, waiting),
        Side::O => Board::new(waiting, moving),
    }
}

/// Generate all successor positions for `side`.
///
/// Destinations are visited in ascending cell index. For each destination,
/// jump successors come first (sources in ascending cell index, each
/// vacating its origin), followed by at most one subdivision successor:
/// every neighbour that could clone onto the destination produces the same
/// board, so a single successor stands for all of them.
///
/// An empty result means the board is full. A side with nothing in range
/// of any empty cell is forced to pass, yielding `vec![*board]`.
pub fn successors(board: &Board, side: Side) -> Vec<Board> {
    let moving = board.side(side);
    let waiting = board.side(!side);
    let empty = board.vacant();

    if empty.is_empty() {
        return Vec::new();
    }

    let mut boards = Vec::new();

    for dest in empty {
        if (moving & move_mask(dest)).is_empty() {
            continue;
        }

        // Template common to every move landing on `dest`: the destination
        // joins the mover and adjacent enemy pieces are infected.
        let infected = waiting & subdivide_mask(dest);
        let landed = moving.with(dest) | infected;
        let remaining = waiting & !infected;

        for source in moving & jump_mask(dest) {
            boards.push(assemble(side, landed.without(source), remaining));
        }

        if (moving & subdivide_mask(dest)).is_nonempty() {
            boards.push(assemble(side, landed, remaining));
        }
    }

    if boards.is_empty() {
        // Forced pass: empty cells remain but none is reachable.
        boards.push(*board);
    }

    boards
}

/// Validate and apply a single explicit move for `side`.
///
/// `from` must hold one of `side`'s pieces and `to` must be empty. A move
/// to Chebyshev distance 1 clones, distance 2 jumps (vacating `from`);
/// anything else is rejected. Returns the resulting position with
/// infection applied, or `None` if the move is illegal.
pub fn apply_move(board: &Board, side: Side, from: Square, to: Square) -> Option<Board> {
    let moving = board.side(side);
    let waiting = board.side(!side);

    if !moving.contains(from) || board.occupied().contains(to) {
        return None;
    }

    let landed = match from.distance(to) {
        1 => moving.with(to),
        2 => moving.without(from).with(to),
        _ => return None,
    };

    let infected = waiting & subdivide_mask(to);
    Some(assemble(side, landed | infected, waiting & !infected))
}

impl Game for Board {
    #[inline]
    fn score(&self) -> i32 {
        Board::score(self)
    }

    fn next_boards(&self, side: Side) -> Vec<Board> {
        successors(self, side)
    }

    #[inline]
    fn finished(&self) -> bool {
        Board::finished(self)
    }
}
