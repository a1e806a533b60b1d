//! Reference 7x7 array board.
//!
//! Semantically identical to the packed [`Board`], implemented with
//! explicit cell iteration instead of mask tables. It exists as the
//! oracle the bitboard generator is cross-checked against, and its
//! successor ordering deliberately mirrors the bitboard generator's
//! (targets in ascending cell index, jumps before the single
//! subdivision) so the two outputs can be compared element-wise.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::game::Game;
use crate::side::Side;
use crate::square::Square;

/// A 7x7 grid of cells, `cells[rank][file]`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArrayBoard {
    cells: [[Option<Side>; 7]; 7],
}

impl ArrayBoard {
    /// Return the starting position.
    pub fn starting_position() -> ArrayBoard {
        ArrayBoard::from_bitboard(&Board::starting_position())
    }

    /// Convert from the packed representation.
    pub fn from_bitboard(board: &Board) -> ArrayBoard {
        let mut cells = [[None; 7]; 7];
        for sq in Square::all() {
            cells[sq.rank().index()][sq.file().index()] = board.owner_of(sq);
        }
        ArrayBoard { cells }
    }

    /// Convert to the packed representation.
    pub fn to_bitboard(&self) -> Board {
        let mut x = Bitboard::EMPTY;
        let mut o = Bitboard::EMPTY;
        for sq in Square::all() {
            match self.cells[sq.rank().index()][sq.file().index()] {
                Some(Side::X) => x = x.with(sq),
                Some(Side::O) => o = o.with(sq),
                None => {}
            }
        }
        Board::new(x, o)
    }

    /// Return which side occupies the given cell, if any.
    pub fn cell(&self, sq: Square) -> Option<Side> {
        self.cells[sq.rank().index()][sq.file().index()]
    }

    /// Material balance: X's piece count minus O's.
    pub fn score(&self) -> i32 {
        let mut total = 0;
        for row in &self.cells {
            for cell in row {
                match cell {
                    Some(Side::X) => total += 1,
                    Some(Side::O) => total -= 1,
                    None => {}
                }
            }
        }
        total
    }

    /// Return `true` iff no empty cells remain.
    pub fn finished(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|cell| cell.is_some()))
    }

    /// Apply a move for `side` landing on `(target_rank, target_file)`,
    /// vacating `vacated` for a jump, then infect the 3x3 neighbourhood.
    fn moved(
        &self,
        side: Side,
        vacated: Option<(usize, usize)>,
        target: (usize, usize),
    ) -> ArrayBoard {
        let mut next = *self;
        if let Some((rank, file)) = vacated {
            next.cells[rank][file] = None;
        }
        next.cells[target.0][target.1] = Some(side);

        for rank in target.0.saturating_sub(1)..=(target.0 + 1).min(6) {
            for file in target.1.saturating_sub(1)..=(target.1 + 1).min(6) {
                if next.cells[rank][file] == Some(!side) {
                    next.cells[rank][file] = Some(side);
                }
            }
        }
        next
    }

    /// Generate all successor positions for `side`.
    pub fn next_boards(&self, side: Side) -> Vec<ArrayBoard> {
        let mut boards = Vec::new();
        let mut any_empty = false;

        for target_rank in 0..7usize {
            for target_file in 0..7usize {
                if self.cells[target_rank][target_file].is_some() {
                    continue;
                }
                any_empty = true;

                // Jumps first: scan the 5x5 neighbourhood in cell index order
                for dr in -2i32..=2 {
                    for df in -2i32..=2 {
                        if dr.abs().max(df.abs()) != 2 {
                            continue;
                        }
                        let rank = target_rank as i32 + dr;
                        let file = target_file as i32 + df;
                        if !(0..7).contains(&rank) || !(0..7).contains(&file) {
                            continue;
                        }
                        if self.cells[rank as usize][file as usize] == Some(side) {
                            boards.push(self.moved(
                                side,
                                Some((rank as usize, file as usize)),
                                (target_rank, target_file),
                            ));
                        }
                    }
                }

                // A single subdivision stands in for every adjacent source
                let mut can_subdivide = false;
                for dr in -1i32..=1 {
                    for df in -1i32..=1 {
                        if dr == 0 && df == 0 {
                            continue;
                        }
                        let rank = target_rank as i32 + dr;
                        let file = target_file as i32 + df;
                        if (0..7).contains(&rank)
                            && (0..7).contains(&file)
                            && self.cells[rank as usize][file as usize] == Some(side)
                        {
                            can_subdivide = true;
                        }
                    }
                }
                if can_subdivide {
                    boards.push(self.moved(side, None, (target_rank, target_file)));
                }
            }
        }

        if !any_empty {
            return Vec::new();
        }
        if boards.is_empty() {
            // Forced pass
            boards.push(*self);
        }
        boards
    }
}

impl Game for ArrayBoard {
    fn score(&self) -> i32 {
        ArrayBoard::score(self)
    }

    fn next_boards(&self, side: Side) -> Vec<ArrayBoard> {
        ArrayBoard::next_boards(self, side)
    }

    fn finished(&self) -> bool {
        ArrayBoard::finished(self)
    }
}

impl fmt::Debug for ArrayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArrayBoard(\"{}\")", self.to_bitboard())
    }
}

impl fmt::Display for ArrayBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_bitboard().pretty())
    }
}

#[cfg(test)]
mod tests {
    use super::ArrayBoard;
    use crate::board::Board;
    use crate::side::Side;
    use crate::square::Square;

    fn fixture(fen: &str) -> ArrayBoard {
        ArrayBoard::from_bitboard(&fen.parse().unwrap())
    }

    #[test]
    fn starting_position_roundtrip() {
        let array = ArrayBoard::starting_position();
        assert_eq!(array.to_bitboard(), Board::starting_position());
        assert_eq!(array.cell(Square::A1), Some(Side::X));
        assert_eq!(array.cell(Square::G1), Some(Side::O));
        assert_eq!(array.cell(Square::D4), None);
    }

    #[test]
    fn conversion_roundtrip_midgame() {
        let board: Board = "x5o/7/2xo3/3xx2/2oox2/7/o5x".parse().unwrap();
        assert_eq!(ArrayBoard::from_bitboard(&board).to_bitboard(), board);
    }

    #[test]
    fn score_and_finished_match_bitboard() {
        let array = fixture("x5o/7/2xo3/3xx2/2oox2/7/o5x");
        let board = array.to_bitboard();
        assert_eq!(array.score(), board.score());
        assert_eq!(array.finished(), board.finished());
    }

    #[test]
    fn starting_position_has_16_successors() {
        let array = ArrayBoard::starting_position();
        assert_eq!(array.next_boards(Side::X).len(), 16);
        assert_eq!(array.next_boards(Side::O).len(), 16);
    }

    #[test]
    fn infection_flips_neighbours() {
        // x d4 subdividing to e4 flips the o on f4
        let array = fixture("7/7/7/3x1o1/7/7/7");
        let succs = array.next_boards(Side::X);
        let infected: Vec<_> = succs
            .iter()
            .filter(|b| b.cell(Square::E4) == Some(Side::X))
            .collect();
        assert_eq!(infected.len(), 1);
        assert_eq!(infected[0].cell(Square::F4), Some(Side::X));
        assert_eq!(infected[0].score(), 3);
    }

    #[test]
    fn forced_pass_matches_bitboard() {
        let array = fixture("ooooooo/oxxxxxo/oxxxxxo/oxx1xxo/oxxxxxo/oxxxxxo/ooooooo");
        assert_eq!(array.next_boards(Side::O), vec![array]);
        assert!(!array.finished());
    }

    #[test]
    fn full_board_yields_no_successors() {
        let array = fixture("xxxxxxx/xxxxxxx/xxxxxxx/xxxxxxx/ooooooo/ooooooo/ooooooo");
        assert!(array.next_boards(Side::X).is_empty());
        assert!(array.next_boards(Side::O).is_empty());
        assert!(array.finished());
    }

    /// Walk every position reachable within `plies`, checking that the two
    /// generators produce element-wise identical successor sequences.
    fn assert_generators_agree(board: &Board, side: Side, plies: u32) {
        use crate::game::Game;

        let array = ArrayBoard::from_bitboard(board);
        let fast = board.next_boards(side);
        let slow = array.next_boards(side);

        assert_eq!(
            fast.len(),
            slow.len(),
            "successor counts differ for {side} at {board:?}"
        );
        for (i, (f, s)) in fast.iter().zip(&slow).enumerate() {
            assert_eq!(
                *f,
                s.to_bitboard(),
                "successor {i} differs for {side} at {board:?}"
            );
        }

        if plies > 0 {
            for succ in &fast {
                assert_generators_agree(succ, !side, plies - 1);
            }
        }
    }

    #[test]
    fn generators_agree_from_start() {
        assert_generators_agree(&Board::starting_position(), Side::X, 2);
        assert_generators_agree(&Board::starting_position(), Side::O, 2);
    }

    #[test]
    fn generators_agree_from_infection_heavy_position() {
        let board: Board = "x5o/7/2xo3/3xx2/2oox2/7/o5x".parse().unwrap();
        assert_generators_agree(&board, Side::X, 1);
        assert_generators_agree(&board, Side::O, 1);
    }

    #[test]
    fn generators_agree_on_pass_and_terminal() {
        let pass: Board = "ooooooo/oxxxxxo/oxxxxxo/oxx1xxo/oxxxxxo/oxxxxxo/ooooooo"
            .parse()
            .unwrap();
        assert_generators_agree(&pass, Side::O, 0);
        assert_generators_agree(&pass, Side::X, 1);

        let full: Board = "xxxxxxx/xxxxxxx/xxxxxxx/xxxxxxx/ooooooo/ooooooo/ooooooo"
            .parse()
            .unwrap();
        assert_generators_agree(&full, Side::X, 0);
    }
}
