//! The packed Ataxx position: two 49-bit populations, one per side.

use std::fmt;

use crate::bitboard::Bitboard;
use crate::error::BoardError;
use crate::side::Side;
use crate::square::Square;

/// Complete Ataxx position state.
///
/// The two populations are disjoint and confined to the low 49 bits;
/// a cell is empty iff it is absent from both. The position itself is
/// turn-agnostic: whose turn it is travels separately as a [`Side`].
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Cells occupied by X (the maximizer).
    x: Bitboard,
    /// Cells occupied by O (the minimizer).
    o: Bitboard,
}

impl Board {
    /// Construct a board from the two populations.
    ///
    /// Debug-asserts the disjointness and 49-bit invariants; use
    /// [`validate`](Board::validate) for untrusted input.
    #[inline]
    pub const fn new(x: Bitboard, o: Bitboard) -> Board {
        debug_assert!(x.inner() & o.inner() == 0);
        debug_assert!((x.inner() | o.inner()) >> 49 == 0);
        Board { x, o }
    }

    /// Return the starting position: X in the a1 and g7 corners,
    /// O in the a7 and g1 corners.
    pub const fn starting_position() -> Board {
        let x = Square::A1.bitboard().inner() | Square::G7.bitboard().inner();
        let o = Square::A7.bitboard().inner() | Square::G1.bitboard().inner();
        Board::new(Bitboard::new(x), Bitboard::new(o))
    }

    /// Return the population of the given side.
    #[inline]
    pub const fn side(&self, side: Side) -> Bitboard {
        match side {
            Side::X => self.x,
            Side::O => self.o,
        }
    }

    /// Return the X population.
    #[inline]
    pub const fn x(&self) -> Bitboard {
        self.x
    }

    /// Return the O population.
    #[inline]
    pub const fn o(&self) -> Bitboard {
        self.o
    }

    /// Return all occupied cells.
    #[inline]
    pub const fn occupied(&self) -> Bitboard {
        Bitboard::new(self.x.inner() | self.o.inner())
    }

    /// Return all empty cells.
    #[inline]
    pub fn vacant(&self) -> Bitboard {
        !self.occupied()
    }

    /// Return which side occupies the given cell, if any.
    pub fn owner_of(&self, sq: Square) -> Option<Side> {
        if self.x.contains(sq) {
            Some(Side::X)
        } else if self.o.contains(sq) {
            Some(Side::O)
        } else {
            None
        }
    }

    /// Material balance: X's piece count minus O's, in `[-49, 49]`.
    ///
    /// Positive favours the maximizer. This doubles as the exact game
    /// result on a full board and the search heuristic everywhere else.
    #[inline]
    pub const fn score(&self) -> i32 {
        self.x.count() as i32 - self.o.count() as i32
    }

    /// Return `true` iff no further play is possible (no empty cells remain).
    #[inline]
    pub fn finished(&self) -> bool {
        self.vacant().is_empty()
    }

    /// Check the structural invariants, for boards built from raw bits.
    pub fn validate(&self) -> Result<(), BoardError> {
        if (self.x & self.o).is_nonempty() {
            return Err(BoardError::OverlappingSides);
        }
        if (self.x.inner() | self.o.inner()) >> 49 != 0 {
            return Err(BoardError::StrayBits);
        }
        Ok(())
    }

    /// Return a wrapper that pretty-prints the board as a 7x7 grid.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as a 7x7 grid.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank_idx in (0u8..7).rev() {
            write!(f, "{}  ", rank_idx + 1)?;
            for file_idx in 0u8..7 {
                let sq = Square::from_index(rank_idx * 7 + file_idx).unwrap();
                let c = match board.owner_of(sq) {
                    Some(Side::X) => 'x',
                    Some(Side::O) => 'o',
                    None => '.',
                };
                if file_idx < 6 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g")
    }
}

#[cfg(test)]
mod tests {
    use super::Board;
    use crate::bitboard::Bitboard;
    use crate::error::BoardError;
    use crate::side::Side;
    use crate::square::Square;

    #[test]
    fn starting_position_validates() {
        Board::starting_position().validate().unwrap();
    }

    #[test]
    fn starting_position_corners() {
        let board = Board::starting_position();
        assert_eq!(board.owner_of(Square::A1), Some(Side::X));
        assert_eq!(board.owner_of(Square::G7), Some(Side::X));
        assert_eq!(board.owner_of(Square::A7), Some(Side::O));
        assert_eq!(board.owner_of(Square::G1), Some(Side::O));
        assert_eq!(board.owner_of(Square::D4), None);
    }

    #[test]
    fn starting_position_bits() {
        let board = Board::starting_position();
        assert_eq!(board.x().inner(), (1u64 << 48) | 1);
        assert_eq!(board.o().inner(), (1u64 << 42) | (1u64 << 6));
    }

    #[test]
    fn starting_position_score_is_zero() {
        let board = Board::starting_position();
        assert_eq!(board.score(), 0);
        assert!(!board.finished());
    }

    #[test]
    fn score_is_population_difference() {
        let x = Bitboard::EMPTY.with(Square::A1).with(Square::B1).with(Square::C1);
        let o = Bitboard::EMPTY.with(Square::G7);
        let board = Board::new(x, o);
        assert_eq!(board.score(), 2);
    }

    #[test]
    fn full_board_is_finished() {
        let board = Board::new(Bitboard::FULL, Bitboard::EMPTY);
        assert!(board.finished());
        assert_eq!(board.score(), 49);
    }

    #[test]
    fn vacant_complements_occupied() {
        let board = Board::starting_position();
        assert_eq!(board.vacant().count(), 45);
        assert!((board.vacant() & board.occupied()).is_empty());
        assert_eq!(board.vacant() | board.occupied(), Bitboard::FULL);
    }

    #[test]
    fn validate_rejects_overlap() {
        let both = Bitboard::EMPTY.with(Square::D4);
        let board = Board { x: both, o: both };
        assert_eq!(board.validate(), Err(BoardError::OverlappingSides));
    }

    #[test]
    fn validate_rejects_stray_bits() {
        let board = Board {
            x: Bitboard::new(1u64 << 49),
            o: Bitboard::EMPTY,
        };
        assert_eq!(board.validate(), Err(BoardError::StrayBits));
    }

    #[test]
    fn pretty_shows_starting_position() {
        let rendered = Board::starting_position().pretty().to_string();
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "7  o . . . . . x");
        assert!(rendered.ends_with("   a b c d e f g"));
    }
}
