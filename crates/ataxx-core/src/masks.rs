//! Precomputed neighbourhood mask tables driving move generation.
//!
//! For each destination cell: the cells a piece could clone from
//! (Chebyshev distance 1), the cells it could jump from (distance
//! exactly 2), and their union. Computed at compile time, so every
//! lookup is a plain array read.

use crate::bitboard::Bitboard;
use crate::square::Square;

const fn compute_subdivide_masks() -> [Bitboard; 49] {
    let mut table = [Bitboard::EMPTY; 49];
    let mut sq = 0usize;
    while sq < 49 {
        let rank = (sq / 7) as i8;
        let file = (sq % 7) as i8;
        let mut bits = 0u64;
        let mut dr = -1i8;
        while dr <= 1 {
            let mut df = -1i8;
            while df <= 1 {
                if dr != 0 || df != 0 {
                    let r = rank + dr;
                    let f = file + df;
                    if r >= 0 && r < 7 && f >= 0 && f < 7 {
                        bits |= 1u64 << (r as usize * 7 + f as usize);
                    }
                }
                df += 1;
            }
            dr += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

const fn compute_jump_masks() -> [Bitboard; 49] {
    let mut table = [Bitboard::EMPTY; 49];
    let mut sq = 0usize;
    while sq < 49 {
        let rank = (sq / 7) as i8;
        let file = (sq % 7) as i8;
        let mut bits = 0u64;
        let mut dr = -2i8;
        while dr <= 2 {
            let mut df = -2i8;
            while df <= 2 {
                // The ring at Chebyshev distance exactly 2
                let dr_abs = dr.unsigned_abs();
                let df_abs = df.unsigned_abs();
                let chebyshev = if dr_abs > df_abs { dr_abs } else { df_abs };
                if chebyshev == 2 {
                    let r = rank + dr;
                    let f = file + df;
                    if r >= 0 && r < 7 && f >= 0 && f < 7 {
                        bits |= 1u64 << (r as usize * 7 + f as usize);
                    }
                }
                df += 1;
            }
            dr += 1;
        }
        table[sq] = Bitboard::new(bits);
        sq += 1;
    }
    table
}

const fn compute_move_masks() -> [Bitboard; 49] {
    let subdivide = compute_subdivide_masks();
    let jump = compute_jump_masks();
    let mut table = [Bitboard::EMPTY; 49];
    let mut sq = 0usize;
    while sq < 49 {
        table[sq] = Bitboard::new(subdivide[sq].inner() | jump[sq].inner());
        sq += 1;
    }
    table
}

static SUBDIVIDE_MASKS: [Bitboard; 49] = compute_subdivide_masks();
static JUMP_MASKS: [Bitboard; 49] = compute_jump_masks();
static MOVE_MASKS: [Bitboard; 49] = compute_move_masks();

/// Cells from which a piece could subdivide onto `sq` (Chebyshev distance 1).
#[inline]
pub fn subdivide_mask(sq: Square) -> Bitboard {
    SUBDIVIDE_MASKS[sq.index()]
}

/// Cells from which a piece could jump onto `sq` (Chebyshev distance exactly 2).
#[inline]
pub fn jump_mask(sq: Square) -> Bitboard {
    JUMP_MASKS[sq.index()]
}

/// Cells from which any piece could legally move onto `sq`.
#[inline]
pub fn move_mask(sq: Square) -> Bitboard {
    MOVE_MASKS[sq.index()]
}
