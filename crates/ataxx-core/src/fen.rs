//! Position string parsing and serialization for [`Board`].
//!
//! Uses the Ataxx FEN placement field: rows from rank 7 down to rank 1
//! separated by '/', with 'x'/'o' for pieces and digits 1-7 for runs of
//! empty cells.

use std::fmt;
use std::str::FromStr;

use crate::bitboard::Bitboard;
use crate::board::Board;
use crate::error::FenError;
use crate::file::File;
use crate::rank::Rank;
use crate::side::Side;
use crate::square::Square;

/// The placement string for the starting position.
pub const STARTING_FEN: &str = "o5x/7/7/7/7/7/x5o";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        // Accept a bare placement or a longer FEN whose first field is one.
        let placement = fen.split_whitespace().next().unwrap_or("");

        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 7 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut x = Bitboard::EMPTY;
        let mut o = Bitboard::EMPTY;

        for (row_index, row_str) in rows.iter().enumerate() {
            // Rows go from rank 7 to rank 1 (top to bottom)
            let rank = Rank::from_index(6 - row_index as u8).unwrap();
            let mut file_index: u8 = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=7).contains(&digit) {
                        return Err(FenError::InvalidCellChar { character: c });
                    }
                    file_index += digit as u8;
                } else {
                    let side = match c {
                        'x' | 'X' => Side::X,
                        'o' | 'O' => Side::O,
                        _ => return Err(FenError::InvalidCellChar { character: c }),
                    };

                    if file_index >= 7 {
                        return Err(FenError::BadRowLength {
                            row_index,
                            length: file_index as usize + 1,
                        });
                    }

                    let file = File::from_index(file_index).unwrap();
                    let bb = Square::new(rank, file).bitboard();
                    match side {
                        Side::X => x = x | bb,
                        Side::O => o = o | bb,
                    }
                    file_index += 1;
                }
            }

            if file_index != 7 {
                return Err(FenError::BadRowLength {
                    row_index,
                    length: file_index as usize,
                });
            }
        }

        let board = Board::new(x, o);
        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank_index in (0u8..7).rev() {
            let rank = Rank::from_index(rank_index).unwrap();
            let mut run = 0u8;
            for file in File::ALL {
                let sq = Square::new(rank, file);
                match self.owner_of(sq) {
                    Some(side) => {
                        if run > 0 {
                            write!(f, "{run}")?;
                            run = 0;
                        }
                        write!(f, "{side}")?;
                    }
                    None => run += 1,
                }
            }
            if run > 0 {
                write!(f, "{run}")?;
            }
            if rank_index > 0 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

impl Board {
    /// Serialize the position to its placement string.
    pub fn to_fen(&self) -> String {
        self.to_string()
    }
}
