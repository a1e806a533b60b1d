//! Error types for position parsing and board validation.

use std::fmt;

/// Errors that occur when parsing a position string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// The placement does not have exactly 7 '/'-separated rows.
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 7 cells.
    BadRowLength {
        /// Zero-based row index (0 = rank 7, 6 = rank 1).
        row_index: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    InvalidCellChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    InvalidBoard {
        /// The underlying board validation error.
        source: BoardError,
    },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongRowCount { found } => {
                write!(f, "expected 7 rows in placement, found {found}")
            }
            FenError::BadRowLength { row_index, length } => {
                write!(f, "row {row_index} describes {length} cells, expected 7")
            }
            FenError::InvalidCellChar { character } => {
                write!(f, "invalid cell character: '{character}'")
            }
            FenError::InvalidBoard { source } => {
                write!(f, "invalid board: {source}")
            }
        }
    }
}

impl std::error::Error for FenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FenError::InvalidBoard { source } => Some(source),
            _ => None,
        }
    }
}

impl From<BoardError> for FenError {
    fn from(source: BoardError) -> Self {
        FenError::InvalidBoard { source }
    }
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// The two side populations claim the same cell.
    #[error("x and o populations overlap")]
    OverlappingSides,
    /// Bits are set outside the 49-cell board.
    #[error("bits set beyond cell 48")]
    StrayBits,
}
