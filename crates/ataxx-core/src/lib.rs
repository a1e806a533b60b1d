//! Core Ataxx types: board representations, mask tables, and move generation.

mod array_board;
mod bitboard;
mod board;
mod error;
mod fen;
mod file;
mod game;
mod masks;
mod movegen;
mod perft;
mod rank;
mod side;
mod square;

pub use array_board::ArrayBoard;
pub use bitboard::Bitboard;
pub use board::{Board, PrettyBoard};
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use file::File;
pub use game::Game;
pub use masks::{jump_mask, move_mask, subdivide_mask};
pub use movegen::{apply_move, successors};
pub use perft::perft;
pub use rank::Rank;
pub use side::Side;
pub use square::Square;
