//! Adversarial search for Ataxx, generic over the playable-game contract.

pub mod search;

pub use search::alphabeta::{alphabeta, alphabeta_tt};
pub use search::negamax::minimax;
pub use search::tt::{SearchKey, Transposition, TranspositionTable};
pub use search::{SCORE_MAX, SCORE_MIN};
