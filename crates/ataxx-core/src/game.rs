//! The playable-game contract shared by both board representations.

use crate::side::Side;

/// A two-player perfect-information game position the search engine can drive.
///
/// Implementations must be pure: the same position always yields the same
/// score and the same successor sequence, in the same order.
pub trait Game: Sized {
    /// Heuristic estimate of the position. Positive favours the maximizer
    /// (X), negative the minimizer (O), zero is neutral.
    fn score(&self) -> i32;

    /// All legal successor positions for `side`, in generation order.
    ///
    /// An empty result means the game is over. A side that still has empty
    /// cells on the board but no piece in range of any of them is forced to
    /// pass: the result is then a single-element sequence containing the
    /// unchanged position.
    fn next_boards(&self, side: Side) -> Vec<Self>;

    /// Return `true` iff no further play is possible.
    fn finished(&self) -> bool;
}
