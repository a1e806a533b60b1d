//! Alpha-beta pruned search, with and without the transposition cache.

use std::hash::Hash;

use ataxx_core::{Game, Side};

use super::tt::{SearchKey, Transposition};

/// Minimax with alpha-beta pruning, in the classical min/max formulation.
///
/// Scores are always from the maximizer's perspective; `side == Side::X`
/// marks the maximizing node. `alpha` is the best score the maximizer is
/// already guaranteed elsewhere, `beta` the minimizer's counterpart; once
/// `alpha >= beta` the remaining successors cannot influence the root
/// choice and the node returns its best so far. Ties keep the first
/// successor seen.
pub fn alphabeta<G: Game + Clone>(
    game: &G,
    side: Side,
    depth: u8,
    alpha: i32,
    beta: i32,
) -> (G, i32) {
    let boards = game.next_boards(side);

    // The game is over: report the position as it stands
    if boards.is_empty() {
        return (game.clone(), game.score());
    }

    descend(boards, side, depth, alpha, beta, &mut |child, side, depth, alpha, beta| {
        alphabeta(child, side, depth, alpha, beta)
    })
}

/// [`alphabeta`] backed by a transposition cache.
///
/// Probes the cache with the full `(position, side, depth, alpha, beta)`
/// key on entry. Every exit path, cutoffs included, funnels through a
/// single store, so the cache always learns the result of a completed
/// node. Identical inputs against the same cache therefore always return
/// the identical result.
pub fn alphabeta_tt<G, T>(
    game: &G,
    side: Side,
    depth: u8,
    alpha: i32,
    beta: i32,
    table: &mut T,
) -> (G, i32)
where
    G: Game + Clone + Eq + Hash,
    T: Transposition<G>,
{
    let key = SearchKey {
        game: game.clone(),
        side,
        depth,
        alpha,
        beta,
    };
    if let Some(cached) = table.load(&key) {
        return cached;
    }

    let boards = game.next_boards(side);
    let (best, score) = if boards.is_empty() {
        (game.clone(), game.score())
    } else {
        descend(boards, side, depth, alpha, beta, &mut |child, side, depth, alpha, beta| {
            alphabeta_tt(child, side, depth, alpha, beta, table)
        })
    };

    table.store(key, best.clone(), score);
    (best, score)
}

/// Node body shared by the plain and cached variants: evaluate or recurse
/// over `boards`, tightening the window as results come in.
fn descend<G, F>(
    boards: Vec<G>,
    side: Side,
    depth: u8,
    mut alpha: i32,
    mut beta: i32,
    recurse: &mut F,
) -> (G, i32)
where
    G: Game + Clone,
    F: FnMut(&G, Side, u8, i32, i32) -> (G, i32),
{
    let maximizing = side == Side::X;
    let mut best: Option<(G, i32)> = None;

    for board in boards {
        let score = if depth == 0 {
            board.score()
        } else {
            recurse(&board, !side, depth - 1, alpha, beta).1
        };

        let improved = match &best {
            None => true,
            Some((_, incumbent)) => {
                if maximizing {
                    score > *incumbent
                } else {
                    score < *incumbent
                }
            }
        };
        if improved {
            best = Some((board, score));
        }

        // Leaf evaluation never prunes: every immediate successor is scored
        if depth > 0 {
            let incumbent = best.as_ref().expect("set on the first iteration").1;
            if maximizing {
                alpha = alpha.max(incumbent);
            } else {
                beta = beta.min(incumbent);
            }
            if alpha >= beta {
                break;
            }
        }
    }

    best.expect("descend requires at least one successor")
}
