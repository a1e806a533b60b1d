//! Full-width negamax search.

use ataxx_core::{Game, Side};

/// Search the whole game tree for `side` down to `depth`.
///
/// Returns the best successor together with its score from `side`'s
/// perspective (both players maximize their own sign-flipped score, so
/// the minimizer's best reply comes back negated). Depth 0 evaluates
/// the immediate successors heuristically; an exhausted position
/// returns itself. Ties keep the first successor seen.
pub fn minimax<G: Game + Clone>(game: &G, side: Side, depth: u8) -> (G, i32) {
    let sign = side.sign();
    let boards = game.next_boards(side);

    // The game is over: report the position as it stands
    if boards.is_empty() {
        return (game.clone(), sign * game.score());
    }

    let mut best: Option<(G, i32)> = None;

    for board in boards {
        let score = if depth == 0 {
            sign * board.score()
        } else {
            let (_, reply) = minimax(&board, !side, depth - 1);
            -reply
        };

        let improved = match &best {
            None => true,
            Some((_, incumbent)) => score > *incumbent,
        };
        if improved {
            best = Some((board, score));
        }
    }

    best.expect("a non-terminal position has at least one successor")
}

#[cfg(test)]
mod tests {
    use super::minimax;
    use ataxx_core::{Board, Side, Square};

    #[test]
    fn depth_0_picks_a_subdividing_move() {
        // Every clone gains exactly one piece and no enemy is in infection
        // range, so the best immediate score for either side is +1.
        let board = Board::starting_position();
        let (best, score) = minimax(&board, Side::X, 0);
        assert_eq!(score, 1);
        assert_eq!(best.x().count(), 3);

        let (best, score) = minimax(&board, Side::O, 0);
        assert_eq!(score, 1);
        assert_eq!(best.o().count(), 3);
    }

    #[test]
    fn depth_0_tie_break_keeps_first_successor() {
        // All clones score +1; the winner must be the first one generated,
        // which subdivides a1 onto b1 (the lowest-index reachable cell).
        let board = Board::starting_position();
        let (best, _) = minimax(&board, Side::X, 0);
        assert!(best.x().contains(Square::A1));
        assert!(best.x().contains(Square::B1));
    }

    #[test]
    fn terminal_position_returns_itself() {
        let board: Board = "xxxxxxx/xxxxxxx/xxxxxxx/xxxxxxx/ooooooo/ooooooo/ooooooo"
            .parse()
            .unwrap();
        let (best, score) = minimax(&board, Side::X, 3);
        assert_eq!(best, board);
        assert_eq!(score, 7);

        // From the minimizer's perspective the same position scores -7
        let (best, score) = minimax(&board, Side::O, 3);
        assert_eq!(best, board);
        assert_eq!(score, -7);
    }

    #[test]
    fn prefers_infection_over_plain_clone() {
        // x d4 with o at e4: cloning next to the o converts it, a 3-point
        // swing over any quiet clone.
        let board: Board = "7/7/7/3xo2/7/7/7".parse().unwrap();
        let (best, score) = minimax(&board, Side::X, 0);
        assert_eq!(score, 3);
        assert!(best.o().is_empty());
    }

    #[test]
    fn deeper_search_accounts_for_the_reply() {
        let board = Board::starting_position();
        let (_, shallow) = minimax(&board, Side::X, 0);
        let (_, deep) = minimax(&board, Side::X, 1);
        // After x's clone, o clones back: the net advantage evaporates
        assert_eq!(shallow, 1);
        assert_eq!(deep, 0);
    }

    #[test]
    fn pass_position_returns_the_pass() {
        let board: Board = "ooooooo/oxxxxxo/oxxxxxo/oxx1xxo/oxxxxxo/oxxxxxo/ooooooo"
            .parse()
            .unwrap();
        let (best, _) = minimax(&board, Side::O, 1);
        assert_eq!(best, board, "the forced pass is the only successor");
        assert!(!best.finished());
    }
}
