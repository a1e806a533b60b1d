use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use ataxx_core::{Board, Side};
use ataxx_engine::{
    alphabeta, alphabeta_tt, minimax, TranspositionTable, SCORE_MAX, SCORE_MIN,
};

/// Which search variant drives both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Variant {
    Minimax,
    Alphabeta,
    AlphabetaTt,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Ataxx self-play driver", long_about = None)]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u8,

    /// Transposition table capacity in entries
    #[arg(short, long, default_value_t = 160_000)]
    capacity: usize,

    /// Search variant
    #[arg(short, long, value_enum, default_value = "alphabeta-tt")]
    variant: Variant,

    /// Suppress per-turn board printouts
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    info!(
        depth = args.depth,
        capacity = args.capacity,
        variant = ?args.variant,
        "self-play starting"
    );

    let mut table: TranspositionTable<Board> = TranspositionTable::new(args.capacity);
    let mut board = Board::starting_position();
    let mut side = Side::X;
    let mut turn = 1u32;

    if !args.quiet {
        println!("{}\n", board.pretty());
    }

    while !board.finished() {
        let (next, score) = match args.variant {
            Variant::Minimax => minimax(&board, side, args.depth),
            Variant::Alphabeta => alphabeta(&board, side, args.depth, SCORE_MIN, SCORE_MAX),
            Variant::AlphabetaTt => {
                alphabeta_tt(&board, side, args.depth, SCORE_MIN, SCORE_MAX, &mut table)
            }
        };

        info!(turn, side = %side, score, position = %next, "ply");
        if !args.quiet {
            println!("{}\n", next.pretty());
        }

        board = next;
        side = !side;
        turn += 1;
    }

    let score = board.score();
    let winner = if score > 0 { Side::X } else { Side::O };
    info!(turns = turn - 1, score, cached = table.len(), "game over");
    println!("{winner} wins {}-{}", (49 + score) / 2, (49 - score) / 2);

    Ok(())
}
