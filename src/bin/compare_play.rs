use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use flipbot::game::{self, DEFAULT_DEPTH};
use flipbot::search::strategy;
use flipbot::Player;

/// Pit two strategies against each other over many games and tally results.
/// Colours are swapped every game so neither side keeps the first-move edge.
#[derive(Parser, Debug)]
#[command(author, version, about = "Compare two Othello strategies over repeated games", long_about = None)]
struct Args {
    /// First strategy: random, negamax, heuristic, alphabeta
    #[arg(long, default_value = "alphabeta")]
    a: String,

    /// Second strategy: random, negamax, heuristic, alphabeta
    #[arg(long, default_value = "random")]
    b: String,

    /// Number of games to play
    #[arg(long, default_value_t = 10)]
    games: u32,

    /// Search depth budget in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Per-move time budget in milliseconds for the time-bounded strategies
    #[arg(long, default_value_t = 2000)]
    movetime: u64,

    /// Base RNG seed; game i uses seed + i for reproducible runs
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let movetime = Duration::from_millis(args.movetime);
    let mut a_wins = 0u32;
    let mut b_wins = 0u32;
    let mut draws = 0u32;

    for game_index in 0..args.games {
        let seed = Some(args.seed + game_index as u64);
        let a_is_black = game_index % 2 == 0;
        let (black_name, white_name) = if a_is_black {
            (&args.a, &args.b)
        } else {
            (&args.b, &args.a)
        };
        let mut black = strategy::by_name(black_name, movetime, seed)
            .ok_or_else(|| anyhow::anyhow!("unknown strategy '{black_name}'"))?;
        let mut white = strategy::by_name(white_name, movetime, seed)
            .ok_or_else(|| anyhow::anyhow!("unknown strategy '{white_name}'"))?;

        let outcome = game::play(black.as_mut(), white.as_mut(), args.depth)?;
        let a_colour = if a_is_black { Player::Black } else { Player::White };
        match outcome.winner() {
            Some(winner) if winner == a_colour => a_wins += 1,
            Some(_) => b_wins += 1,
            None => draws += 1,
        }
        println!(
            "game {:>3}: {} {} - {} {} ({} as Black)",
            game_index + 1,
            args.a,
            if a_is_black { outcome.black } else { outcome.white },
            if a_is_black { outcome.white } else { outcome.black },
            args.b,
            if a_is_black { &args.a } else { &args.b },
        );
    }

    println!(
        "\n{}: {} wins, {}: {} wins, draws: {}",
        args.a, a_wins, args.b, b_wins, draws
    );
    Ok(())
}
