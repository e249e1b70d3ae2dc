use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use flipbot::game::{self, DEFAULT_DEPTH};
use flipbot::search::strategy::{self, Strategy};

#[derive(Parser, Debug)]
#[command(author, version, about = "Play Othello between two search strategies", long_about = None)]
struct Args {
    /// Strategy for Black: random, negamax, heuristic, alphabeta
    #[arg(long, default_value = "alphabeta")]
    black: String,

    /// Strategy for White: random, negamax, heuristic, alphabeta
    #[arg(long, default_value = "random")]
    white: String,

    /// Search depth budget in plies
    #[arg(long, default_value_t = DEFAULT_DEPTH)]
    depth: u32,

    /// Per-move time budget in milliseconds for the time-bounded strategies
    #[arg(long, default_value_t = 2000)]
    movetime: u64,

    /// RNG seed for the random strategy (unseeded if omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn make_strategy(name: &str, movetime: Duration, seed: Option<u64>) -> Result<Box<dyn Strategy>> {
    strategy::by_name(name, movetime, seed)
        .ok_or_else(|| anyhow::anyhow!("unknown strategy '{name}': use random, negamax, heuristic or alphabeta"))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let movetime = Duration::from_millis(args.movetime);
    let mut black = make_strategy(&args.black, movetime, args.seed)?;
    let mut white = make_strategy(&args.white, movetime, args.seed)?;

    println!("Black ({}) vs White ({}), depth {}", args.black, args.white, args.depth);

    let outcome = game::play(black.as_mut(), white.as_mut(), args.depth)?;

    println!("\n{}", outcome.board);
    println!("Black: {}", outcome.black);
    println!("White: {}", outcome.white);
    match outcome.winner() {
        Some(winner) => println!("{} wins!", winner),
        None => println!("Draw!"),
    }

    Ok(())
}
