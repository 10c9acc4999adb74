//! Gess-Rust: command-line front end for the Gess rules engine.
//!
//! ## Usage
//!
//! - `gess-rust` - Play a random demo game
//! - `gess-rust protocol` - Read commands from stdin, answer on stdout
//! - `gess-rust demo --seed 42` - Reproducible random demo game

use std::io;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::Level;

use gess_rust::board::Color;
use gess_rust::game::Game;
use gess_rust::playout::playout;
use gess_rust::text_protocol::TextEngine;

/// Moves played by a demo game unless `--max-moves` says otherwise.
const DEFAULT_DEMO_MOVES: usize = 200;

/// Gess-Rust: a rules engine for the board game Gess
#[derive(Parser)]
#[command(name = "gess-rust")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); logs go to stderr
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the text protocol on stdin/stdout
    Protocol,
    /// Play a random game and print the moves
    Demo {
        /// Seed for the random move choice
        #[arg(long)]
        seed: Option<u64>,
        /// Stop after this many moves
        #[arg(long, default_value_t = DEFAULT_DEMO_MOVES)]
        max_moves: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Some(Commands::Protocol) => {
            let mut engine = TextEngine::new();
            engine
                .run(io::stdin().lock(), io::stdout())
                .context("text protocol I/O failed")?;
        }
        Some(Commands::Demo { seed, max_moves }) => run_demo(seed, max_moves)?,
        None => run_demo(None, DEFAULT_DEMO_MOVES)?,
    }
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn run_demo(seed: Option<u64>, max_moves: usize) -> anyhow::Result<()> {
    let seed = seed.unwrap_or_else(|| fastrand::u64(..));
    println!("Gess-Rust: random demo game (seed {seed})\n");

    let mut game = Game::new();
    println!("{}", game.board());

    let mut rng = fastrand::Rng::with_seed(seed);
    let result = playout(&mut game, &mut rng, max_moves, |game, piece, dest, outcome| {
        let n = game.player(Color::Black).remaining_stones();
        let m = game.player(Color::White).remaining_stones();
        println!(
            "{} -> {}  captured B:{} W:{}  stones B:{n} W:{m}  {}",
            piece.center(),
            dest,
            outcome.removed.black,
            outcome.removed.white,
            outcome.state
        );
    })
    .context("demo game hit an engine error")?;

    println!("\n{}", game.board());
    println!("Moves played: {}", result.moves);
    println!("Final state: {}", result.state);
    for color in Color::BOTH {
        println!(
            "{color}: {} stones, {} rings",
            game.remaining_stones(color),
            game.count_rings(color)
        );
    }
    Ok(())
}
