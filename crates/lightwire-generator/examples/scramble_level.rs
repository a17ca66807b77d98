//! Example scrambling a Lightwire level.
//!
//! A level file starts with a `ROWS COLS` line followed by one tile per line
//! in the `KIND ROW COL SIDE...` format. Blank lines and lines starting with
//! `#` are skipped. Without a file, a built-in 5×5 level is used.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example scramble_level
//! cargo run --example scramble_level -- path/to/level.txt
//! ```
//!
//! Reproduce a scramble from a logged seed:
//!
//! ```sh
//! cargo run --example scramble_level -- --seed 1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef
//! ```
//!
//! Sample many seeds in parallel and report how many turns they needed
//! (`--seed` cannot be combined with this):
//!
//! ```sh
//! cargo run --example scramble_level -- --samples 10000
//! ```

use std::{fs, path::PathBuf, process};

use clap::Parser;
use lightwire_core::{Board, TileDef};
use lightwire_generator::{ScrambleSeed, ScrambledBoard, Scrambler};
use rayon::prelude::*;

const BUILTIN_LEVEL: &str = "\
5 5
P 2 3 SOUTH
L 3 1 EAST SOUTH
L 3 2 WEST EAST
L 3 3 NORTH EAST SOUTH WEST
B 3 4 WEST
L 4 3 NORTH EAST
B 4 4 WEST
B 4 1 NORTH
";

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Level file to scramble.
    #[arg(value_name = "LEVEL")]
    level: Option<PathBuf>,

    /// Seed to scramble with, as 64 hex digits.
    #[arg(long, value_name = "SEED")]
    seed: Option<ScrambleSeed>,

    /// Number of random seeds to sample for statistics.
    #[arg(long, value_name = "COUNT", default_value_t = 1, conflicts_with = "seed")]
    samples: usize,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    let text = match &args.level {
        Some(path) => fs::read_to_string(path).unwrap_or_else(|err| {
            eprintln!("Failed to read {}: {err}", path.display());
            process::exit(1);
        }),
        None => BUILTIN_LEVEL.to_owned(),
    };
    let board = parse_level(&text).unwrap_or_else(|err| {
        eprintln!("Invalid level: {err}");
        process::exit(1);
    });
    if !board.is_won() {
        eprintln!("Level must be given in its solved orientation.");
        process::exit(1);
    }

    let scrambler = Scrambler::default();
    let positions = board.filled_positions();

    if args.samples > 1 {
        // boards carry listeners and are not shared across threads
        let (rows, cols, defs) = (board.rows(), board.cols(), board.tile_defs());
        let rounds = (0..args.samples)
            .into_par_iter()
            .map(|_| {
                let mut board = Board::from_tile_defs(rows, cols, &defs).unwrap();
                scrambler
                    .scramble(&mut board, &positions)
                    .map(|scrambled| scrambled.guarantee_rounds)
            })
            .collect::<Result<Vec<_>, _>>()
            .unwrap_or_else(|err| {
                eprintln!("Scramble failed: {err}");
                process::exit(1);
            });
        print_stats(&rounds);
        return;
    }

    let mut scrambled_board = board;
    let seed = args.seed.unwrap_or_else(ScrambleSeed::random);
    let scrambled = scrambler
        .scramble_with_seed(&mut scrambled_board, &positions, seed)
        .unwrap_or_else(|err| {
            eprintln!("Scramble failed: {err}");
            process::exit(1);
        });
    print_scramble(&scrambled_board, &scrambled);
}

fn parse_level(text: &str) -> Result<Board, Box<dyn std::error::Error>> {
    let mut lines = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'));
    let header = lines.next().ok_or("missing `ROWS COLS` header")?;
    let (rows, cols) = header
        .split_once(char::is_whitespace)
        .ok_or("header must be `ROWS COLS`")?;
    let rows = rows.trim().parse()?;
    let cols = cols.trim().parse()?;
    let defs = lines
        .map(str::parse::<TileDef>)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Board::from_tile_defs(rows, cols, &defs)?)
}

fn print_scramble(board: &Board, scrambled: &ScrambledBoard) {
    println!("Seed:");
    println!("  {}", scrambled.seed);
    println!();

    println!("Turns:");
    println!("  total: {}", scrambled.turns.len());
    println!("  guarantee rounds: {}", scrambled.guarantee_rounds);
    println!();

    println!("Board:");
    println!("  {} {}", board.rows(), board.cols());
    for def in board.tile_defs() {
        println!("  {def}");
    }
}

fn print_stats(rounds: &[usize]) {
    let total = rounds.iter().sum::<usize>();
    let max = rounds.iter().copied().max().unwrap_or(0);
    let untouched = rounds.iter().filter(|&&n| n == 0).count();

    println!("Samples: {}", rounds.len());
    println!("Guarantee rounds:");
    #[expect(clippy::cast_precision_loss)]
    let mean = total as f64 / rounds.len() as f64;
    println!("  mean: {mean:.2}");
    println!("  max: {max}");
    println!("  none needed: {untouched}");
}
