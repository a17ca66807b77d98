//! Scrambled starting boards for Lightwire puzzles.
//!
//! A level is authored in its solved orientation. [`Scrambler`] shuffles it by
//! applying random clockwise turns, driven by a reproducible [`ScrambleSeed`],
//! until no bulb is lit. Because only rotations are applied, every scrambled
//! board can be solved, and [`unscramble`] shows how.
//!
//! # Examples
//!
//! ```
//! use lightwire_core::{Board, TileDef};
//! use lightwire_generator::{ScrambleSeed, Scrambler, unscramble};
//!
//! let defs = ["P 1 1 EAST SOUTH", "L 1 2 WEST SOUTH", "L 2 1 NORTH EAST", "B 2 2 NORTH"]
//!     .into_iter()
//!     .map(str::parse)
//!     .collect::<Result<Vec<TileDef>, _>>()?;
//! let mut board = Board::from_tile_defs(2, 2, &defs)?;
//!
//! let positions = board.filled_positions();
//! let seed = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef"
//!     .parse::<ScrambleSeed>()?;
//! let scrambled = Scrambler::default().scramble_with_seed(&mut board, &positions, seed)?;
//! assert!(!board.any_bulb_powered());
//!
//! unscramble(&mut board, &scrambled);
//! assert!(board.is_won());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod scrambler;
mod seed;

pub use self::{
    config::ScrambleConfig,
    scrambler::{ScrambleError, ScrambleTurn, ScrambledBoard, Scrambler, unscramble},
    seed::{ScrambleSeed, ScrambleSeedParseError},
};
