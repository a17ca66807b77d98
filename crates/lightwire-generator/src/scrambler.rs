use lightwire_core::{Board, Position};
use rand::prelude::*;
use rand_pcg::Pcg64;

use crate::{ScrambleConfig, ScrambleSeed};

/// One step of a scramble: `turns` clockwise quarter turns at `position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrambleTurn {
    /// Tile that was turned.
    pub position: Position,
    /// Number of clockwise quarter turns, `0..=3`.
    pub turns: u8,
}

/// Record of a completed scramble.
///
/// The turns are listed in application order. Applying them in reverse with
/// counter-clockwise rotations restores the board exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrambledBoard {
    /// Seed the scramble was generated from.
    pub seed: ScrambleSeed,
    /// Every applied step, seed phase first.
    pub turns: Vec<ScrambleTurn>,
    /// How many of `turns` belong to the guarantee phase.
    pub guarantee_rounds: usize,
}

/// Errors that stop a scramble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ScrambleError {
    /// No positions were given to scramble.
    #[display("no filled positions to scramble")]
    NoFilledPositions,
    /// A given position is off the board or holds no tile.
    #[display("position {position} holds no tile")]
    NotATile {
        /// The offending position.
        position: Position,
    },
    /// The guarantee phase hit its round limit with a bulb still lit.
    #[display("a bulb was still powered after {rounds} guarantee round(s)")]
    GuaranteeExhausted {
        /// Rounds attempted.
        rounds: usize,
    },
}

/// Produces shuffled starting boards from solved ones.
///
/// A scramble runs in two phases. The seed phase applies a fixed number of
/// random turns (0 to 3 quarter turns of a random tile each). The guarantee
/// phase then keeps applying random turns until no bulb is powered, so the
/// result is never trivially solved. Only rotations are applied, so the board
/// stays solvable; [`ScrambledBoard::turns`] records how to undo them.
///
/// The scramble is a plain blocking loop. Any pacing or animation is up to the
/// caller, which can replay the recorded turns.
///
/// # Examples
///
/// ```
/// use lightwire_core::Board;
/// use lightwire_generator::{ScrambleConfig, ScrambleSeed, Scrambler};
///
/// let defs = ["P 1 1 EAST", "L 1 2 WEST EAST", "B 1 3 WEST"]
///     .map(|line| line.parse().unwrap());
/// let mut board = Board::from_tile_defs(1, 3, &defs)?;
/// assert!(board.is_won());
///
/// let scrambler = Scrambler::new(ScrambleConfig::default());
/// let positions = board.filled_positions();
/// let seed = ScrambleSeed::from_phrase("doc");
/// let scrambled = scrambler.scramble_with_seed(&mut board, &positions, seed)?;
///
/// assert!(!board.any_bulb_powered());
/// assert_eq!(scrambled.seed, seed);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Scrambler {
    config: ScrambleConfig,
}

impl Scrambler {
    /// Creates a scrambler with the given tuning.
    #[must_use]
    pub fn new(config: ScrambleConfig) -> Self {
        Self { config }
    }

    /// Returns the tuning in use.
    #[must_use]
    pub fn config(&self) -> &ScrambleConfig {
        &self.config
    }

    /// Scrambles `board` with a fresh random seed.
    ///
    /// # Errors
    ///
    /// See [`scramble_with_seed`](Self::scramble_with_seed).
    pub fn scramble(
        &self,
        board: &mut Board,
        positions: &[Position],
    ) -> Result<ScrambledBoard, ScrambleError> {
        self.scramble_with_seed(board, positions, ScrambleSeed::random())
    }

    /// Scrambles `board` deterministically from `seed`, turning only tiles at
    /// `positions`.
    ///
    /// # Errors
    ///
    /// Returns [`ScrambleError::NoFilledPositions`] if `positions` is empty,
    /// [`ScrambleError::NotATile`] if one of them is off the board or empty,
    /// and [`ScrambleError::GuaranteeExhausted`] if the guarantee phase runs
    /// out of rounds. In the last case the board keeps the turns applied so
    /// far.
    pub fn scramble_with_seed(
        &self,
        board: &mut Board,
        positions: &[Position],
        seed: ScrambleSeed,
    ) -> Result<ScrambledBoard, ScrambleError> {
        if positions.is_empty() {
            return Err(ScrambleError::NoFilledPositions);
        }
        if let Some(&position) = positions.iter().find(|&&pos| {
            board
                .node_at(pos)
                .is_none_or(|node| node.kind().is_empty())
        }) {
            return Err(ScrambleError::NotATile { position });
        }

        log::debug!("scrambling {} tile(s) with seed {seed}", positions.len());
        let mut rng = Pcg64::from_seed(*seed.as_bytes());
        let mut turns = Vec::with_capacity(self.config.seed_rounds);
        board.recompute_power();

        for _ in 0..self.config.seed_rounds {
            turns.push(random_turn(&mut rng, board, positions));
        }

        let mut guarantee_rounds = 0;
        while board.any_bulb_powered() {
            if guarantee_rounds == self.config.max_guarantee_rounds.get() {
                log::warn!("scramble gave up after {guarantee_rounds} guarantee round(s)");
                return Err(ScrambleError::GuaranteeExhausted {
                    rounds: guarantee_rounds,
                });
            }
            turns.push(random_turn(&mut rng, board, positions));
            guarantee_rounds += 1;
        }
        log::debug!(
            "scramble finished: {} seed round(s), {guarantee_rounds} guarantee round(s)",
            self.config.seed_rounds
        );

        Ok(ScrambledBoard {
            seed,
            turns,
            guarantee_rounds,
        })
    }
}

fn random_turn(rng: &mut Pcg64, board: &mut Board, positions: &[Position]) -> ScrambleTurn {
    let position = positions[rng.random_range(0..positions.len())];
    let turns = rng.random_range(0..4u8);
    for _ in 0..turns {
        board.rotate_clockwise(position);
    }
    ScrambleTurn { position, turns }
}

/// Reverts a scramble by applying its turns backwards, counter-clockwise.
pub fn unscramble(board: &mut Board, scrambled: &ScrambledBoard) {
    for turn in scrambled.turns.iter().rev() {
        for _ in 0..turn.turns {
            board.rotate_counter_clockwise(turn.position);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZero;

    use lightwire_core::{Side::*, TileDef};
    use proptest::prelude::*;

    use super::*;

    fn pos(row: u16, col: u16) -> Position {
        Position::new(row, col)
    }

    /// A solved 4×4 layout with a cross source and four bulbs.
    ///
    /// ```text
    /// .      B(S)   .      .
    /// B(E)   P(X)   L(WS)  .
    /// .      L(NS)  L(NE)  B(W)
    /// .      B(N)   .      .
    /// ```
    fn solved_board() -> Board {
        let mut board = Board::new(4, 4).unwrap();
        board
            .place_source(pos(2, 2), &[North, East, South, West])
            .unwrap();
        board.place_bulb(pos(1, 2), South).unwrap();
        board.place_bulb(pos(2, 1), East).unwrap();
        board.place_wire(pos(2, 3), &[West, South]).unwrap();
        board.place_wire(pos(3, 3), &[North, East]).unwrap();
        board.place_bulb(pos(3, 4), West).unwrap();
        board.place_wire(pos(3, 2), &[North, South]).unwrap();
        board.place_bulb(pos(4, 2), North).unwrap();
        board.recompute_power();
        board
    }

    #[test]
    fn test_fixture_is_solved() {
        assert!(solved_board().is_won());
    }

    #[test]
    fn test_scramble_turns_off_every_bulb() {
        let mut board = solved_board();
        let positions = board.filled_positions();
        let scrambled = Scrambler::default()
            .scramble_with_seed(&mut board, &positions, ScrambleSeed::from_phrase("bulbs"))
            .unwrap();

        assert!(!board.any_bulb_powered());
        assert!(!board.is_won());
        assert_eq!(
            scrambled.turns.len(),
            ScrambleConfig::DEFAULT_SEED_ROUNDS + scrambled.guarantee_rounds
        );
        assert!(scrambled.turns.iter().all(|turn| turn.turns < 4));
    }

    #[test]
    fn test_same_seed_same_scramble() {
        let seed = ScrambleSeed::from_phrase("repeat");
        let scrambler = Scrambler::default();

        let mut a = solved_board();
        let mut b = solved_board();
        let positions = a.filled_positions();
        let first = scrambler.scramble_with_seed(&mut a, &positions, seed).unwrap();
        let second = scrambler.scramble_with_seed(&mut b, &positions, seed).unwrap();

        assert_eq!(first, second);
        assert_eq!(a.tile_defs(), b.tile_defs());
    }

    #[test]
    fn test_unscramble_restores_solution() {
        let original = solved_board().tile_defs();
        let mut board = solved_board();
        let positions = board.filled_positions();
        let scrambled = Scrambler::default()
            .scramble_with_seed(&mut board, &positions, ScrambleSeed::from_phrase("undo"))
            .unwrap();

        unscramble(&mut board, &scrambled);
        assert_eq!(board.tile_defs(), original);
        assert!(board.is_won());
        assert!(board.nodes().all(|node| node.rotation() == 0));
    }

    #[test]
    fn test_rejects_bad_positions() {
        let scrambler = Scrambler::default();
        let mut board = solved_board();
        assert_eq!(
            scrambler.scramble(&mut board, &[]),
            Err(ScrambleError::NoFilledPositions)
        );
        assert_eq!(
            scrambler.scramble(&mut board, &[pos(2, 2), pos(1, 1)]),
            Err(ScrambleError::NotATile { position: pos(1, 1) })
        );
        assert_eq!(
            scrambler.scramble(&mut board, &[pos(9, 9)]),
            Err(ScrambleError::NotATile { position: pos(9, 9) })
        );
        assert!(board.is_won(), "rejected scrambles leave the board alone");
    }

    #[test]
    fn test_board_without_bulbs_needs_no_guarantee() {
        let defs = ["P 1 1 EAST", "L 1 2 WEST EAST"].map(|line| line.parse::<TileDef>().unwrap());
        let mut board = Board::from_tile_defs(1, 2, &defs).unwrap();
        let positions = board.filled_positions();
        let scrambled = Scrambler::default()
            .scramble_with_seed(&mut board, &positions, ScrambleSeed::from_phrase("none"))
            .unwrap();
        assert_eq!(scrambled.guarantee_rounds, 0);
    }

    #[test]
    fn test_guarantee_exhaustion() {
        // the bulb can only be broken by turning it, which is never allowed
        let defs = ["P 1 1 EAST", "B 1 2 WEST", "L 2 1 NORTH SOUTH"]
            .map(|line| line.parse::<TileDef>().unwrap());
        let mut board = Board::from_tile_defs(2, 2, &defs).unwrap();
        let config = ScrambleConfig {
            seed_rounds: 0,
            max_guarantee_rounds: NonZero::new(5).unwrap(),
        };
        let result = Scrambler::new(config).scramble_with_seed(
            &mut board,
            &[pos(2, 1)],
            ScrambleSeed::from_phrase("stuck"),
        );
        assert_eq!(result, Err(ScrambleError::GuaranteeExhausted { rounds: 5 }));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn prop_scramble_is_unlit_and_reversible(bytes in any::<[u8; 32]>()) {
            let original = solved_board().tile_defs();
            let mut board = solved_board();
            let positions = board.filled_positions();
            let scrambled = Scrambler::default()
                .scramble_with_seed(&mut board, &positions, ScrambleSeed::from_bytes(bytes))
                .unwrap();
            prop_assert!(!board.any_bulb_powered());

            unscramble(&mut board, &scrambled);
            prop_assert_eq!(board.tile_defs(), original);
            prop_assert!(board.is_won());
        }
    }
}
