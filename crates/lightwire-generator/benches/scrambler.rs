//! Benchmarks for board scrambling.
//!
//! # Benchmarks
//!
//! - **`scramble_small`**: Scrambles a 2×2 loop with a single bulb.
//! - **`scramble_large`**: Scrambles a 9×9 comb with a bulb at the end of every
//!   branch, where the guarantee phase has to dim many bulbs.
//!
//! # Test Data
//!
//! Uses three fixed seeds to keep runs reproducible:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench scrambler
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use lightwire_core::{
    Board, Position,
    Side::{East, North, South, West},
    TileDef, TileKind,
};
use lightwire_generator::{ScrambleSeed, Scrambler};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn small_level() -> (u16, u16, Vec<TileDef>) {
    let defs = [
        "P 1 1 EAST SOUTH",
        "L 1 2 WEST SOUTH",
        "L 2 1 NORTH EAST",
        "B 2 2 NORTH",
    ]
    .map(|line| line.parse().unwrap());
    (2, 2, defs.to_vec())
}

/// A source on the top-left feeding a vertical spine; every spine wire
/// branches east into a row of wires ending in a bulb.
fn large_level() -> (u16, u16, Vec<TileDef>) {
    const SIZE: u16 = 9;
    let mut defs = vec![TileDef::new(TileKind::Source, Position::new(1, 1), vec![South])];
    for row in 2..=SIZE {
        let spine = if row == SIZE {
            vec![North, East]
        } else {
            vec![North, East, South]
        };
        defs.push(TileDef::new(TileKind::Wire, Position::new(row, 1), spine));
        for col in 2..SIZE {
            defs.push(TileDef::new(
                TileKind::Wire,
                Position::new(row, col),
                vec![West, East],
            ));
        }
        defs.push(TileDef::new(
            TileKind::Bulb,
            Position::new(row, SIZE),
            vec![West],
        ));
    }
    (SIZE, SIZE, defs)
}

fn bench_level(c: &mut Criterion, name: &str, (rows, cols, defs): (u16, u16, Vec<TileDef>)) {
    let scrambler = Scrambler::default();
    let positions = Board::from_tile_defs(rows, cols, &defs)
        .unwrap()
        .filled_positions();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = ScrambleSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new(name, format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || {
                        let board = Board::from_tile_defs(rows, cols, &defs).unwrap();
                        (board, hint::black_box(*seed))
                    },
                    |(mut board, seed)| {
                        scrambler
                            .scramble_with_seed(&mut board, &positions, seed)
                            .unwrap()
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_scramble_small(c: &mut Criterion) {
    bench_level(c, "scramble_small", small_level());
}

fn bench_scramble_large(c: &mut Criterion) {
    bench_level(c, "scramble_large", large_level());
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(12));
    targets =
        bench_scramble_small,
        bench_scramble_large
);
criterion_main!(benches);
