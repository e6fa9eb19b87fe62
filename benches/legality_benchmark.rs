//! Benchmarks for the legality resolvers on the bundled demo game.
//!
//! Orientation resolution runs once per catalog tile per legal-tiles query,
//! so it is the hot path.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hexrail::hex::Coordinate;
use hexrail::legality::{legal_tiles, resolve_orientations, survey};
use hexrail::registry::{Game, GameRegistry};

/// Load the demo game from the games directory.
fn load_demo() -> std::sync::Arc<Game> {
    let root = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("games");
    GameRegistry::new(root, false).get("demo").unwrap()
}

fn coord(raw: &str) -> Coordinate {
    raw.parse().unwrap()
}

fn bench_orientations(c: &mut Criterion) {
    let game = load_demo();
    let chicago = game.catalog.lookup("X6").unwrap();
    let straight = game.catalog.lookup("9").unwrap();

    c.bench_function("orientations_split_city", |b| {
        b.iter(|| black_box(resolve_orientations(&game.board, black_box(coord("C7")), chicago)));
    });
    c.bench_function("orientations_plain_track", |b| {
        b.iter(|| black_box(resolve_orientations(&game.board, black_box(coord("D4")), straight)));
    });
}

fn bench_legal_tiles(c: &mut Criterion) {
    let game = load_demo();

    c.bench_function("legal_tiles_empty_cell", |b| {
        b.iter(|| black_box(legal_tiles(&game.board, &game.catalog, black_box(coord("C5")))));
    });
    c.bench_function("legal_tiles_city", |b| {
        b.iter(|| black_box(legal_tiles(&game.board, &game.catalog, black_box(coord("D10")))));
    });
}

fn bench_survey(c: &mut Criterion) {
    let game = load_demo();

    c.bench_function("survey_demo_board", |b| {
        b.iter(|| black_box(survey(&game.board, &game.catalog)));
    });
}

criterion_group!(benches, bench_orientations, bench_legal_tiles, bench_survey);
criterion_main!(benches);
