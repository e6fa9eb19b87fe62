#![no_main]

use hexrail::board::Board;
use hexrail::tile::TileCatalog;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|json: &str| {
    // Malformed data must surface as errors, never panics.
    let _ = TileCatalog::from_json(json);
    let _ = Board::from_json(json);
});
