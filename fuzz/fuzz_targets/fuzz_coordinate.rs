#![no_main]

use hexrail::board::Placement;
use hexrail::hex::{Coordinate, Direction};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|raw: &str| {
    if let Ok(coord) = raw.parse::<Coordinate>() {
        // Display must parse back to the same cell.
        let again: Coordinate = match coord.to_string().parse() {
            Ok(c) => c,
            Err(e) => panic!("{coord} does not reparse: {e}"),
        };
        assert_eq!(coord, again);

        for direction in Direction::ALL {
            if let Some(neighbor) = coord.neighbor(direction) {
                assert_eq!(neighbor.neighbor(direction.opposite()), Some(coord));
            }
        }
    }

    let _ = raw.parse::<Placement>();
});
