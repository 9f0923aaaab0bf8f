#![no_main]

use libfuzzer_sys::fuzz_target;

use common::timestamp::{format_grouped, parse_grouped};

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Parsing must never panic, and anything that parses must survive a
    // canonical re-encode round trip.
    if let Ok(value) = parse_grouped(text) {
        let canonical = format_grouped(value);
        assert_eq!(parse_grouped(&canonical), Ok(value));
    }
});
