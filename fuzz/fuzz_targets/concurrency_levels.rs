#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(levels) = procbench::fuzzing::parse_levels_input(input) {
            debug_assert!(!levels.as_slice().is_empty());
            debug_assert!(levels.as_slice().iter().all(|level| level.get() > 0));
        }
    }
});
