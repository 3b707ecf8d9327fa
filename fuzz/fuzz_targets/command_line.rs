#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        if let Ok(args) = procbench::fuzzing::split_command_line_input(input) {
            let plain = !input.contains(['\'', '"', '\\']);
            if plain {
                debug_assert_eq!(args.len(), input.split_whitespace().count());
            }
        }
    }
});
