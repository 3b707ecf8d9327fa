#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(report) = procbench::fuzzing::parse_report_input(data) {
        if let Ok(encoded) = serde_json::to_vec(&report) {
            debug_assert!(procbench::fuzzing::parse_report_input(&encoded).is_ok());
        }
    }
});
