#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        // Fuzz YAML config parsing - this should never panic
        let _ = actionlint_config::parse_config(source, std::path::Path::new("fuzz.yaml"));
    }
});
