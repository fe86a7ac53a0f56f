#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(value) = std::str::from_utf8(data) {
        // Date arguments must be rejected, not panic
        let _ = paintshop::presentation::parse_date(value);
    }
});
