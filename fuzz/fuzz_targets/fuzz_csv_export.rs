#![no_main]

use libfuzzer_sys::fuzz_target;
use paintshop::{to_csv, HeaderMapping, Record};

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };

    let headers = HeaderMapping::new().column("a", "A").column("b", "B");
    let records: Vec<Record> = content
        .split('\n')
        .map(|line| {
            let (a, b) = line.split_once('\t').unwrap_or((line, ""));
            Record::new().with("a", a).with("b", b)
        })
        .collect();

    let csv = to_csv(&records, &headers).expect("non-empty input yields CSV");
    assert!(csv.starts_with("A,B\n"));
    assert!(csv.ends_with('\n'));

    // Arbitrary JSON rows flatten without panicking
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(content) {
        let _ = to_csv(&[Record::from_json(&value)], &headers);
    }
});
