//! Property tests for CSV serialization.

use proptest::prelude::*;

use paintshop::domain::services::escape_cell;
use paintshop::{to_csv, HeaderMapping, Record};

fn cell() -> impl Strategy<Value = String> {
    "[a-z ,\"]{0,12}"
}

/// Split one CSV line on commas outside quotes
fn split_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    for c in line.chars() {
        match c {
            '"' => {
                quoted = !quoted;
                current.push(c);
            }
            ',' if !quoted => cells.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    cells.push(current);
    cells
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: one line per record plus the header, each newline-terminated.
    #[test]
    fn property_line_count(rows in prop::collection::vec((cell(), cell()), 1..10)) {
        let headers = HeaderMapping::new().column("a", "A").column("b", "B");
        let records: Vec<Record> = rows
            .iter()
            .map(|(a, b)| Record::new().with("a", a.as_str()).with("b", b.as_str()))
            .collect();

        let csv = to_csv(&records, &headers).unwrap();

        prop_assert!(csv.ends_with('\n'));
        prop_assert_eq!(csv.lines().count(), records.len() + 1);
        prop_assert_eq!(csv.lines().next(), Some("A,B"));
    }

    /// PROPERTY: every row has as many cells as there are headers.
    #[test]
    fn property_rows_keep_column_count(rows in prop::collection::vec((cell(), cell(), cell()), 1..8)) {
        let headers = HeaderMapping::new()
            .column("a", "A")
            .column("b", "B")
            .column("c", "C");
        let records: Vec<Record> = rows
            .iter()
            .map(|(a, b, c)| {
                Record::new()
                    .with("a", a.as_str())
                    .with("b", b.as_str())
                    .with("c", c.as_str())
            })
            .collect();

        let csv = to_csv(&records, &headers).unwrap();

        for line in csv.lines().skip(1) {
            prop_assert_eq!(split_line(line).len(), 3, "line {:?}", line);
        }
    }

    /// PROPERTY: cells with a comma are quoted; quotes are always doubled.
    #[test]
    fn property_escape_cell(value in cell()) {
        let escaped = escape_cell(&value);
        let doubled = value.replace('"', "\"\"");
        if value.contains(',') {
            prop_assert_eq!(escaped, format!("\"{}\"", doubled));
        } else {
            prop_assert_eq!(escaped, doubled);
        }
    }

    /// PROPERTY: an empty record list never yields an artifact.
    #[test]
    fn property_empty_is_nothing(labels in prop::collection::vec("[A-Z]{1,4}", 0..5)) {
        let headers: HeaderMapping = labels.iter().map(|l| (l.to_lowercase(), l.clone())).collect();
        prop_assert_eq!(to_csv(&[], &headers), None);
    }
}
