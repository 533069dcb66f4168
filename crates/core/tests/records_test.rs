//! Tests for record loading and the plain text converter.

use gridpage_core::ReportError;
use gridpage_core::converter::TextConverter;
use gridpage_core::group_by_key;
use gridpage_core::model::{ColumnSpec, Record, load_records, sample_records};

#[test]
fn test_sample_records() {
    let records = sample_records();
    assert_eq!(records.len(), 15);
    assert_eq!(records[0], Record::new("001", "John Doe", "28", "New York"));
    assert_eq!(records[14].name, "Aiko Yamamoto");
}

#[test]
fn test_load_records_json() {
    let json = r#"[
        {"id": "001", "name": "John Doe", "age": "28", "location": "New York"},
        {"id": "002", "name": "Jane Smith", "age": "35", "group_key": "Los Angeles"}
    ]"#;
    let records = load_records(json.as_bytes()).unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].group_key, "New York");
    assert_eq!(records[1].group_key, "Los Angeles");
}

#[test]
fn test_load_records_rejects_malformed_json() {
    let err = load_records(r#"[{"id": "001"}]"#.as_bytes()).unwrap_err();
    assert!(matches!(err, ReportError::Json(_)));
}

#[test]
fn test_text_converter_spans_group_key() {
    let records = vec![
        Record::new("003", "Alex Lee", "22", "London"),
        Record::new("005", "David Kim", "25", "Seoul"),
        Record::new("006", "Sarah Turner", "27", "London"),
    ];
    let mut out = Vec::new();
    TextConverter::new(&mut out, true)
        .receive_table(&group_by_key(records), &ColumnSpec::default())
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    let expected = [
        "Location | Name | Age | User Id",
        "London | Alex Lee | 22 | 003",
        " | Sarah Turner | 27 | 006",
        "Seoul | David Kim | 25 | 005",
    ];
    assert_eq!(text.lines().collect::<Vec<_>>(), expected);
    assert!(text.ends_with('\n'));
}
