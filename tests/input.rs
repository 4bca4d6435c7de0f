use csvbar::input::{self, InputError};
use std::fs;
use tempfile::tempdir;

#[test]
fn load_csv_file_from_disk() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("sales.csv");
    fs::write(&path, "region,q1,q2\nnorth,10,12\nsouth,-4,7\n").unwrap();

    let table = input::load_table(&path).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[0], vec!["region", "q1", "q2"]);
    assert_eq!(table[2], vec!["south", "-4", "7"]);
}

#[test]
fn quoted_fields_keep_their_commas() {
    let table = input::parse_csv(b"name,value\n\"Smith, J\",3\n").unwrap();
    assert_eq!(table[1][0], "Smith, J");
}

#[test]
fn non_csv_file_is_rejected_before_reading() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.json");
    fs::write(&path, "[1, 2, 3]").unwrap();

    let err = input::load_table(&path).unwrap_err();
    assert!(matches!(err, InputError::UnsupportedType { .. }));
    assert_eq!(
        err.to_string(),
        "Sorry, currently we only support csv files. Please try another file."
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = input::load_table(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, InputError::Io { .. }));
    assert!(err.to_string().contains("nope.csv"));
}

#[test]
fn bytes_with_media_type() {
    let table = input::table_from_bytes(Some("text/csv"), b"a,b\n1,2\n").unwrap();
    assert_eq!(table.len(), 2);

    let err = input::table_from_bytes(Some("text/plain"), b"a,b\n1,2\n").unwrap_err();
    assert!(matches!(err, InputError::UnsupportedType { media_type: Some(ref m) } if m == "text/plain"));
}

#[test]
fn empty_file_is_an_empty_table() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.csv");
    fs::write(&path, "").unwrap();
    assert!(input::load_table(&path).unwrap().is_empty());
}

#[test]
fn other_extensions_carry_no_media_type() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data.tsv");
    fs::write(&path, "a\tb\n1\t2\n").unwrap();

    let err = input::load_table(&path).unwrap_err();
    assert!(matches!(err, InputError::UnsupportedType { media_type: None }));
}
