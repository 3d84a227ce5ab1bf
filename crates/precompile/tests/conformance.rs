//! Runs the checked-in CSV fixtures through the byte buffer calling convention.
use bls12_precompile::{
    bls12_381_const::{PREALLOCATE_FOR_ERROR_BYTES, PREALLOCATE_FOR_RESULT_BYTES},
    perform_operation, Operation,
};
use fixtures::{find_all_csv_fixtures, load_fixtures, FixtureRow};
use std::path::{Path, PathBuf};

fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn g1_add_rows() -> Vec<FixtureRow> {
    load_fixtures(&fixture_dir().join("g1_add.csv")).unwrap()
}

fn check_row(row: &FixtureRow) {
    let mut output = [0u8; PREALLOCATE_FOR_RESULT_BYTES];
    let mut error = [0u8; PREALLOCATE_FOR_ERROR_BYTES];
    let outcome = perform_operation(Operation::G1Add as u8, &row.input, &mut output, &mut error);

    if !outcome.is_success() {
        let message = std::str::from_utf8(&error[..outcome.error_len]).unwrap();
        assert_eq!(message, row.notes, "line {}", row.line);
        assert_eq!(outcome.output_len, 0, "line {}", row.line);
    } else {
        assert_eq!(
            Some(&output[..outcome.output_len]),
            row.expected_output.as_deref(),
            "line {}: {}",
            row.line,
            row.notes
        );
    }
}

#[test]
fn g1_add_fixtures() {
    let rows = g1_add_rows();
    assert!(rows.iter().any(FixtureRow::expects_failure));
    assert!(rows.iter().any(|row| !row.expects_failure()));
    for row in &rows {
        check_row(row);
    }
}

#[test]
fn failing_rows_fail_and_passing_rows_pass() {
    let selector = Operation::G1Add.selector();
    let mut output = [0u8; PREALLOCATE_FOR_RESULT_BYTES];
    let mut error = [0u8; PREALLOCATE_FOR_ERROR_BYTES];
    for row in g1_add_rows() {
        let outcome = perform_operation(selector, &row.input, &mut output, &mut error);
        assert_eq!(outcome.is_success(), !row.expects_failure(), "line {}", row.line);
    }
}

#[test]
fn every_fixture_file_parses() {
    let files = find_all_csv_fixtures(&fixture_dir());
    assert!(!files.is_empty());
    for file in files {
        let rows = load_fixtures(&file).unwrap();
        assert!(!rows.is_empty(), "{}", file.display());
    }
}
