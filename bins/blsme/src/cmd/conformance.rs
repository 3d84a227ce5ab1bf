//! `fixtures` subcommand.
use clap::Parser;
use fixtures::{find_all_csv_fixtures, load_fixtures, FixtureError, FixtureRow};
use indicatif::{ProgressBar, ProgressDrawTarget};
use precompile::{
    bls12_381_const::{PREALLOCATE_FOR_ERROR_BYTES, PREALLOCATE_FOR_RESULT_BYTES},
    perform_operation, Operation,
};
use serde_json::json;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// `fixtures` subcommand
#[derive(Parser, Debug)]
pub struct Cmd {
    /// Path to folder or file containing the fixtures
    ///
    /// If multiple paths are specified they will be run in sequence.
    ///
    /// Folders will be searched recursively for files with the extension `.csv`.
    #[arg(required = true, num_args = 1..)]
    paths: Vec<PathBuf>,
    /// Selector of the operation the fixtures are run against
    #[arg(short, long, default_value_t = Operation::G1Add.selector())]
    selector: u8,
    /// Output outcome of every row in JSON format
    #[arg(long)]
    json: bool,
    /// Keep going after a fixture failure
    #[arg(long, alias = "no-fail-fast")]
    keep_going: bool,
}

/// Error that occurs during fixture execution
#[derive(Debug, Error)]
#[error("Path: {path}\nLine: {line}\nError: {kind}")]
pub struct TestError {
    /// Fixture file.
    pub path: String,
    /// Line of the failing row, zero if the failure is not tied to a row.
    pub line: usize,
    /// What went wrong.
    pub kind: TestErrorKind,
}

/// Specific kind of error that occurred during fixture execution
#[derive(Debug, Error)]
pub enum TestErrorKind {
    /// Output bytes differ from the expected result.
    #[error("unexpected output: got {got}, expected {expected}")]
    UnexpectedOutput {
        /// Hex of the produced output.
        got: String,
        /// Hex of the expected output.
        expected: String,
    },
    /// Call failed when it should not have, or failed with another message.
    #[error("unexpected error: got {got:?}, expected {expected:?}")]
    UnexpectedError {
        /// Produced error message.
        got: Option<String>,
        /// Expected error message.
        expected: Option<String>,
    },
    /// A failing call also reported output bytes.
    #[error("output of {0} bytes reported for a failing call")]
    OutputOnFailure(usize),
    /// The fixture file could not be loaded.
    #[error(transparent)]
    Fixture(#[from] FixtureError),
    /// Path does not exist.
    #[error("path does not exist")]
    InvalidPath,
    /// Path contains no fixtures.
    #[error("no CSV fixture files found in path")]
    NoCsvFiles,
}

/// Totals of a fixture run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Summary {
    /// Rows executed.
    pub rows: usize,
    /// Rows that did not match.
    pub failed: usize,
}

impl Cmd {
    /// Runs `fixtures` command.
    pub fn run(&self) -> Result<(), TestError> {
        let mut files = Vec::new();
        for path in &self.paths {
            if !path.exists() {
                return Err(TestError {
                    path: path.display().to_string(),
                    line: 0,
                    kind: TestErrorKind::InvalidPath,
                });
            }

            let found = find_all_csv_fixtures(path);
            if found.is_empty() {
                return Err(TestError {
                    path: path.display().to_string(),
                    line: 0,
                    kind: TestErrorKind::NoCsvFiles,
                });
            }
            files.extend(found);
        }

        let summary = self.run_files(&files)?;
        if summary.failed == 0 {
            println!("All {} fixtures passed!", summary.rows);
            Ok(())
        } else {
            println!(
                "Encountered {} errors out of {} total fixtures",
                summary.failed, summary.rows
            );
            std::process::exit(1);
        }
    }

    /// Runs every row of the given files.
    ///
    /// Without `keep_going` the first mismatch is returned as an error, otherwise mismatches are
    /// printed and counted.
    pub fn run_files(&self, files: &[PathBuf]) -> Result<Summary, TestError> {
        let mut summary = Summary::default();
        for file in files {
            let path = file.display().to_string();
            let rows = load_fixtures(file).map_err(|err| TestError {
                path: path.clone(),
                line: 0,
                kind: err.into(),
            })?;
            tracing::debug!(%path, rows = rows.len(), "loaded fixtures");

            let draw_target = if self.json {
                ProgressDrawTarget::hidden()
            } else {
                ProgressDrawTarget::stdout()
            };
            let console_bar = ProgressBar::with_draw_target(Some(rows.len() as u64), draw_target);

            for row in &rows {
                let result = check_row(self.selector, row);
                console_bar.inc(1);
                summary.rows += 1;

                if self.json {
                    print_json_outcome(file, row, &result);
                }

                if let Err(kind) = result {
                    summary.failed += 1;
                    let err = TestError {
                        path: path.clone(),
                        line: row.line,
                        kind,
                    };
                    if !self.keep_going {
                        console_bar.abandon();
                        return Err(err);
                    }
                    console_bar.println(err.to_string());
                }
            }
            console_bar.finish();
        }
        Ok(summary)
    }
}

/// Runs a single row the way a native caller would and compares the outcome.
fn check_row(selector: u8, row: &FixtureRow) -> Result<(), TestErrorKind> {
    let mut output = [0u8; PREALLOCATE_FOR_RESULT_BYTES];
    let mut error = [0u8; PREALLOCATE_FOR_ERROR_BYTES];
    let outcome = perform_operation(selector, &row.input, &mut output, &mut error);

    if !outcome.is_success() {
        let got = String::from_utf8_lossy(&error[..outcome.error_len]).into_owned();
        if row.expects_failure() && got == row.notes {
            if outcome.output_len != 0 {
                return Err(TestErrorKind::OutputOnFailure(outcome.output_len));
            }
            return Ok(());
        }
        return Err(TestErrorKind::UnexpectedError {
            got: Some(got),
            expected: row.expects_failure().then(|| row.notes.clone()),
        });
    }

    let got = &output[..outcome.output_len];
    match &row.expected_output {
        Some(expected) if expected.as_slice() == got => Ok(()),
        Some(expected) => Err(TestErrorKind::UnexpectedOutput {
            got: hex::encode(got),
            expected: hex::encode(expected),
        }),
        None => Err(TestErrorKind::UnexpectedError {
            got: None,
            expected: Some(row.notes.clone()),
        }),
    }
}

fn print_json_outcome(file: &Path, row: &FixtureRow, result: &Result<(), TestErrorKind>) {
    let json = json!({
        "path": file.display().to_string(),
        "line": row.line,
        "notes": row.notes,
        "pass": result.is_ok(),
        "error": result.as_ref().err().map(ToString::to_string),
    });
    eprintln!("{json}");
}
