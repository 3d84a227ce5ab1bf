use crate::FixtureError;
use std::{fs, path::Path};

/// Single conformance case.
///
/// An empty `result` column means the call must fail, in which case `notes` holds the exact
/// error message. For success rows `notes` is a free form description.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureRow {
    /// One based line number in the source file.
    pub line: usize,
    /// Call input bytes.
    pub input: Vec<u8>,
    /// Expected output bytes, `None` if the call must fail.
    pub expected_output: Option<Vec<u8>>,
    /// Expected gas. Carried for reference only.
    pub expected_gas: Option<u64>,
    /// Description, or the expected error message for failing rows.
    pub notes: String,
}

impl FixtureRow {
    /// Returns `true` if the row describes a failing call.
    #[inline]
    pub fn expects_failure(&self) -> bool {
        self.expected_output.is_none()
    }
}

/// Parses fixture rows from CSV content.
///
/// Each line is split into at most four fields, so the notes column may itself contain commas.
/// Blank lines and the `input,...` header row are skipped.
pub fn parse_fixtures(content: &str) -> Result<Vec<FixtureRow>, FixtureError> {
    let mut rows = Vec::new();
    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        let mut fields = line.splitn(4, ',');
        let mut next = |field: &'static str| {
            fields.next().ok_or(FixtureError::MissingField {
                line: line_no,
                field,
            })
        };
        let input = next("input")?;
        if input == "input" {
            continue;
        }
        let result = next("result")?;
        let gas = next("gas")?;
        // Notes may be left off entirely for success rows.
        let notes = fields.next().unwrap_or_default();

        let expected_output = if result.trim().is_empty() {
            None
        } else {
            Some(decode_hex(line_no, "result", result)?)
        };
        let gas = gas.trim();
        let expected_gas = if gas.is_empty() {
            None
        } else {
            Some(gas.parse().map_err(|source| FixtureError::InvalidGas {
                line: line_no,
                source,
            })?)
        };

        rows.push(FixtureRow {
            line: line_no,
            input: decode_hex(line_no, "input", input)?,
            expected_output,
            expected_gas,
            notes: notes.to_string(),
        });
    }
    Ok(rows)
}

/// Reads and parses a fixture file.
pub fn load_fixtures(path: &Path) -> Result<Vec<FixtureRow>, FixtureError> {
    let content = fs::read_to_string(path).map_err(|source| FixtureError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_fixtures(&content)
}

fn decode_hex(line: usize, field: &'static str, value: &str) -> Result<Vec<u8>, FixtureError> {
    let value = value.trim();
    let value = value.strip_prefix("0x").unwrap_or(value);
    hex::decode(value).map_err(|source| FixtureError::InvalidHex {
        line,
        field,
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_and_failure_rows() {
        let content = "input,result,gas,notes\n\
            0x0102,0xaabb,375,bls_g1add_g1+p1\n\
            \n\
            0304,,375,invalid input parameters, point is not on curve\n";
        let rows = parse_fixtures(content).unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(
            rows[0],
            FixtureRow {
                line: 2,
                input: vec![1, 2],
                expected_output: Some(vec![0xaa, 0xbb]),
                expected_gas: Some(375),
                notes: "bls_g1add_g1+p1".to_string(),
            }
        );
        assert!(!rows[0].expects_failure());

        assert_eq!(rows[1].line, 4);
        assert_eq!(rows[1].input, [3, 4]);
        assert!(rows[1].expects_failure());
        assert_eq!(rows[1].notes, "invalid input parameters, point is not on curve");
    }

    #[test]
    fn empty_input_and_gas_are_allowed() {
        let rows = parse_fixtures(",,,empty input\r\n").unwrap();
        assert_eq!(rows[0].input, Vec::<u8>::new());
        assert_eq!(rows[0].expected_gas, None);
        assert!(rows[0].expects_failure());
    }

    #[test]
    fn missing_notes_column_is_empty() {
        let rows = parse_fixtures("00,00,1").unwrap();
        assert_eq!(rows[0].notes, "");
    }

    #[test]
    fn rejects_malformed_rows() {
        assert!(matches!(
            parse_fixtures("00"),
            Err(FixtureError::MissingField {
                line: 1,
                field: "result"
            })
        ));
        assert!(matches!(
            parse_fixtures("input,result,gas,notes\nzz,,1,x"),
            Err(FixtureError::InvalidHex {
                line: 2,
                field: "input",
                ..
            })
        ));
        assert!(matches!(
            parse_fixtures("00,00,lots,x"),
            Err(FixtureError::InvalidGas { line: 1, .. })
        ));
    }

    #[test]
    fn load_reports_missing_file() {
        let err = load_fixtures(Path::new("no/such/fixture.csv")).unwrap_err();
        assert!(matches!(err, FixtureError::Io { .. }));
        assert!(err.to_string().starts_with("failed to read no/such/fixture.csv"));
    }
}
