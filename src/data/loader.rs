use std::io::Read;
use std::path::Path;

use serde_json::Value as JsonValue;
use thiserror::Error;

use super::model::{LaunchDataset, LaunchRecord, Outcome};

// Required CSV header columns, as written by the upstream export.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_CLASS: &str = "class";

// ---------------------------------------------------------------------------
// LoadError
// ---------------------------------------------------------------------------

/// Load-time failures. All of these are fatal: the dashboard cannot start
/// without a valid dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to open {path}: {source}")]
    Open {
        path: String,
        source: std::io::Error,
    },

    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),

    #[error("missing required column '{0}'")]
    MissingColumn(&'static str),

    #[error("file contains no launch records")]
    Empty,

    #[error("row {row}: '{value}' is not a valid payload mass")]
    InvalidPayload { row: usize, value: String },

    #[error("row {row}: class value '{value}' is outside {{0, 1}}")]
    InvalidOutcome { row: usize, value: String },

    #[error("row {row}: missing or invalid field '{field}'")]
    InvalidField { row: usize, field: &'static str },

    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a launch-records dataset from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `Launch Site`, `Payload Mass (kg)`, `class`
/// * `.json` – `[{ "launch_site": "...", "payload_mass_kg": 500.0, "class": 1 }, ...]`
pub fn load_file(path: &Path) -> Result<LaunchDataset, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        path: path.display().to_string(),
        source,
    })?;

    match ext.as_str() {
        "csv" => read_csv(file),
        "json" => read_json(file),
        other => Err(LoadError::UnsupportedExtension(other.to_string())),
    }
}

// ---------------------------------------------------------------------------
// CSV reader
// ---------------------------------------------------------------------------

/// Parse launch records from CSV. Columns beyond the three required ones
/// (flight number, booster version, ...) are ignored.
pub fn read_csv<R: Read>(input: R) -> Result<LaunchDataset, LoadError> {
    let mut reader = csv::Reader::from_reader(input);
    let headers = reader.headers()?.clone();

    let col_index = |name: &'static str| {
        headers
            .iter()
            .position(|h| h == name)
            .ok_or(LoadError::MissingColumn(name))
    };
    let site_idx = col_index(COL_SITE)?;
    let payload_idx = col_index(COL_PAYLOAD)?;
    let class_idx = col_index(COL_CLASS)?;

    let mut records = Vec::new();

    for (row_no, result) in reader.records().enumerate() {
        let record = result?;

        let site = record
            .get(site_idx)
            .filter(|s| !s.is_empty())
            .ok_or(LoadError::InvalidField {
                row: row_no,
                field: COL_SITE,
            })?
            .to_string();

        let payload_raw = record.get(payload_idx).unwrap_or("");
        let payload_mass_kg =
            payload_raw
                .trim()
                .parse::<f64>()
                .map_err(|_| LoadError::InvalidPayload {
                    row: row_no,
                    value: payload_raw.to_string(),
                })?;

        let class_raw = record.get(class_idx).unwrap_or("");
        let outcome = class_raw
            .trim()
            .parse::<i64>()
            .ok()
            .and_then(Outcome::from_class)
            .ok_or_else(|| LoadError::InvalidOutcome {
                row: row_no,
                value: class_raw.to_string(),
            })?;

        records.push(LaunchRecord {
            site,
            payload_mass_kg,
            outcome,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}

// ---------------------------------------------------------------------------
// JSON reader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented):
///
/// ```json
/// [
///   { "launch_site": "CCAFS LC-40", "payload_mass_kg": 500.0, "class": 1 },
///   ...
/// ]
/// ```
pub fn read_json<R: Read>(mut input: R) -> Result<LaunchDataset, LoadError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    let root: JsonValue = serde_json::from_str(&text)?;

    let rows = root.as_array().ok_or(LoadError::InvalidField {
        row: 0,
        field: "top-level array",
    })?;

    let mut records = Vec::with_capacity(rows.len());

    for (row_no, row) in rows.iter().enumerate() {
        let obj = row.as_object().ok_or(LoadError::InvalidField {
            row: row_no,
            field: "record object",
        })?;

        let site = obj
            .get("launch_site")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .ok_or(LoadError::InvalidField {
                row: row_no,
                field: "launch_site",
            })?
            .to_string();

        let payload_mass_kg = obj
            .get("payload_mass_kg")
            .and_then(|v| v.as_f64())
            .ok_or(LoadError::InvalidField {
                row: row_no,
                field: "payload_mass_kg",
            })?;

        let class_val = obj.get("class").ok_or(LoadError::InvalidField {
            row: row_no,
            field: "class",
        })?;
        let outcome = class_val
            .as_i64()
            .and_then(Outcome::from_class)
            .ok_or_else(|| LoadError::InvalidOutcome {
                row: row_no,
                value: class_val.to_string(),
            })?;

        records.push(LaunchRecord {
            site,
            payload_mass_kg,
            outcome,
        });
    }

    if records.is_empty() {
        return Err(LoadError::Empty);
    }
    Ok(LaunchDataset::from_records(records))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,Payload Mass (kg),class
1,CCAFS LC-40,500,1
2,CCAFS LC-40,3000,0
3,KSC LC-39A,7000,1
";

    #[test]
    fn csv_parses_required_columns_and_ignores_extras() {
        let ds = read_csv(SAMPLE_CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.sites, vec!["CCAFS LC-40", "KSC LC-39A"]);
        assert_eq!(ds.payload_min, 500.0);
        assert_eq!(ds.payload_max, 7000.0);
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn csv_missing_required_column_fails() {
        let csv = "Launch Site,class\nCCAFS LC-40,1\n";
        match read_csv(csv.as_bytes()) {
            Err(LoadError::MissingColumn(col)) => assert_eq!(col, COL_PAYLOAD),
            other => panic!("expected MissingColumn, got {other:?}"),
        }
    }

    #[test]
    fn csv_with_no_data_rows_fails() {
        let csv = "Launch Site,Payload Mass (kg),class\n";
        assert!(matches!(read_csv(csv.as_bytes()), Err(LoadError::Empty)));
    }

    #[test]
    fn csv_outcome_outside_binary_domain_is_an_error_not_a_skip() {
        let csv = "Launch Site,Payload Mass (kg),class\nCCAFS LC-40,500,2\n";
        match read_csv(csv.as_bytes()) {
            Err(LoadError::InvalidOutcome { row, value }) => {
                assert_eq!(row, 0);
                assert_eq!(value, "2");
            }
            other => panic!("expected InvalidOutcome, got {other:?}"),
        }
    }

    #[test]
    fn csv_non_numeric_payload_fails() {
        let csv = "Launch Site,Payload Mass (kg),class\nCCAFS LC-40,heavy,1\n";
        assert!(matches!(
            read_csv(csv.as_bytes()),
            Err(LoadError::InvalidPayload { row: 0, .. })
        ));
    }

    #[test]
    fn json_records_round_in() {
        let json = r#"[
            {"launch_site": "CCAFS LC-40", "payload_mass_kg": 500.0, "class": 1},
            {"launch_site": "KSC LC-39A", "payload_mass_kg": 7000.0, "class": 0}
        ]"#;
        let ds = read_json(json.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[1].site, "KSC LC-39A");
        assert_eq!(ds.records[1].outcome, Outcome::Failure);
    }

    #[test]
    fn json_bad_class_fails() {
        let json = r#"[{"launch_site": "CCAFS LC-40", "payload_mass_kg": 500.0, "class": 7}]"#;
        assert!(matches!(
            read_json(json.as_bytes()),
            Err(LoadError::InvalidOutcome { .. })
        ));
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("launches.parquet")).unwrap_err();
        // File::open runs first, so a nonexistent file reports Open; use a
        // real file to hit the extension check.
        let dir = std::env::temp_dir().join("launch_dash_loader_test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("launches.parquet");
        std::fs::write(&path, b"").unwrap();
        let err2 = load_file(&path).unwrap_err();
        assert!(matches!(err, LoadError::Open { .. }));
        assert!(matches!(err2, LoadError::UnsupportedExtension(ext) if ext == "parquet"));
        std::fs::remove_file(&path).ok();
    }
}
