use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use thiserror::Error;

use super::model::{AdDataset, Observation};

// ---------------------------------------------------------------------------
// Loader errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("unsupported file extension: .{0}")]
    UnsupportedExtension(String),
    #[error("file contains no observations")]
    EmptyTable,
}

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load the advertising table from a file. Dispatch by extension.
///
/// Supported formats:
/// * `.csv`  – header row with `TV, Radio, Newspaper, Sales` columns; the
///             leading index column (and any other extra column) is discarded
/// * `.json` – records-oriented array of objects with the same keys
///             (the shape of `df.to_json(orient='records')`)
pub fn load_file(path: &Path) -> Result<AdDataset> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => {
            let file = File::open(path).context("opening CSV")?;
            from_csv_reader(file)
        }
        "json" => {
            let text = std::fs::read_to_string(path).context("reading JSON file")?;
            from_json_str(&text)
        }
        other => Err(LoadError::UnsupportedExtension(other.to_string()).into()),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// Parse CSV from any reader. Columns are matched by header name, so the
/// source file's unnamed index column is skipped without special handling.
pub fn from_csv_reader(reader: impl Read) -> Result<AdDataset> {
    let mut csv_reader = csv::Reader::from_reader(reader);

    let mut observations = Vec::new();
    for (row_no, result) in csv_reader.deserialize::<Observation>().enumerate() {
        let obs = result.with_context(|| format!("CSV row {row_no}"))?;
        observations.push(obs);
    }

    non_empty(observations)
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Parse a records-oriented JSON array:
///
/// ```json
/// [
///   { "TV": 230.1, "Radio": 37.8, "Newspaper": 69.2, "Sales": 22.1 },
///   ...
/// ]
/// ```
pub fn from_json_str(text: &str) -> Result<AdDataset> {
    let observations: Vec<Observation> =
        serde_json::from_str(text).context("parsing JSON records")?;
    non_empty(observations)
}

fn non_empty(observations: Vec<Observation>) -> Result<AdDataset> {
    if observations.is_empty() {
        return Err(LoadError::EmptyTable.into());
    }
    Ok(AdDataset::new(observations))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CSV: &str = "\
,TV,Radio,Newspaper,Sales
1,230.1,37.8,69.2,22.1
2,44.5,39.3,45.1,10.4
3,17.2,45.9,69.3,9.3
";

    #[test]
    fn csv_index_column_is_discarded() {
        let ds = from_csv_reader(CSV.as_bytes()).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(ds.observations[0].tv, 230.1);
        assert_eq!(ds.observations[1].newspaper, 45.1);
        assert_eq!(ds.observations[2].sales, 9.3);
    }

    #[test]
    fn csv_without_index_column_also_loads() {
        let csv = "TV,Radio,Newspaper,Sales\n100.0,1.0,2.0,10.0\n";
        let ds = from_csv_reader(csv.as_bytes()).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.observations[0].tv, 100.0);
    }

    #[test]
    fn csv_bad_number_reports_row() {
        let csv = ",TV,Radio,Newspaper,Sales\n1,abc,1.0,2.0,3.0\n";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("CSV row 0"));
    }

    #[test]
    fn empty_table_is_rejected() {
        let csv = ",TV,Radio,Newspaper,Sales\n";
        let err = from_csv_reader(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::EmptyTable)
        ));
    }

    #[test]
    fn json_records_load() {
        let json = r#"[
            { "TV": 230.1, "Radio": 37.8, "Newspaper": 69.2, "Sales": 22.1 },
            { "TV": 44.5, "Radio": 39.3, "Newspaper": 45.1, "Sales": 10.4 }
        ]"#;
        let ds = from_json_str(json).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.observations[1].sales, 10.4);
    }

    #[test]
    fn unsupported_extension_is_rejected() {
        let err = load_file(Path::new("Advertising.parquet")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<LoadError>(),
            Some(LoadError::UnsupportedExtension(ext)) if ext == "parquet"
        ));
    }
}
