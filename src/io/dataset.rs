//! Read/write dataset document JSON files.
//!
//! The document is the "portable" representation of the experimental data:
//! axis labels (math text) plus named datasets of marker-styled sample
//! series. The schema is defined by `domain::Document`.

use std::fs::File;
use std::path::Path;

use crate::domain::Document;
use crate::error::AppError;

/// Read a dataset document from a JSON file.
pub fn read_document(path: &Path) -> Result<Document, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open data file '{}': {e}", path.display())))?;
    let document: Document = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid data file '{}': {e}", path.display())))?;
    Ok(document)
}

/// Write a dataset document as pretty-printed JSON.
pub fn write_document(path: &Path, document: &Document) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create data file '{}': {e}", path.display())))?;
    serde_json::to_writer_pretty(file, document)
        .map_err(|e| AppError::input(format!("Failed to write data file: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::domain::{Dataset, Experiment, MarkerHints, Samples};

    fn sample_document() -> Document {
        let experiment = Experiment {
            data: Samples {
                x: vec![0.1, 0.5, 0.9],
                y: vec![0.7, 0.3, 0.05],
            },
            matplotlib: MarkerHints {
                marker: "o".to_string(),
                fillstyle: Some("none".to_string()),
            },
        };
        let dataset = Dataset {
            experiments: BTreeMap::from([("1".to_string(), experiment)]),
        };
        Document {
            x: "(R-R_{min})/(R+1)".to_string(),
            y: "(N-N_{min})/(N+1)".to_string(),
            datasets: BTreeMap::from([("A".to_string(), dataset)]),
        }
    }

    #[test]
    fn document_round_trips_through_json() {
        let doc = sample_document();
        let path = std::env::temp_dir().join("gilliland_roundtrip_test.json");
        write_document(&path, &doc).unwrap();
        let reloaded = read_document(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(doc, reloaded);
    }

    #[test]
    fn document_parses_from_minimal_literal() {
        let json = r#"{"x":"R","y":"N","datasets":{"A":{"experiments":{"1":
            {"data":{"x":[0.5],"y":[0.3]},"matplotlib":{"marker":"o"}}}}}}"#;
        let doc: Document = serde_json::from_str(json).unwrap();
        assert_eq!(doc.x, "R");
        let ds = &doc.datasets["A"];
        let expt = &ds.experiments["1"];
        assert_eq!(expt.data.x, vec![0.5]);
        assert_eq!(expt.matplotlib.marker, "o");
        assert_eq!(expt.matplotlib.fillstyle, None);
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = read_document(Path::new("does_not_exist_gilliland.json")).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("does_not_exist_gilliland.json"));
    }

    #[test]
    fn missing_fields_fail_to_parse() {
        let json = r#"{"x":"R","datasets":{}}"#;
        let parsed: Result<Document, _> = serde_json::from_str(json);
        assert!(parsed.is_err(), "document without 'y' must not parse");
    }
}
