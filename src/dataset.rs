//! Loading and ownership of the organization dataset.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use thiserror::Error;

use crate::filter::sort_case_insensitive;
use crate::types::{CATEGORIES, OrgRecord};

/// Errors that can occur while loading the dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse dataset file {path} as JSON")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("dataset file {path} must contain a top-level JSON array")]
    NotAnArray { path: PathBuf },
}

/// The in-memory record collection, in dataset order.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<OrgRecord>,
}

impl Dataset {
    /// Wrap an existing record collection.
    #[must_use]
    pub fn new(records: Vec<OrgRecord>) -> Self {
        Self { records }
    }

    /// Load the dataset from a JSON file containing an array of objects.
    ///
    /// Entries that are not objects are skipped, as are non-string field
    /// values; no further validation is performed.
    ///
    /// # Errors
    ///
    /// Returns an error when the file cannot be read, is not valid JSON, or
    /// its top-level value is not an array.
    pub fn load(path: &Path) -> Result<Self, DatasetError> {
        let text = fs::read_to_string(path).map_err(|source| DatasetError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value: Value =
            serde_json::from_str(&text).map_err(|source| DatasetError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        let Value::Array(entries) = value else {
            return Err(DatasetError::NotAnArray {
                path: path.to_path_buf(),
            });
        };

        let records = entries
            .iter()
            .filter_map(Value::as_object)
            .map(OrgRecord::from_object)
            .collect();

        Ok(Self { records })
    }

    /// All records in their original order.
    #[must_use]
    pub fn records(&self) -> &[OrgRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Derive the category trigger list from the dataset: every comma
    /// separated piece of every record's `Categories` value, trimmed,
    /// deduplicated, and sorted case-insensitively.
    #[must_use]
    pub fn derive_categories(&self) -> Vec<String> {
        let mut seen = std::collections::BTreeSet::new();
        for record in &self.records {
            for piece in record.field_or_empty(CATEGORIES).split(',') {
                let trimmed = piece.trim();
                if !trimmed.is_empty() {
                    seen.insert(trimmed.to_string());
                }
            }
        }
        let mut categories: Vec<String> = seen.into_iter().collect();
        sort_case_insensitive(&mut categories);
        categories
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_dataset(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write dataset");
        file
    }

    #[test]
    fn load_keeps_records_in_file_order() {
        let file = write_dataset(
            r#"[
                {"Organization Name": "Beta", "Categories": "Food"},
                {"Organization Name": "Alpha", "Categories": "Housing"}
            ]"#,
        );

        let dataset = Dataset::load(file.path()).expect("load");
        assert_eq!(dataset.len(), 2);
        assert_eq!(
            dataset.records()[0].field("Organization Name"),
            Some("Beta")
        );
    }

    #[test]
    fn load_rejects_non_array_documents() {
        let file = write_dataset(r#"{"Organization Name": "Acme"}"#);
        let err = Dataset::load(file.path()).unwrap_err();
        assert!(matches!(err, DatasetError::NotAnArray { .. }));
    }

    #[test]
    fn load_reports_missing_files() {
        let err = Dataset::load(Path::new("/nonexistent/orgs.json")).unwrap_err();
        assert!(matches!(err, DatasetError::Read { .. }));
    }

    #[test]
    fn non_object_entries_are_skipped() {
        let file = write_dataset(r#"[{"Organization Name": "Acme"}, "stray", 7]"#);
        let dataset = Dataset::load(file.path()).expect("load");
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn derived_categories_are_split_trimmed_and_sorted() {
        let dataset = Dataset::new(vec![
            OrgRecord::from_pairs([("Categories", "Housing, Utilities ")]),
            OrgRecord::from_pairs([("Categories", "food")]),
            OrgRecord::from_pairs([("Categories", "Housing,")]),
        ]);
        assert_eq!(dataset.derive_categories(), vec!["food", "Housing", "Utilities"]);
    }
}
