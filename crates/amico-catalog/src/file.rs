//! Catalog served from a local export file.
//!
//! JSON exports are an array of objects; CSV exports have a header row. Every
//! entry needs an `ldn`; the dataset type is taken from its `type` field.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use amico_core::{LDN_FIELD, PHYSICS_SHORT_FIELD, Record};
use serde_json::Value;
use tracing::{debug, info};

use crate::Catalog;
use crate::error::{CatalogError, Result};
use crate::query::{DatasetQuery, Pattern};

/// Field holding the dataset type (AOD, EVNT, ...).
pub const TYPE_FIELD: &str = "type";

type Entry = BTreeMap<String, String>;

/// In-memory catalog loaded from a JSON or CSV export.
#[derive(Debug, Clone, Default)]
pub struct FileCatalog {
    source: Option<PathBuf>,
    entries: Vec<Entry>,
}

impl FileCatalog {
    /// Load a catalog export, choosing the parser by file extension.
    ///
    /// # Errors
    ///
    /// Fails when the file cannot be read or parsed, has an unknown extension,
    /// or holds an entry without `ldn`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        let entries = match extension.as_deref() {
            Some("json") => read_json(path)?,
            Some("csv") => read_csv(path)?,
            _ => {
                return Err(CatalogError::UnsupportedFormat {
                    path: path.to_path_buf(),
                });
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "loaded catalog");
        let mut catalog = Self::from_entries(entries)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Build a catalog from already-parsed entries.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::MissingField`] for an entry without `ldn`.
    pub fn from_entries(entries: Vec<BTreeMap<String, String>>) -> Result<Self> {
        for (index, entry) in entries.iter().enumerate() {
            if !entry.contains_key(LDN_FIELD) {
                return Err(CatalogError::MissingField {
                    entry: format!("#{}", index + 1),
                    field: LDN_FIELD.to_string(),
                });
            }
        }
        Ok(Self {
            source: None,
            entries,
        })
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Catalog for FileCatalog {
    fn list_datasets(&self, query: &DatasetQuery) -> Result<Vec<Record>> {
        query.validate()?;

        let mut records = Vec::new();
        for entry in &self.entries {
            if records.len() == query.limit() {
                break;
            }
            let ldn = &entry[LDN_FIELD];
            if !query.matches_ldn(ldn) {
                continue;
            }
            if let Some(wanted) = query.dataset_type()
                && entry.get(TYPE_FIELD).map(String::as_str) != Some(wanted)
            {
                continue;
            }
            records.push(project(entry, ldn, query.fields())?);
        }

        let patterns: Vec<&str> = query.patterns().iter().map(Pattern::as_str).collect();
        info!(
            patterns = %patterns.join(", "),
            results = records.len(),
            limit = query.limit(),
            "catalog query"
        );
        Ok(records)
    }
}

fn project(entry: &Entry, ldn: &str, fields: &[String]) -> Result<Record> {
    let field = |name: &str| {
        entry
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::MissingField {
                entry: ldn.to_string(),
                field: name.to_string(),
            })
    };

    let mut record = Record::new(ldn, field(PHYSICS_SHORT_FIELD)?);
    for name in fields {
        if name == LDN_FIELD || name == PHYSICS_SHORT_FIELD {
            continue;
        }
        record = record.with_field(name.clone(), field(name.as_str())?);
    }
    Ok(record)
}

fn read_json(path: &Path) -> Result<Vec<Entry>> {
    let text = fs::read_to_string(path).map_err(|error| CatalogError::io(path, error))?;
    let objects: Vec<BTreeMap<String, Value>> =
        serde_json::from_str(&text).map_err(|source| CatalogError::Json {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(objects
        .into_iter()
        .map(|object| {
            object
                .into_iter()
                .filter_map(|(key, value)| json_text(value).map(|text| (key, text)))
                .collect()
        })
        .collect())
}

/// Flatten a JSON value to the text shown for it; nulls are dropped.
fn json_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

/// Read a CSV export. Blank cells stay as empty strings; only a JSON `null`
/// makes a field absent.
fn read_csv(path: &Path) -> Result<Vec<Entry>> {
    let csv_error = |error: csv::Error| CatalogError::Csv {
        path: path.to_path_buf(),
        message: error.to_string(),
    };

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(csv_error)?;
    let headers: Vec<String> = reader
        .headers()
        .map_err(csv_error)?
        .iter()
        .map(|header| header.trim_matches('\u{feff}').to_string())
        .collect();

    let mut entries = Vec::new();
    for row in reader.records() {
        let row = row.map_err(csv_error)?;
        let entry: Entry = headers
            .iter()
            .zip(row.iter())
            .map(|(header, value)| (header.clone(), value.to_string()))
            .collect();
        entries.push(entry);
    }
    Ok(entries)
}
