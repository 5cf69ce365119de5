//! Disease attribute lookup tables.
//!
//! Each table is a CSV keyed by disease name, loaded once at startup and
//! shared read-only. A label missing from a table resolves to that table's
//! placeholder instead of an error.

use crate::error::DataError;
use crate::models::DiseaseProfile;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

pub const DESCRIPTION_PLACEHOLDER: &str = "Description not available.";
pub const DATA_PLACEHOLDER: &str = "Data not available";

/// Cell values treated as missing, in addition to blank cells. Matches the
/// default NA markers of pandas' CSV reader.
const MISSING_MARKERS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    let cell = cell.trim();
    cell.is_empty() || MISSING_MARKERS.contains(&cell)
}

/// Headers of exported row-index columns (`""` or `Unnamed: 0`).
fn is_unnamed(header: &str) -> bool {
    let header = header.trim();
    header.is_empty() || header.to_ascii_lowercase().starts_with("unnamed:")
}

fn find_column(headers: &csv::StringRecord, name: &str) -> Result<usize, DataError> {
    headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| DataError::MissingColumn(name.to_string()))
}

fn csv_reader<R: Read>(reader: R) -> csv::Reader<R> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader)
}

fn open(path: &Path) -> Result<File, DataError> {
    File::open(path).map_err(|e| DataError::io(path, e))
}

/// Single free-text value per disease.
///
/// The first row for a disease wins even when its value is missing.
#[derive(Debug, Clone, Default)]
pub struct DescriptionTable {
    entries: HashMap<String, Option<String>>,
}

impl DescriptionTable {
    pub fn from_reader<R: Read>(
        reader: R,
        key_column: &str,
        value_column: &str,
    ) -> Result<Self, DataError> {
        let mut csv_reader = csv_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let key_idx = find_column(&headers, key_column)?;
        let value_idx = find_column(&headers, value_column)?;

        let mut entries = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let Some(key) = record.get(key_idx).filter(|k| !is_missing(k)) else {
                continue;
            };
            let value = record
                .get(value_idx)
                .filter(|v| !is_missing(v))
                .map(str::to_string);
            entries.entry(key.to_string()).or_insert(value);
        }

        Ok(Self { entries })
    }

    pub fn load(path: &Path, key_column: &str, value_column: &str) -> Result<Self, DataError> {
        Self::from_reader(open(path)?, key_column, value_column)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn resolve(&self, disease: &str) -> String {
        match self.entries.get(disease.trim()) {
            Some(Some(description)) => description.clone(),
            _ => DESCRIPTION_PLACEHOLDER.to_string(),
        }
    }
}

/// Several value columns per disease (precautions, medications, ...).
///
/// Only the first row for a disease is kept; its non-missing values are
/// stored in column order.
#[derive(Debug, Clone, Default)]
pub struct AttributeTable {
    rows: HashMap<String, Vec<String>>,
}

impl AttributeTable {
    pub fn from_reader<R: Read>(reader: R, key_column: &str) -> Result<Self, DataError> {
        let mut csv_reader = csv_reader(reader);
        let headers = csv_reader.headers()?.clone();
        let key_idx = find_column(&headers, key_column)?;

        let value_columns: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(idx, h)| *idx != key_idx && !is_unnamed(h))
            .map(|(idx, _)| idx)
            .collect();

        let mut rows = HashMap::new();
        for record in csv_reader.records() {
            let record = record?;
            let Some(key) = record.get(key_idx).filter(|k| !is_missing(k)) else {
                continue;
            };
            if rows.contains_key(key) {
                continue;
            }
            let values: Vec<String> = value_columns
                .iter()
                .filter_map(|&idx| record.get(idx))
                .filter(|v| !is_missing(v))
                .map(str::to_string)
                .collect();
            rows.insert(key.to_string(), values);
        }

        Ok(Self { rows })
    }

    pub fn load(path: &Path, key_column: &str) -> Result<Self, DataError> {
        Self::from_reader(open(path)?, key_column)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Join the disease's values with `", "`, or the placeholder when the
    /// disease has no row.
    pub fn resolve(&self, disease: &str) -> String {
        match self.rows.get(disease.trim()) {
            Some(values) => values.join(", "),
            None => DATA_PLACEHOLDER.to_string(),
        }
    }
}

/// The five lookup tables behind a prediction.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    pub descriptions: DescriptionTable,
    pub precautions: AttributeTable,
    pub medications: AttributeTable,
    pub diets: AttributeTable,
    pub workouts: AttributeTable,
}

impl KnowledgeBase {
    pub fn resolve(&self, disease: &str) -> DiseaseProfile {
        DiseaseProfile {
            disease: disease.to_string(),
            description: self.descriptions.resolve(disease),
            precautions: self.precautions.resolve(disease),
            medications: self.medications.resolve(disease),
            workouts: self.workouts.resolve(disease),
            diets: self.diets.resolve(disease),
        }
    }
}
