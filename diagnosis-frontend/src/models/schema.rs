use crate::error::DataError;
use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Ordered list of symptom names the classifier was trained on.
///
/// Built from the training table's header, minus the label column. The order
/// is the feature order of the model and never changes after startup.
#[derive(Debug, Clone)]
pub struct SymptomSchema {
    symptoms: Vec<String>,
    positions: HashMap<String, usize>,
}

impl SymptomSchema {
    /// Build a schema from symptom names in feature order.
    ///
    /// Names are trimmed and lowercased. A repeated name keeps the position of
    /// its first occurrence but still occupies its own slot.
    pub fn new<I, S>(names: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut symptoms = Vec::new();
        let mut positions = HashMap::new();

        for (index, name) in names.into_iter().enumerate() {
            let name = name.as_ref().trim().to_lowercase();
            if name.is_empty() {
                return Err(DataError::InvalidSchema(format!(
                    "column {} has an empty name",
                    index + 1
                )));
            }
            positions.entry(name.clone()).or_insert(index);
            symptoms.push(name);
        }

        if symptoms.is_empty() {
            return Err(DataError::InvalidSchema(
                "no symptom columns found".to_string(),
            ));
        }

        Ok(Self {
            symptoms,
            positions,
        })
    }

    /// Read the header row of a training table. Every column whose name is
    /// not one of `label_columns` (case-insensitive) becomes a symptom; if no
    /// label column is present all columns are used.
    pub fn from_training_reader<R, S>(reader: R, label_columns: &[S]) -> Result<Self, DataError>
    where
        R: Read,
        S: AsRef<str>,
    {
        let mut csv_reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let is_label = |header: &str| {
            label_columns
                .iter()
                .any(|label| header.eq_ignore_ascii_case(label.as_ref().trim()))
        };

        Self::new(headers.iter().filter(|h| !is_label(*h)))
    }

    pub fn load<S: AsRef<str>>(path: &Path, label_columns: &[S]) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|e| DataError::io(path, e))?;
        Self::from_training_reader(file, label_columns)
    }

    pub fn len(&self) -> usize {
        self.symptoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symptoms.is_empty()
    }

    /// Feature slot of a normalised symptom name.
    pub fn position(&self, symptom: &str) -> Option<usize> {
        self.positions.get(symptom).copied()
    }

    pub fn symptoms(&self) -> &[String] {
        &self.symptoms
    }
}
