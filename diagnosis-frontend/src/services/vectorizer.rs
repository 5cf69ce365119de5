//! Free-text symptom list to feature vector.

use crate::models::{FeatureVector, SymptomSchema};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum VectorizeError {
    #[error("no symptoms supplied")]
    EmptyInput,
}

/// Result of encoding one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vectorized {
    pub features: FeatureVector,
    /// Distinct schema symptoms found in the input.
    pub recognized: usize,
}

#[derive(Debug, Clone)]
pub struct SymptomVectorizer {
    schema: Arc<SymptomSchema>,
}

impl SymptomVectorizer {
    pub fn new(schema: Arc<SymptomSchema>) -> Self {
        Self { schema }
    }

    /// Encode a comma-separated symptom list.
    ///
    /// Tokens are trimmed and lowercased; tokens outside the schema are
    /// dropped. Input with no non-blank token is rejected.
    pub fn vectorize(&self, input: &str) -> Result<Vectorized, VectorizeError> {
        let tokens: Vec<String> = input
            .split(',')
            .map(|token| token.trim().to_lowercase())
            .filter(|token| !token.is_empty())
            .collect();

        if tokens.is_empty() {
            return Err(VectorizeError::EmptyInput);
        }

        let mut features = FeatureVector::zeros(self.schema.len());
        for token in &tokens {
            if let Some(index) = self.schema.position(token) {
                features.set(index);
            }
        }

        let recognized = features.ones();
        Ok(Vectorized {
            features,
            recognized,
        })
    }
}
