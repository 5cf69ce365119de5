//! Stub predictor for tests and model-less runs.

use super::{Predictor, PredictorError};
use crate::models::FeatureVector;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Always answers with the same label and counts how often it was asked.
pub struct MockPredictor {
    label: String,
    n_features: usize,
    calls: AtomicUsize,
}

impl MockPredictor {
    pub fn new(label: impl Into<String>, n_features: usize) -> Self {
        Self {
            label: label.into(),
            n_features,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Predictor for MockPredictor {
    fn n_features(&self) -> usize {
        self.n_features
    }

    fn predict(&self, features: &FeatureVector) -> Result<String, PredictorError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if features.len() != self.n_features {
            return Err(PredictorError::DimensionMismatch {
                expected: self.n_features,
                actual: features.len(),
            });
        }

        Ok(self.label.clone())
    }
}
