//! Classifier abstraction.
//!
//! The web layer only needs "feature vector in, disease label out"; the
//! concrete model is chosen at startup and shared read-only.

pub mod linear;
pub mod mock;

pub use linear::LinearModel;
pub use mock::MockPredictor;

use crate::models::FeatureVector;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictorError {
    #[error("Expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Prediction failed: {0}")]
    Internal(String),
}

/// A pre-trained classifier consumed as a black box.
pub trait Predictor: Send + Sync {
    /// Number of features the model was trained on.
    fn n_features(&self) -> usize;

    /// Predict a single disease label.
    fn predict(&self, features: &FeatureVector) -> Result<String, PredictorError>;
}

impl From<PredictorError> for service_core::error::AppError {
    fn from(err: PredictorError) -> Self {
        service_core::error::AppError::InternalError(anyhow::Error::new(err))
    }
}
