//! One-vs-rest linear classifier loaded from an exported JSON artifact.
//!
//! ```json
//! {
//!   "classes": ["Allergy", "GERD"],
//!   "n_features_in": 3,
//!   "coefficients": [[0.1, 0.0, 1.2], [0.9, 0.4, 0.0]],
//!   "intercepts": [-0.3, 0.1]
//! }
//! ```
//!
//! The predicted label is the class with the highest `w·x + b`.

use super::{Predictor, PredictorError};
use crate::error::DataError;
use crate::models::FeatureVector;
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    classes: Vec<String>,
    n_features_in: usize,
    coefficients: Vec<Vec<f64>>,
    intercepts: Vec<f64>,
}

impl LinearModel {
    pub fn new(
        classes: Vec<String>,
        n_features_in: usize,
        coefficients: Vec<Vec<f64>>,
        intercepts: Vec<f64>,
    ) -> Result<Self, DataError> {
        let model = Self {
            classes,
            n_features_in,
            coefficients,
            intercepts,
        };
        model.validate()?;
        Ok(model)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, DataError> {
        let model: LinearModel = serde_json::from_reader(reader)?;
        model.validate()?;
        Ok(model)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let file = File::open(path).map_err(|e| DataError::io(path, e))?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    fn validate(&self) -> Result<(), DataError> {
        if self.classes.is_empty() {
            return Err(DataError::InvalidModel("model has no classes".to_string()));
        }
        if self.coefficients.len() != self.classes.len() {
            return Err(DataError::InvalidModel(format!(
                "{} coefficient rows for {} classes",
                self.coefficients.len(),
                self.classes.len()
            )));
        }
        if self.intercepts.len() != self.classes.len() {
            return Err(DataError::InvalidModel(format!(
                "{} intercepts for {} classes",
                self.intercepts.len(),
                self.classes.len()
            )));
        }
        if let Some((row, width)) = self
            .coefficients
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, width)| *width != self.n_features_in)
        {
            return Err(DataError::InvalidModel(format!(
                "coefficient row {} has {} weights, expected {}",
                row, width, self.n_features_in
            )));
        }
        Ok(())
    }

    fn decision_score(&self, class: usize, features: &FeatureVector) -> f64 {
        let weights = &self.coefficients[class];
        let dot: f64 = weights
            .iter()
            .zip(features.as_slice())
            .map(|(w, &x)| w * f64::from(x))
            .sum();
        dot + self.intercepts[class]
    }
}

impl Predictor for LinearModel {
    fn n_features(&self) -> usize {
        self.n_features_in
    }

    fn predict(&self, features: &FeatureVector) -> Result<String, PredictorError> {
        if features.len() != self.n_features_in {
            return Err(PredictorError::DimensionMismatch {
                expected: self.n_features_in,
                actual: features.len(),
            });
        }

        let mut best: Option<(usize, f64)> = None;
        for class in 0..self.classes.len() {
            let score = self.decision_score(class, features);
            if score.is_nan() {
                return Err(PredictorError::Internal(format!(
                    "decision score for '{}' is NaN",
                    self.classes[class]
                )));
            }
            // Strictly greater: ties go to the earlier class.
            match best {
                Some((_, top)) if score <= top => {}
                _ => best = Some((class, score)),
            }
        }

        best.map(|(class, _)| self.classes[class].clone())
            .ok_or_else(|| PredictorError::Internal("model has no classes".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> LinearModel {
        LinearModel::new(
            vec!["Allergy".into(), "GERD".into(), "Fungal infection".into()],
            3,
            vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ],
            vec![0.0, 0.0, 0.0],
        )
        .unwrap()
    }

    #[test]
    fn picks_highest_scoring_class() {
        let label = model().predict(&FeatureVector::from(vec![0u8, 1, 0])).unwrap();
        assert_eq!(label, "GERD");
    }

    #[test]
    fn ties_resolve_to_first_class() {
        let label = model().predict(&FeatureVector::zeros(3)).unwrap();
        assert_eq!(label, "Allergy");
    }

    #[test]
    fn intercepts_shift_scores() {
        let model = LinearModel::new(
            vec!["A".into(), "B".into()],
            1,
            vec![vec![1.0], vec![0.0]],
            vec![0.0, 2.0],
        )
        .unwrap();
        assert_eq!(model.predict(&FeatureVector::from(vec![1u8])).unwrap(), "B");
    }

    #[test]
    fn wrong_width_is_reported() {
        let err = model().predict(&FeatureVector::zeros(2)).unwrap_err();
        assert!(matches!(
            err,
            PredictorError::DimensionMismatch {
                expected: 3,
                actual: 2
            }
        ));
    }

    #[test]
    fn loads_from_json() {
        let json = r#"{
            "classes": ["Allergy", "GERD"],
            "n_features_in": 2,
            "coefficients": [[0.5, 0.0], [0.0, 0.5]],
            "intercepts": [0.0, 0.1]
        }"#;
        let model = LinearModel::from_reader(json.as_bytes()).unwrap();
        assert_eq!(model.n_features(), 2);
        assert_eq!(model.classes(), &["Allergy", "GERD"]);
    }

    #[test]
    fn rejects_ragged_coefficients() {
        let json = r#"{
            "classes": ["Allergy", "GERD"],
            "n_features_in": 2,
            "coefficients": [[0.5, 0.0], [0.0]],
            "intercepts": [0.0, 0.1]
        }"#;
        let err = LinearModel::from_reader(json.as_bytes()).unwrap_err();
        assert!(matches!(err, DataError::InvalidModel(_)));
    }

    #[test]
    fn rejects_empty_model() {
        let err = LinearModel::new(vec![], 2, vec![], vec![]).unwrap_err();
        assert!(matches!(err, DataError::InvalidModel(_)));
    }
}
