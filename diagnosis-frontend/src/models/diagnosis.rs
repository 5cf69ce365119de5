use serde::Serialize;

pub const EMPTY_INPUT_MESSAGE: &str = "Please enter at least one symptom.";
pub const FEATURE_MISMATCH_MESSAGE: &str =
    "Feature mismatch. Training data and model are not aligned.";

/// Everything shown for a predicted disease.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiseaseProfile {
    pub disease: String,
    pub description: String,
    pub precautions: String,
    pub medications: String,
    pub workouts: String,
    pub diets: String,
}

/// Recoverable conditions reported inline on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advisory {
    EmptyInput,
    FeatureMismatch { expected: usize, actual: usize },
}

impl Advisory {
    pub fn message(&self) -> &'static str {
        match self {
            Advisory::EmptyInput => EMPTY_INPUT_MESSAGE,
            Advisory::FeatureMismatch { .. } => FEATURE_MISMATCH_MESSAGE,
        }
    }

    /// Label value for the `predictions_total` counter.
    pub fn outcome(&self) -> &'static str {
        match self {
            Advisory::EmptyInput => "empty_input",
            Advisory::FeatureMismatch { .. } => "feature_mismatch",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosisOutcome {
    Advisory(Advisory),
    Predicted(DiseaseProfile),
}
