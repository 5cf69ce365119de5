//! Symptom text to disease profile.

use crate::config::DataSettings;
use crate::error::DataError;
use crate::models::{Advisory, DiagnosisOutcome, SymptomSchema};
use crate::services::knowledge_base::{AttributeTable, DescriptionTable, KnowledgeBase};
use crate::services::metrics::record_prediction;
use crate::services::predictor::{LinearModel, Predictor, PredictorError};
use crate::services::vectorizer::{SymptomVectorizer, VectorizeError};
use std::sync::Arc;

/// Encodes the submission, asks the predictor for a label and resolves the
/// label against the lookup tables. Holds no per-request state.
pub struct DiagnosisService {
    vectorizer: SymptomVectorizer,
    predictor: Arc<dyn Predictor>,
    knowledge: KnowledgeBase,
}

impl DiagnosisService {
    pub fn new(
        schema: Arc<SymptomSchema>,
        predictor: Arc<dyn Predictor>,
        knowledge: KnowledgeBase,
    ) -> Self {
        if schema.len() != predictor.n_features() {
            tracing::warn!(
                schema_len = schema.len(),
                model_features = predictor.n_features(),
                "Symptom schema and model disagree on feature count; predictions will be refused"
            );
        }

        Self {
            vectorizer: SymptomVectorizer::new(schema),
            predictor,
            knowledge,
        }
    }

    /// Load the schema, model artifact and lookup tables from disk.
    pub fn load(data: &DataSettings) -> Result<Self, DataError> {
        let schema = SymptomSchema::load(
            &data.path(&data.training_file),
            data.label_columns.as_slice(),
        )?;
        let model = LinearModel::load(&data.path(&data.model_file))?;
        let knowledge = KnowledgeBase {
            descriptions: DescriptionTable::load(
                &data.path(&data.description_file),
                &data.key_column,
                &data.description_column,
            )?,
            precautions: AttributeTable::load(&data.path(&data.precautions_file), &data.key_column)?,
            medications: AttributeTable::load(&data.path(&data.medications_file), &data.key_column)?,
            diets: AttributeTable::load(&data.path(&data.diets_file), &data.key_column)?,
            workouts: AttributeTable::load(&data.path(&data.workout_file), &data.key_column)?,
        };

        tracing::info!(
            symptoms = schema.len(),
            classes = model.classes().len(),
            descriptions = knowledge.descriptions.len(),
            precautions = knowledge.precautions.len(),
            medications = knowledge.medications.len(),
            diets = knowledge.diets.len(),
            workouts = knowledge.workouts.len(),
            "Loaded prediction data"
        );

        Ok(Self::new(Arc::new(schema), Arc::new(model), knowledge))
    }

    /// Run one submission through vectorize, predict and resolve.
    ///
    /// Blank input and a schema/model width mismatch come back as advisories;
    /// only predictor failures are errors.
    pub fn diagnose(&self, input: &str) -> Result<DiagnosisOutcome, PredictorError> {
        let vectorized = match self.vectorizer.vectorize(input) {
            Ok(v) => v,
            Err(VectorizeError::EmptyInput) => return Ok(self.advise(Advisory::EmptyInput)),
        };

        let expected = self.predictor.n_features();
        if vectorized.features.len() != expected {
            return Ok(self.advise(Advisory::FeatureMismatch {
                expected,
                actual: vectorized.features.len(),
            }));
        }

        let disease = self.predictor.predict(&vectorized.features)?;
        let profile = self.knowledge.resolve(&disease);

        tracing::debug!(recognized = vectorized.recognized, "Symptoms matched schema");
        tracing::info!(disease = %profile.disease, "Prediction completed");
        record_prediction("predicted");

        Ok(DiagnosisOutcome::Predicted(profile))
    }

    fn advise(&self, advisory: Advisory) -> DiagnosisOutcome {
        match advisory {
            Advisory::FeatureMismatch { expected, actual } => tracing::error!(
                expected,
                actual,
                "Feature vector width does not match model input"
            ),
            Advisory::EmptyInput => tracing::info!("Prediction requested without symptoms"),
        }
        record_prediction(advisory.outcome());
        DiagnosisOutcome::Advisory(advisory)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DiseaseProfile;
    use crate::services::knowledge_base::{DATA_PLACEHOLDER, DESCRIPTION_PLACEHOLDER};
    use crate::services::predictor::MockPredictor;

    const SYMPTOMS: [&str; 4] = ["itching", "skin_rash", "cough", "high_fever"];

    fn knowledge() -> KnowledgeBase {
        KnowledgeBase {
            descriptions: DescriptionTable::from_reader(
                "Disease,Description\nFungal infection,A skin condition caused by fungi.\n"
                    .as_bytes(),
                "disease",
                "description",
            )
            .unwrap(),
            precautions: AttributeTable::from_reader(
                "Disease,Precaution_1,Precaution_2\nFungal infection,bath twice,keep area dry\n"
                    .as_bytes(),
                "disease",
            )
            .unwrap(),
            ..Default::default()
        }
    }

    fn service(predictor: Arc<MockPredictor>) -> DiagnosisService {
        let schema = Arc::new(SymptomSchema::new(SYMPTOMS).unwrap());
        DiagnosisService::new(schema, predictor, knowledge())
    }

    #[test]
    fn resolves_predicted_label() {
        let predictor = Arc::new(MockPredictor::new("Fungal infection", SYMPTOMS.len()));
        let outcome = service(predictor.clone())
            .diagnose("itching, skin_rash")
            .unwrap();

        assert_eq!(
            outcome,
            DiagnosisOutcome::Predicted(DiseaseProfile {
                disease: "Fungal infection".to_string(),
                description: "A skin condition caused by fungi.".to_string(),
                precautions: "bath twice, keep area dry".to_string(),
                medications: DATA_PLACEHOLDER.to_string(),
                workouts: DATA_PLACEHOLDER.to_string(),
                diets: DATA_PLACEHOLDER.to_string(),
            })
        );
        assert_eq!(predictor.call_count(), 1);
    }

    #[test]
    fn blank_input_never_reaches_predictor() {
        let predictor = Arc::new(MockPredictor::new("Fungal infection", SYMPTOMS.len()));
        let service = service(predictor.clone());

        for input in ["", "   ", ", ,"] {
            assert_eq!(
                service.diagnose(input).unwrap(),
                DiagnosisOutcome::Advisory(Advisory::EmptyInput)
            );
        }
        assert_eq!(predictor.call_count(), 0);
    }

    #[test]
    fn width_mismatch_is_an_advisory() {
        let predictor = Arc::new(MockPredictor::new("Fungal infection", SYMPTOMS.len() + 1));
        let outcome = service(predictor.clone()).diagnose("cough").unwrap();

        assert_eq!(
            outcome,
            DiagnosisOutcome::Advisory(Advisory::FeatureMismatch {
                expected: 5,
                actual: 4
            })
        );
        assert_eq!(predictor.call_count(), 0);
    }

    #[test]
    fn unknown_label_gets_placeholders() {
        let predictor = Arc::new(MockPredictor::new("Dragon pox", SYMPTOMS.len()));
        let outcome = service(predictor).diagnose("cough").unwrap();

        let DiagnosisOutcome::Predicted(profile) = outcome else {
            panic!("expected a prediction");
        };
        assert_eq!(profile.description, DESCRIPTION_PLACEHOLDER);
        assert_eq!(profile.precautions, DATA_PLACEHOLDER);
    }
}
