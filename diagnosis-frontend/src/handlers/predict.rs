use crate::handlers::pages::IndexTemplate;
use crate::models::DiagnosisOutcome;
use crate::AppState;
use axum::{extract::State, Form};
use service_core::error::AppError;

const SYMPTOM_FIELD: &str = "symptom";

/// First `symptom` value of the form; missing reads as empty.
fn symptom_field(fields: Vec<(String, String)>) -> String {
    fields
        .into_iter()
        .find(|(name, _)| name == SYMPTOM_FIELD)
        .map(|(_, value)| value)
        .unwrap_or_default()
}

/// Re-render the home page with the outcome of the submitted symptoms.
pub async fn predict_handler(
    State(state): State<AppState>,
    Form(fields): Form<Vec<(String, String)>>,
) -> Result<IndexTemplate, AppError> {
    let symptom = symptom_field(fields);
    let outcome = state.diagnosis.diagnose(&symptom)?;

    let mut page = IndexTemplate::new();
    page.symptom = symptom;
    match outcome {
        DiagnosisOutcome::Advisory(advisory) => page.message = Some(advisory.message()),
        DiagnosisOutcome::Predicted(profile) => page.result = Some(profile),
    }

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(fields: &[(&str, &str)]) -> Vec<(String, String)> {
        fields
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn first_symptom_value_is_used() {
        let fields = pairs(&[("symptom", "itching"), ("symptom", "cough")]);
        assert_eq!(symptom_field(fields), "itching");
    }

    #[test]
    fn missing_symptom_is_empty() {
        assert_eq!(symptom_field(pairs(&[("other", "x")])), "");
    }
}
