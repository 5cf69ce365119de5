#![allow(dead_code)]

use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use diagnosis_frontend::config::{DataSettings, ServerSettings, Settings};
use diagnosis_frontend::services::DiagnosisService;
use diagnosis_frontend::startup::build_router;
use diagnosis_frontend::AppState;
use http_body_util::BodyExt;
use service_core::config::TelemetryConfig;
use std::path::PathBuf;
use std::sync::Arc;

pub fn crate_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn data_settings() -> DataSettings {
    DataSettings::with_dir(crate_dir().join("data"))
}

/// Settings pointing at the bundled data set, bound to an ephemeral port.
pub fn test_settings() -> Settings {
    Settings {
        server: ServerSettings {
            host: "127.0.0.1".to_string(),
            port: 0,
            static_dir: crate_dir().join("static"),
        },
        data: data_settings(),
        telemetry: TelemetryConfig::default(),
    }
}

pub fn load_service() -> Arc<DiagnosisService> {
    Arc::new(DiagnosisService::load(&data_settings()).expect("Failed to load bundled data set"))
}

pub fn router_with(service: Arc<DiagnosisService>) -> Router {
    build_router(AppState::new(service), &crate_dir().join("static"))
}

pub fn app() -> Router {
    router_with(load_service())
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub fn predict_request(symptom: &str) -> Request<Body> {
    let body = serde_urlencoded::to_string([("symptom", symptom)]).unwrap();
    Request::builder()
        .method("POST")
        .uri("/predict")
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read response body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("Response body is not UTF-8")
}
