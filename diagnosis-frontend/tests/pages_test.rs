mod common;

use axum::http::{header, StatusCode};
use common::{app, body_text, get, predict_request, router_with, test_settings};
use diagnosis_frontend::models::schema::SymptomSchema;
use diagnosis_frontend::services::{DiagnosisService, KnowledgeBase, MockPredictor};
use diagnosis_frontend::services::metrics::init_metrics;
use diagnosis_frontend::startup::Application;
use service_core::middleware::REQUEST_ID_HEADER;
use std::sync::Arc;
use tower::util::ServiceExt;

#[tokio::test]
async fn informational_pages_render() {
    for (uri, heading) in [
        ("/", "Symptom Checker"),
        ("/about", "<h1>About</h1>"),
        ("/developer", "<h1>Developer</h1>"),
        ("/contact", "<h1>Contact</h1>"),
        ("/blog", "<h1>Blog</h1>"),
    ] {
        let response = app().oneshot(get(uri)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK, "{uri}");

        let content_type = response.headers()[header::CONTENT_TYPE].to_str().unwrap();
        assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");

        let body = body_text(response).await;
        assert!(body.contains(heading), "{uri} is missing {heading}");
    }
}

#[tokio::test]
async fn home_page_has_empty_form() {
    let body = body_text(app().oneshot(get("/")).await.unwrap()).await;

    assert!(body.contains(r#"name="symptom""#));
    assert!(body.contains(r#"action="/predict""#));
    assert!(!body.contains("Predicted disease"));
    assert!(!body.contains("class=\"advisory\""));
}

#[tokio::test]
async fn responses_carry_request_id_and_security_headers() {
    let response = app().oneshot(get("/about")).await.unwrap();

    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
    assert_eq!(response.headers()[header::X_CONTENT_TYPE_OPTIONS], "nosniff");
    assert_eq!(response.headers()[header::X_FRAME_OPTIONS], "DENY");
    assert!(response
        .headers()
        .contains_key(header::CONTENT_SECURITY_POLICY));
}

#[tokio::test]
async fn health_check_works() {
    let response = app().oneshot(get("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "diagnosis-frontend");
}

#[tokio::test]
async fn static_assets_are_served() {
    let response = app().oneshot(get("/static/css/style.css")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_text(response).await.contains(".advisory"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let response = app().oneshot(get("/admin")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn metrics_count_prediction_outcomes() {
    init_metrics();
    let app = app();

    app.clone()
        .oneshot(predict_request("itching"))
        .await
        .unwrap();
    app.clone().oneshot(predict_request("")).await.unwrap();

    let schema = Arc::new(SymptomSchema::new(["itching", "skin_rash"]).unwrap());
    let predictor = Arc::new(MockPredictor::new("Fungal infection", 3));
    let service = DiagnosisService::new(schema, predictor, KnowledgeBase::default());
    router_with(Arc::new(service))
        .oneshot(predict_request("itching"))
        .await
        .unwrap();

    let response = app.oneshot(get("/metrics")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_text(response).await;
    assert!(body.contains(r#"predictions_total{outcome="predicted"}"#));
    assert!(body.contains(r#"predictions_total{outcome="empty_input"}"#));
    assert!(body.contains(r#"predictions_total{outcome="feature_mismatch"}"#));
}

#[tokio::test]
async fn application_serves_over_tcp() {
    let application = Application::build(test_settings())
        .await
        .expect("Failed to build application");
    let port = application.port();
    assert_ne!(port, 0);

    tokio::spawn(async move {
        application.run_until_stopped().await.ok();
    });

    let client = reqwest::Client::new();
    let base = format!("http://127.0.0.1:{}", port);

    let response = client
        .get(format!("{}/health", base))
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());

    let response = client
        .post(format!("{}/predict", base))
        .form(&[("symptom", "itching, skin_rash")])
        .send()
        .await
        .expect("Failed to execute request");
    assert!(response.status().is_success());
    assert!(response.text().await.unwrap().contains("Fungal infection"));
}

#[tokio::test]
async fn missing_data_directory_fails_startup() {
    let mut settings = test_settings();
    settings.data.dir = common::crate_dir().join("no-such-data");

    assert!(Application::build(settings).await.is_err());
}
