//! Prediction metrics for diagnosis-frontend.
//!
//! HTTP request metrics come from the shared `metrics` recorder; the
//! prediction counter lives in a local Prometheus registry and is appended
//! to the same exposition.

use prometheus::{Encoder, IntCounterVec, Opts, Registry, TextEncoder};
use service_core::observability::{init_http_metrics, render_http_metrics};
use std::sync::OnceLock;

struct PredictionMetrics {
    registry: Registry,
    predictions_total: IntCounterVec,
}

static PREDICTION_METRICS: OnceLock<PredictionMetrics> = OnceLock::new();

/// Initialize metrics collection. Repeated calls are no-ops.
pub fn init_metrics() {
    init_http_metrics();

    PREDICTION_METRICS.get_or_init(|| {
        let registry = Registry::new();

        let predictions_total = IntCounterVec::new(
            Opts::new("predictions_total", "Total prediction requests by outcome"),
            &["outcome"],
        )
        .expect("Failed to create predictions_total metric");

        registry
            .register(Box::new(predictions_total.clone()))
            .expect("Failed to register predictions_total");

        PredictionMetrics {
            registry,
            predictions_total,
        }
    });
}

/// Get metrics output in Prometheus text format.
pub fn get_metrics() -> String {
    let mut output = render_http_metrics();

    if let Some(metrics) = PREDICTION_METRICS.get() {
        let encoder = TextEncoder::new();
        let metric_families = metrics.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer).ok();
        if let Ok(custom_metrics) = String::from_utf8(buffer) {
            output.push_str(&custom_metrics);
        }
    }

    output
}

/// Count one `/predict` submission.
pub fn record_prediction(outcome: &str) {
    if let Some(metrics) = PREDICTION_METRICS.get() {
        metrics.predictions_total.with_label_values(&[outcome]).inc();
    }
}
