use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::sync::OnceLock;

static METRICS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Install the Prometheus recorder backing the `metrics` facade.
///
/// Safe to call more than once; later calls reuse the first handle.
pub fn init_http_metrics() -> &'static PrometheusHandle {
    METRICS_HANDLE.get_or_init(|| match PrometheusBuilder::new().install_recorder() {
        Ok(handle) => handle,
        Err(e) => {
            // Another recorder owns the global slot; keep a detached one so rendering still works.
            tracing::warn!("Prometheus recorder not installed: {}", e);
            PrometheusBuilder::new().build_recorder().handle()
        }
    })
}

/// Render facade metrics in Prometheus text format.
pub fn render_http_metrics() -> String {
    METRICS_HANDLE
        .get()
        .map(|handle| handle.render())
        .unwrap_or_else(|| "# Metrics recorder not initialized\n".to_string())
}
