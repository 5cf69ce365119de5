use diagnosis_frontend::config::get_configuration;
use diagnosis_frontend::services::metrics::init_metrics;
use diagnosis_frontend::startup::Application;
use dotenvy::dotenv;
use service_core::observability::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    let configuration = get_configuration().map_err(|e| {
        eprintln!("Failed to read configuration: {}", e);
        anyhow::anyhow!("Configuration error: {}", e)
    })?;

    init_tracing("diagnosis-frontend", &configuration.telemetry);
    init_metrics();

    let application = Application::build(configuration)
        .await
        .map_err(|e| anyhow::anyhow!("Startup failed: {}", e))?;

    application.run_until_stopped().await.map_err(|e| {
        tracing::error!("Server error: {}", e);
        anyhow::anyhow!("Server error: {}", e)
    })?;

    Ok(())
}
