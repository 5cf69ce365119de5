pub mod config;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

use services::DiagnosisService;
use std::sync::Arc;

/// Shared application state: the read-only prediction pipeline.
#[derive(Clone)]
pub struct AppState {
    pub diagnosis: Arc<DiagnosisService>,
}

impl AppState {
    pub fn new(diagnosis: Arc<DiagnosisService>) -> Self {
        Self { diagnosis }
    }
}
