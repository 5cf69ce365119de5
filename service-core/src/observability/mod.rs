pub mod logging;
pub mod metrics;

pub use self::logging::init_tracing;
pub use self::metrics::{init_http_metrics, render_http_metrics};
