//! Tracing initialization and subscriber setup.

use super::exporter;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry_sdk::resource::Resource;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name reported in the trace resource.
const SERVICE_NAME: &str = "dual-listbox";

/// Tracing configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
    /// `EnvFilter` directive, e.g. `"debug"` or `"dual_listbox=trace"`.
    pub level: Option<String>,
    /// File receiving one OTLP JSON document per exported batch.
    pub trace_file: PathBuf,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            level: None,
            trace_file: std::env::temp_dir().join("dual-listbox-otlp.json"),
        }
    }
}

/// Initializes the tracing subscriber with file-based OTLP export.
///
/// # Parameters
///
/// * `config` - Filter level and trace file location
///
/// # Initialization Behavior
///
/// - Creates the trace file's directory if it doesn't exist
/// - Silently returns if the directory cannot be created (observability is optional)
/// - Idempotent: only the first successful call installs a subscriber
///
/// # Example
///
/// ```no_run
/// use dual_listbox::observability::{init_tracing, TracingConfig};
///
/// init_tracing(&TracingConfig {
///     level: Some("debug".to_string()),
///     ..TracingConfig::default()
/// });
/// ```
pub fn init_tracing(config: &TracingConfig) {
    let level = config.level.clone().unwrap_or_else(|| "info".to_string());

    if let Some(dir) = config.trace_file.parent() {
        if std::fs::create_dir_all(dir).is_err() {
            return;
        }
    }

    let resource = Resource::new(vec![opentelemetry::KeyValue::new("service.name", SERVICE_NAME)]);
    let provider = exporter::create_tracer_provider(config.trace_file.clone(), resource);
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SERVICE_NAME));

    let _ = tracing_subscriber::registry()
        .with(EnvFilter::new(level))
        .with(otel_layer)
        .try_init();
}
