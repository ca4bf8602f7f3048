//! OpenTelemetry-based observability with file-based trace export.
//!
//! Hosts that want traces of the widget's event handling, moves and renders
//! call [`init_tracing`] once. Spans flow through `tracing-opentelemetry`
//! into an OpenTelemetry SDK provider whose exporter appends one OTLP JSON
//! document per batch to a trace file.
//!
//! ```text
//! tracing spans → tracing-opentelemetry → SDK TracerProvider → JsonLinesExporter → trace file
//! ```
//!
//! # Configuration
//!
//! The filter level comes from [`TracingConfig::level`] (any `EnvFilter`
//! directive), defaulting to `"info"`.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - `exporter`: OTLP JSON-lines span exporter

mod exporter;
pub mod init;

pub use init::{init_tracing, TracingConfig};
