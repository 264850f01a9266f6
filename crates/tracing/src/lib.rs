//! Tracing management for the unflatten toolkit.
//!
//! This crate wires up [tracing_subscriber] layers for stdout, journald, and
//! rolling log files, behind a small [Tracer] abstraction consumed by the CLI.
// Mostly taken from [reth](https://github.com/paradigmxyz/reth)

mod formatter;
mod layers;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};

use layers::Layers;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

// re-export tracing_subscriber so downstream crates can build filter directives
pub use tracing_subscriber;

/// Tracer for application logging.
///
/// Manages the configuration and initialization of the tracing subscriber.
pub trait Tracer {
    /// Initialize the tracing subscriber. Returns a guard for the file worker
    /// if file logging was enabled, which must be held for the lifetime of
    /// the program.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

/// Configuration for a single tracing layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Builds a new [`LayerInfo`].
    pub fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: "info".to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// The tracer for the unflatten CLI and library consumers.
///
/// Composes a stdout layer with optional journald and rolling-file layers,
/// then installs them on the global registry.
#[derive(Debug, Clone)]
pub struct UnflattenTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl UnflattenTracer {
    /// Constructs a new tracer with default stdout output and no extra layers.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), journald: None, file: None }
    }

    /// Sets the stdout layer configuration.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Enables the journald layer with the given filter.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Enables the rolling-file layer with the given configuration.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for UnflattenTracer {
    fn default() -> Self {
        Self::new()
    }
}

impl Tracer for UnflattenTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            &self.stdout.default_directive,
            &self.stdout.filters,
            self.stdout.color.clone(),
        )?;

        if let Some(filter) = self.journald {
            layers.journald(&filter)?;
        }

        let file_guard = if let Some((config, file_info)) = self.file {
            Some(layers.file(config.format, &config.filters, file_info)?)
        } else {
            None
        };

        // a failed init here means a subscriber is already installed, which
        // is legitimate in tests
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();
        Ok(file_guard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracer_initializes_with_all_layers() {
        let tracer = UnflattenTracer::new()
            .with_stdout(LayerInfo::new(
                LogFormat::Terminal,
                "debug".to_string(),
                String::new(),
                Some("never".to_string()),
            ))
            .with_file(
                LayerInfo::new(LogFormat::Json, "trace".to_string(), String::new(), None),
                FileInfo::new(
                    std::env::temp_dir().join("unflatten_tracing_test"),
                    "unflatten.log".to_string(),
                    1024 * 1024,
                    2,
                ),
            );

        let guard = tracer.init().expect("failed to initialize tracer");
        assert!(guard.is_some());
    }

    #[test]
    fn test_logfmt_file_layer_builds_with_writer() {
        let tracer = UnflattenTracer::new().with_file(
            LayerInfo::new(LogFormat::LogFmt, "debug".to_string(), String::new(), None),
            FileInfo::new(
                std::env::temp_dir().join("unflatten_tracing_logfmt_test"),
                "unflatten.log".to_string(),
                1024 * 1024,
                2,
            ),
        );

        let guard = tracer.init().expect("failed to initialize tracer");
        assert!(guard.is_some());
    }

    #[test]
    fn test_tracer_rejects_invalid_directive() {
        let tracer = UnflattenTracer::new().with_stdout(LayerInfo::new(
            LogFormat::Terminal,
            "not a directive!".to_string(),
            String::new(),
            None,
        ));

        assert!(tracer.init().is_err());
    }
}
