use clap::ValueEnum;
use std::fmt::{self, Display};
use tracing_subscriber::{registry::LookupSpan, EnvFilter, Layer};

use crate::layers::BoxedLayer;

/// Log formats supported by the tracer.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Structured JSON, one event per line.
    Json,
    /// logfmt (key=value) encoding.
    LogFmt,
    /// Human-readable terminal output.
    Terminal,
}

impl LogFormat {
    /// Applies the format to build a boxed tracing layer with the given
    /// filter and, for terminal output, color preference.
    pub(crate) fn apply<S>(
        &self,
        filter: EnvFilter,
        color: Option<String>,
        file_writer: Option<tracing_appender::non_blocking::NonBlocking>,
    ) -> BoxedLayer<S>
    where
        S: tracing::Subscriber + for<'a> LookupSpan<'a>,
    {
        let ansi = color.map_or(true, |c| c != "never") && file_writer.is_none();

        match self {
            LogFormat::Json => {
                let layer = tracing_subscriber::fmt::layer().json().with_ansi(ansi);
                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
            LogFormat::LogFmt => {
                let layer = tracing_logfmt::builder().layer();
                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
            LogFormat::Terminal => {
                let layer = tracing_subscriber::fmt::layer().with_ansi(ansi);
                if let Some(writer) = file_writer {
                    layer.with_writer(writer).with_filter(filter).boxed()
                } else {
                    layer.with_filter(filter).boxed()
                }
            }
        }
    }
}

impl Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogFormat::Json => write!(f, "json"),
            LogFormat::LogFmt => write!(f, "logfmt"),
            LogFormat::Terminal => write!(f, "terminal"),
        }
    }
}
