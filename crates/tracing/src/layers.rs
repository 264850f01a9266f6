use std::path::PathBuf;

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{filter::Directive, EnvFilter, Layer, Registry};

use crate::formatter::LogFormat;

/// A boxed tracing [Layer].
pub(crate) type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync>;

/// An accumulator for the layers the tracer installs on the registry.
pub(crate) struct Layers {
    inner: Vec<BoxedLayer<Registry>>,
}

impl Layers {
    /// Creates a new, empty set of layers.
    pub(crate) fn new() -> Self {
        Self { inner: Vec::new() }
    }

    /// Consumes the accumulated layers.
    pub(crate) fn into_inner(self) -> Vec<BoxedLayer<Registry>> {
        self.inner
    }

    /// Adds a journald layer with the given filter.
    pub(crate) fn journald(&mut self, filter: &str) -> eyre::Result<()> {
        let journald_filter = build_env_filter(None, filter)?;
        let layer = tracing_journald::layer()?.with_filter(journald_filter).boxed();
        self.inner.push(layer);
        Ok(())
    }

    /// Adds a stdout layer with the given format, default directive, filters,
    /// and color preference.
    pub(crate) fn stdout(
        &mut self,
        format: LogFormat,
        default_directive: &str,
        filters: &str,
        color: Option<String>,
    ) -> eyre::Result<()> {
        let default_directive = default_directive.parse::<Directive>()?;
        let filter = build_env_filter(Some(default_directive), filters)?;
        self.inner.push(format.apply(filter, color, None));
        Ok(())
    }

    /// Adds a rolling-file layer, returning the worker guard that must be
    /// held for the lifetime of the program.
    pub(crate) fn file(
        &mut self,
        format: LogFormat,
        filters: &str,
        file_info: FileInfo,
    ) -> eyre::Result<FileWorkerGuard> {
        let (writer, guard) = file_info.create_log_writer()?;
        let file_filter = build_env_filter(None, filters)?;
        self.inner.push(format.apply(file_filter, None, Some(writer)));
        Ok(FileWorkerGuard::new(guard))
    }
}

/// Configuration for a rolling log file.
#[derive(Debug, Clone)]
pub struct FileInfo {
    dir: PathBuf,
    file_name: String,
    max_size_bytes: u64,
    max_files: usize,
}

impl FileInfo {
    /// Builds a new [`FileInfo`].
    pub fn new(dir: PathBuf, file_name: String, max_size_bytes: u64, max_files: usize) -> Self {
        Self { dir, file_name, max_size_bytes, max_files }
    }

    /// Creates the log directory if it is missing and returns a non-blocking
    /// writer over the rolling appender.
    fn create_log_writer(&self) -> eyre::Result<(NonBlocking, WorkerGuard)> {
        std::fs::create_dir_all(&self.dir)?;

        let appender = BasicRollingFileAppender::new(
            self.dir.join(&self.file_name),
            RollingConditionBasic::new().max_size(self.max_size_bytes),
            self.max_files,
        )?;

        Ok(tracing_appender::non_blocking(appender))
    }
}

/// A worker guard returned by the file layer.
///
/// When a guard is dropped, all events currently in-memory are flushed to the
/// log file this guard belongs to.
#[derive(Debug)]
pub struct FileWorkerGuard {
    _guard: WorkerGuard,
}

impl FileWorkerGuard {
    fn new(guard: WorkerGuard) -> Self {
        Self { _guard: guard }
    }
}

/// Builds an [EnvFilter] from the given default directive and a
/// comma-separated list of additional directives.
fn build_env_filter(default_directive: Option<Directive>, directives: &str) -> eyre::Result<EnvFilter> {
    let env_filter = if let Some(default_directive) = default_directive {
        EnvFilter::builder().with_default_directive(default_directive).from_env_lossy()
    } else {
        EnvFilter::builder().from_env_lossy()
    };

    directives
        .split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .try_fold(env_filter, |env_filter, directive| {
            Ok(env_filter.add_directive(directive.parse()?))
        })
}
