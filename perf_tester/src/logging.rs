//!
//! The logging configuration.
//!

use std::path::Path;
use std::path::PathBuf;

use tracing::Dispatch;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

///
/// The logging configuration.
///
/// Turned into a dispatcher which the caller installs for the scope of a run,
/// so that nothing is configured process-wide.
///
#[derive(Debug, Clone)]
pub struct Logging {
    /// The maximal level of recorded events.
    pub level: Level,
    /// The log file, or `stderr` if unset.
    pub path: Option<PathBuf>,
}

impl Logging {
    ///
    /// Creates the configuration from the command line flags.
    ///
    /// `debug` takes precedence over `quiet`.
    ///
    pub fn new(debug: bool, quiet: bool, path: Option<PathBuf>) -> Self {
        let level = if debug {
            Level::DEBUG
        } else if quiet {
            Level::WARN
        } else {
            Level::INFO
        };
        Self { level, path }
    }

    ///
    /// Returns the event filter for the tester crates.
    ///
    pub fn filter(&self) -> EnvFilter {
        let level = self.level.to_string().to_lowercase();
        EnvFilter::try_new(format!("perf_tester={level},perf_report={level}"))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    ///
    /// Builds the dispatcher.
    ///
    /// The returned guard must be kept alive until the last event is written.
    ///
    pub fn dispatch(&self) -> anyhow::Result<(Dispatch, Option<WorkerGuard>)> {
        let builder = tracing_subscriber::fmt()
            .with_env_filter(self.filter())
            .with_ansi(false)
            .with_target(false);

        match self.path.as_ref() {
            Some(path) => {
                let file_name = path
                    .file_name()
                    .ok_or_else(|| anyhow::anyhow!("Log file path {path:?} has no file name"))?;
                let directory = match path.parent() {
                    Some(parent) if !parent.as_os_str().is_empty() => parent,
                    _ => Path::new("."),
                };
                std::fs::create_dir_all(directory).map_err(|error| {
                    anyhow::anyhow!("Log directory {directory:?} creating: {error}")
                })?;

                let appender = tracing_appender::rolling::never(directory, file_name);
                let (writer, guard) = tracing_appender::non_blocking(appender);
                let subscriber = builder.with_writer(writer).finish();
                Ok((Dispatch::new(subscriber), Some(guard)))
            }
            None => {
                let subscriber = builder.with_writer(std::io::stderr).finish();
                Ok((Dispatch::new(subscriber), None))
            }
        }
    }
}
