//! Logger setup
//!
//! Builds the global `tracing` subscriber from [`LoggerConfig`]:
//! - Console output with color control
//! - Rolling file output in full, compact, or JSON format
//! - Level filtering through `EnvFilter`

pub mod config;
pub mod error;

pub use config::*;
pub use error::LoggerError;

use std::io::IsTerminal;

use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync>;

/// Keeps the non-blocking file writer alive. Dropping it flushes and stops
/// file output, so hold it until the process exits.
#[must_use = "dropping the guard stops file logging"]
pub struct LoggerGuard {
    _file: Option<WorkerGuard>,
}

/// Install the global subscriber described by `config`.
pub fn init_logger(config: LoggerConfig) -> Result<LoggerGuard, LoggerError> {
    config.validate()?;

    let filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    let mut layers: Vec<BoxedLayer> = Vec::with_capacity(2);
    let mut file_guard = None;

    // File layer must be registered before the console layer, otherwise span
    // fields formatted with ANSI codes end up in the file output.
    // See: https://github.com/tokio-rs/tracing/issues/1817
    if config.file.enabled {
        let (writer, guard) = file_writer(&config.file)?;
        layers.push(file_layer(config.file.format, writer));
        file_guard = Some(guard);
    }

    if config.console.enabled {
        layers.push(console_layer(&config.console));
    }

    tracing_subscriber::registry()
        .with(layers)
        .with(filter)
        .try_init()?;

    Ok(LoggerGuard { _file: file_guard })
}

fn console_layer(config: &ConsoleConfig) -> BoxedLayer {
    let use_ansi = config.colored && std::io::stdout().is_terminal();

    fmt::layer()
        .with_ansi(use_ansi)
        .with_target(true)
        .with_level(true)
        .boxed()
}

fn file_layer(format: LogFormat, writer: NonBlocking) -> BoxedLayer {
    let layer = fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    match format {
        LogFormat::Full => layer.boxed(),
        LogFormat::Compact => layer.compact().boxed(),
        LogFormat::Json => layer.json().boxed(),
    }
}

fn file_writer(config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), LoggerError> {
    let appender = RollingFileAppender::builder()
        .rotation(config.rotation.into())
        .filename_prefix(config.prefix.clone())
        .max_log_files(config.max_files)
        .build(&config.directory)?;

    Ok(tracing_appender::non_blocking(appender))
}
