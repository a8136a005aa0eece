use crate::error::{CliError, Result as CliErrorResult};

use dash_config::LoggingConfig;

use std::fs::{File, OpenOptions};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use fern::Dispatch;
use fern::colors::{Color, ColoredLevelConfig};
use log::{Level, debug};

/// Where log records end up. Stdout carries command output, so the
/// terminal sinks write to stderr.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogSink {
    File(PathBuf),
    ColoredStderr,
    PlainStderr,
}

impl LogSink {
    /// A configured file wins; otherwise the `colored` flag picks the stderr style.
    pub fn select(log_file: Option<PathBuf>, colored: bool) -> Self {
        match log_file {
            Some(path) => Self::File(path),
            None if colored => Self::ColoredStderr,
            None => Self::PlainStderr,
        }
    }
}

/// Install the global fern logger for this process.
pub fn initialize(logging: &LoggingConfig, log_file: Option<PathBuf>) -> CliErrorResult<()> {
    let level = *logging.level;
    let sink = LogSink::select(log_file, logging.colored);

    let dispatch = match &sink {
        LogSink::File(path) => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!(
                    "{} [{}]",
                    line(record.level(), message),
                    record.target()
                ))
            })
            .chain(open_log_file(path)?),
        LogSink::ColoredStderr => {
            let colors = ColoredLevelConfig::new()
                .debug(Color::Blue)
                .info(Color::Green)
                .warn(Color::Yellow)
                .error(Color::Red);

            Dispatch::new()
                .format(move |out, message, record| {
                    out.finish(format_args!(
                        "[{} {}] {message}",
                        humantime::format_rfc3339_seconds(SystemTime::now()),
                        colors.color(record.level())
                    ))
                })
                .chain(std::io::stderr())
        }
        LogSink::PlainStderr => Dispatch::new()
            .format(|out, message, record| {
                out.finish(format_args!("{}", line(record.level(), message)))
            })
            .chain(std::io::stderr()),
    };

    Dispatch::new()
        .level(level)
        .chain(dispatch)
        .apply()
        .map_err(|e| CliError::Logger {
            message: format!("Failed to initialize logger: {e}"),
        })?;

    debug!("Logger ready: level={level:?}, sink={sink:?}");
    Ok(())
}

fn line(level: Level, message: &std::fmt::Arguments<'_>) -> String {
    format!(
        "[{} {level}] {message}",
        humantime::format_rfc3339_seconds(SystemTime::now())
    )
}

fn open_log_file(path: &Path) -> CliErrorResult<File> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {e}", parent.display()),
        })?;
    }

    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| CliError::Logger {
            message: format!("Failed to open log file {}: {e}", path.display()),
        })
}
