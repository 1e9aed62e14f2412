//! Logging for the Nova3D engine
//!
//! All engine output flows through a single [`Logger`] installed on the
//! [`Engine`](crate::nova3d::Engine) global. The default implementation
//! prints colored, timestamped lines to the console; applications swap in
//! their own sink (file, network, test capture) with `Engine::set_logger`.
//! The `engine_*!` macros are the front end; ERROR-level entries carry the
//! originating file and line.

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Sink for engine log entries
///
/// Implementations must be `Send + Sync`; the engine logs from any thread.
///
/// # Example
///
/// ```no_run
/// use nova_3d_engine::nova3d::log::{Logger, LogEntry};
/// use std::sync::Mutex;
///
/// struct CapturingLogger {
///     lines: Mutex<Vec<String>>,
/// }
///
/// impl Logger for CapturingLogger {
///     fn log(&self, entry: &LogEntry) {
///         self.lines.lock().unwrap().push(entry.message.clone());
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Process one log entry
    fn log(&self, entry: &LogEntry);
}

/// One log record as handed to a [`Logger`]
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level
    pub severity: LogSeverity,

    /// When the entry was produced
    pub timestamp: SystemTime,

    /// Originating subsystem (e.g., "nova3d::Engine", "nova3d::headless::Texture")
    pub source: String,

    /// The formatted message
    pub message: String,

    /// Source file, present on detailed ERROR entries
    pub file: Option<&'static str>,

    /// Source line, present on detailed ERROR entries
    pub line: Option<u32>,
}

/// Log severity, ordered from most to least verbose
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose, per-operation tracing
    Trace,

    /// Development diagnostics
    Debug,

    /// Notable lifecycle events
    Info,

    /// Something suspicious but recoverable
    Warn,

    /// A failed operation, logged with file:line
    Error,
}

impl LogSeverity {
    /// Fixed-width display label for aligned console output
    pub fn label(&self) -> &'static str {
        match self {
            LogSeverity::Trace => "TRACE",
            LogSeverity::Debug => "DEBUG",
            LogSeverity::Info => "INFO ",
            LogSeverity::Warn => "WARN ",
            LogSeverity::Error => "ERROR",
        }
    }
}

/// Console logger used until an application installs its own
///
/// Line format is `[timestamp] [SEVERITY] [source] message`, with a
/// trailing `(file:line)` on detailed ERROR entries. Severity labels are
/// colored; ERROR additionally prints bold.
pub struct DefaultLogger;

impl DefaultLogger {
    fn colored_label(severity: LogSeverity) -> ColoredString {
        let label = severity.label();
        match severity {
            LogSeverity::Trace => label.bright_black(),
            LogSeverity::Debug => label.cyan(),
            LogSeverity::Info => label.green(),
            LogSeverity::Warn => label.yellow(),
            LogSeverity::Error => label.red().bold(),
        }
    }
}

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();

        let location = match (entry.file, entry.line) {
            (Some(file), Some(line)) => format!(" ({}:{})", file, line),
            _ => String::new(),
        };

        println!(
            "[{}] [{}] [{}] {}{}",
            datetime.format("%Y-%m-%d %H:%M:%S%.3f"),
            Self::colored_label(entry.severity),
            entry.source.bright_blue(),
            entry.message,
            location
        );
    }
}

// ===== LOGGING MACROS =====

/// Log at TRACE level (per-operation noise, usually filtered out)
///
/// # Example
///
/// ```ignore
/// engine_trace!("nova3d::RenderObjectFactory", "Pool hit for {:?}", category);
/// ```
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova3d::Engine::log(
            $crate::nova3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at DEBUG level (development diagnostics)
///
/// # Example
///
/// ```ignore
/// engine_debug!("nova3d::Engine", "Registry now holds {} factories", count);
/// ```
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova3d::Engine::log(
            $crate::nova3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at INFO level (lifecycle events worth keeping in release logs)
///
/// # Example
///
/// ```ignore
/// engine_info!("nova3d::Engine", "Factory '{}' registered", name);
/// ```
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova3d::Engine::log(
            $crate::nova3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at WARN level (recoverable but suspicious)
///
/// # Example
///
/// ```ignore
/// engine_warn!("nova3d::RenderObjectFactory", "Pool at {} entries", count);
/// ```
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova3d::Engine::log(
            $crate::nova3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log at ERROR level with the call site's file and line
///
/// For building the error value at the same time, see
/// [`engine_err!`](crate::engine_err) and [`engine_bail!`](crate::engine_bail).
///
/// # Example
///
/// ```ignore
/// engine_error!("nova3d::headless::Device", "Allocation of {} bytes failed", size);
/// ```
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::nova3d::Engine::log_detailed(
            $crate::nova3d::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
