//! Diagnostic logging sink for the spatial partitioner
//!
//! The partitioner core never prints on its own; every diagnostic goes
//! through a pluggable sink:
//! - Customizable logger via the Logger trait
//! - Severity levels (Trace, Debug, Info, Warn, Error)
//! - Colored console output by default
//! - Thread-safe global sink (see Engine)
//! - File and line information for detailed ERROR logs

use colored::*;
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Logger trait for custom logging implementations
///
/// Implement this trait to route partitioner diagnostics elsewhere
/// (file logging, an editor console, a test capture buffer, etc.)
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::spatial3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Log an entry
    ///
    /// # Arguments
    ///
    /// * `entry` - The log entry to process
    fn log(&self, entry: &LogEntry);
}

/// Log entry containing all information about a log message
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// Severity level (Trace, Debug, Info, Warn, Error)
    pub severity: LogSeverity,

    /// Timestamp when the log was created
    pub timestamp: SystemTime,

    /// Source module (e.g., "spatial3d::Registry", "spatial3d::Partitioner")
    pub source: String,

    /// Log message
    pub message: String,

    /// Source file (only for detailed ERROR logs)
    pub file: Option<&'static str>,

    /// Source line (only for detailed ERROR logs)
    pub line: Option<u32>,
}

/// Log severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    /// Very verbose debug information (typically disabled in release)
    Trace,

    /// Development/debugging information
    Debug,

    /// Important informational messages
    Info,

    /// Warning messages (potential issues)
    Warn,

    /// Error messages (critical issues with file:line details)
    Error,
}

impl LogSeverity {
    /// Fixed-width colored label used by DefaultLogger
    fn label(self) -> ColoredString {
        match self {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        }
    }
}

/// Default logger implementation using colored console output
///
/// Format:
/// - Normal: `[timestamp] [SEVERITY] [source] message`
/// - Error: `[timestamp] [ERROR] [source] message (file:line)`
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        // Format timestamp as YYYY-MM-DD HH:MM:SS.mmm
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = entry.severity.label();
        let source = entry.source.bright_blue();

        // Print with or without file:line
        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::partition_trace;
///
/// let count = 128;
/// partition_trace!("spatial3d::Partitioner", "scanning {} boxes", count);
/// ```
#[macro_export]
macro_rules! partition_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::spatial3d::Engine::log(
            $crate::spatial3d::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::partition_debug;
///
/// let (handle, len) = (0, 64);
/// partition_debug!("spatial3d::Registry", "store {} now holds {} items", handle, len);
/// ```
#[macro_export]
macro_rules! partition_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::spatial3d::Engine::log(
            $crate::spatial3d::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::partition_info;
///
/// let handle = 0;
/// partition_info!("spatial3d::Registry", "partitioner {} created", handle);
/// ```
#[macro_export]
macro_rules! partition_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::spatial3d::Engine::log(
            $crate::spatial3d::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::partition_warn;
///
/// let capacity = 16;
/// partition_warn!("spatial3d::Registry", "query buffer truncated at {} results", capacity);
/// ```
#[macro_export]
macro_rules! partition_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::spatial3d::Engine::log(
            $crate::spatial3d::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
///
/// # Example
///
/// ```no_run
/// use spatial_partitioner::partition_error;
///
/// let error = "unknown partitioner handle 9";
/// partition_error!("spatial3d::Registry", "rejected operation: {}", error);
/// ```
#[macro_export]
macro_rules! partition_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::spatial3d::Engine::log_detailed(
            $crate::spatial3d::log::LogSeverity::Error,
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
