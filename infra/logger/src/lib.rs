//! # Logger
//!
//! A centralized logging utility for the workspace. It provides a unified way
//! to configure console and file logging with rotation, non-blocking I/O, and
//! environment-based filtering.
//!
//! * Use [`LoggerBuilder::env_filter`] to set module-directed filters
//!   (e.g., `"moor=debug,hyper=info"`), in addition to `RUST_LOG`.
//! * File output rotates daily by default and keeps a bounded number of files.
//!
//! ## Example
//!
//! ```rust
//! use moor_logger::{LevelFilter, Logger};
//!
//! let _logger = Logger::builder("my-app")
//!     .console(true)
//!     .level(LevelFilter::DEBUG)
//!     .init()
//!     .unwrap();
//! ```

mod builder;
mod error;

pub use crate::builder::LoggerBuilder;
pub use crate::error::{LoggerError, LoggerErrorExt};
pub use tracing::level_filters::LevelFilter;
pub use tracing_appender::rolling::Rotation;

use tracing_appender::non_blocking::WorkerGuard;

/// A handle to the initialized logging system.
///
/// Holds the background worker guard for the file appender, if one was
/// configured. Drop this struct only when the application is shutting down.
#[must_use = "Dropping this handle will stop background logging threads."]
#[derive(Debug)]
pub struct Logger {
    guard: Option<WorkerGuard>,
}

impl Logger {
    /// Returns a new [`LoggerBuilder`] to configure the global tracing
    /// subscriber.
    ///
    /// The `name` identifies the application in log output and prefixes
    /// rolling log files (e.g., `feed.2026-08-06.log`).
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(name)
    }

    pub(crate) fn new(guard: Option<WorkerGuard>) -> Self {
        Self { guard }
    }

    /// Best-effort synchronization point before shutdown; flushing also
    /// happens automatically when this handle is dropped.
    pub fn flush(&self) {
        tracing::debug!("Logger flushed");
    }

    /// Returns a reference to the underlying worker guard, if present.
    #[must_use]
    pub const fn guard(&self) -> Option<&WorkerGuard> {
        self.guard.as_ref()
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        if self.guard.is_some() {
            tracing::info!("Logging system shutting down, flushing buffers...");
        }
    }
}
