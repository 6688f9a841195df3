//! Adapter from [`Logger`] to `tracing`.

use std::fmt::Arguments;

use crate::log::{LogLevel, Logger};

/// Forwards messages to the `tracing` macros of the matching level.
///
/// Output depends on the subscriber installed by
/// [`crate::logging::init_logging`]; without one, messages are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl TracingLogger {
    pub fn new() -> Self {
        Self
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: LogLevel, args: Arguments<'_>) {
        match level {
            LogLevel::Trace => tracing::trace!("{}", args),
            LogLevel::Debug => tracing::debug!("{}", args),
            LogLevel::Info => tracing::info!("{}", args),
            LogLevel::Warn => tracing::warn!("{}", args),
            LogLevel::Error => tracing::error!("{}", args),
        }
    }
}
