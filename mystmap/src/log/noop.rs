//! Silent logger.

use std::fmt::Arguments;

use crate::log::{LogLevel, Logger};

/// Discards every message. The default logger of [`crate::generator::Generator`].
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpLogger;

impl Logger for NoOpLogger {
    #[inline]
    fn log(&self, _level: LogLevel, _args: Arguments<'_>) {}
}
