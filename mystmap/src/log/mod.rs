//! Logging abstraction.
//!
//! Library code logs through the [`Logger`] trait instead of calling
//! `tracing` directly, so callers decide where messages go:
//!
//! - [`TracingLogger`] forwards to `tracing` (set up by [`crate::logging`])
//! - [`NoOpLogger`] discards everything
//! - [`MemoryLogger`] records messages for inspection in tests
//!
//! ```
//! use std::sync::Arc;
//! use mystmap::log::{Logger, NoOpLogger};
//! use mystmap::log_info;
//!
//! let logger: Arc<dyn Logger> = Arc::new(NoOpLogger);
//! log_info!(logger, "wrote {} features", 100);
//! ```

mod memory;
mod noop;
mod tracing_adapter;
mod r#trait;

pub use memory::MemoryLogger;
pub use noop::NoOpLogger;
pub use r#trait::{LogLevel, Logger};
pub use tracing_adapter::TracingLogger;
