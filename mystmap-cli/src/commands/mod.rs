//! CLI command implementations.
//!
//! - [`config`] - configuration management (get, set, list, path)
//! - [`generate`] - `zone` and `myst` document generation

pub mod config;
pub mod generate;
