//! Shared utilities for pkgcat CLI binaries.
//!
//! Provides the log level argument and logging setup.

pub mod args;
pub mod logging;

pub use args::LogLevel;
pub use logging::init_logging;
