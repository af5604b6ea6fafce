//! Shared utilities for the LockPass registry.

pub mod logging;

pub use logging::{init_logging, try_init_logging, LogFormat, LoggingError};
