//! Shared utilities for the stake module tooling.

pub mod logging;

pub use logging::{init_logging, init_tracing, LogFormat};
