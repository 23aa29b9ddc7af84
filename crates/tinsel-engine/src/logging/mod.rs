//! Logging setup.
//!
//! The engine only logs through the `log` facade; this module installs the
//! `env_logger` backend for binaries that want it.

mod init;

pub use init::{init_logging, LoggingConfig};
