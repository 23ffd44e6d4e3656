//! Standcard Common Utilities
//!
//! Shared infrastructure for all standcard crates:
//! - Error types, result aliases, and user-facing messages
//! - Tracing/logging initialization
//! - Configuration loading

pub mod config;
pub mod error;
pub mod logging;

pub use config::*;
pub use error::*;
