//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources:
//! - The logger
//! - The HTTP client used for backend requests

mod client;
mod logger;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;
