//! Error handling.
//!
//! This module provides:
//! - Error type definitions (initialization, request, submit)
//! - Request failure categorization for logging
//!
//! Request failures are split into three kinds:
//! - **Server**: the backend answered with a non-2xx status and maybe a `detail`
//! - **Transport**: no response at all (connect, timeout, body read)
//! - **Decode**: a 2xx body that does not match the expected shape

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_reqwest_error, categorize_status};
pub use types::{ErrorType, InitializationError, RequestError, SubmitError};
