//! Main application modules.
//!
//! This module provides URL validation, progress logging and shutdown
//! handling used while a submission is in flight.

pub mod logging;
pub mod shutdown;
pub mod ticker;
pub mod url;

// Re-export public API
pub use logging::log_progress;
pub use shutdown::shutdown_gracefully;
pub use ticker::ProgressTicker;
pub use url::validate_and_normalize_url;
