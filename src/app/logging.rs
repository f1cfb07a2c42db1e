//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs how long the in-flight analyses have been running.
///
/// # Arguments
///
/// * `start_time` - When the submission started
/// * `pending` - Number of requests still waiting for a response
/// * `total` - Number of requests issued by the submission
pub fn log_progress(start_time: std::time::Instant, pending: &Arc<AtomicUsize>, total: usize) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let pending = pending.load(Ordering::SeqCst);
    info!(
        "Analyzing... {} of {} analyses pending after {:.1}s",
        pending, total, elapsed_secs
    );
}
