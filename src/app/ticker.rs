//! Progress ticker shown while a submission is in flight.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use super::logging::log_progress;
use super::shutdown::shutdown_gracefully;

/// A periodic progress logger owned by a single submission.
///
/// The task is started with [`ProgressTicker::start`] and must be torn down
/// with [`ProgressTicker::shutdown`], which waits for it to exit.
pub struct ProgressTicker {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
    ticks: Arc<AtomicUsize>,
}

impl ProgressTicker {
    /// Spawns the ticker. The first tick fires immediately.
    pub fn start(period: Duration, pending: Arc<AtomicUsize>, total: usize) -> Self {
        let cancel = CancellationToken::new();
        let cancel_ticker = cancel.child_token();
        let ticks = Arc::new(AtomicUsize::new(0));
        let ticks_for_task = Arc::clone(&ticks);
        let start_time = Instant::now();

        let task = tokio::task::spawn(async move {
            let mut interval = tokio::time::interval(period);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        ticks_for_task.fetch_add(1, Ordering::SeqCst);
                        log_progress(start_time, &pending, total);
                    }
                    _ = cancel_ticker.cancelled() => {
                        break;
                    }
                }
            }
        });

        Self {
            cancel,
            task: Some(task),
            ticks,
        }
    }

    /// A ticker that never runs, for when progress output is disabled.
    pub fn disabled() -> Self {
        Self {
            cancel: CancellationToken::new(),
            task: None,
            ticks: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Stops the ticker and returns how many times it fired.
    pub async fn shutdown(mut self) -> usize {
        shutdown_gracefully(self.cancel.clone(), self.task.take()).await;
        self.ticks.load(Ordering::SeqCst)
    }
}

impl Drop for ProgressTicker {
    fn drop(&mut self) {
        // Covers a submission future dropped before `shutdown` ran.
        self.cancel.cancel();
    }
}
