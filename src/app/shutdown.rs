//! Graceful shutdown handling.

use tokio_util::sync::CancellationToken;

/// Cancels a background task and waits for it to finish.
pub async fn shutdown_gracefully(
    cancel: CancellationToken,
    task: Option<tokio::task::JoinHandle<()>>,
) {
    cancel.cancel();
    if let Some(task) = task {
        if let Err(e) = task.await {
            log::warn!("Background task ended abnormally: {e}");
        }
    }
}
