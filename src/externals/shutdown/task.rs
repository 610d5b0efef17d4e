use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Task: Cancels `token` on SIGINT (ctrl-c) or SIGTERM. Exits quietly if the
/// token is cancelled by someone else first.
#[tracing::instrument(skip_all)]
pub async fn task_watch_shutdown_signals(token: CancellationToken) {
    info!("Started.");

    tokio::select! {
        _ = token.cancelled() => {
            warn!("Cancelled.");
            return;
        },
        res = signal::ctrl_c() => {
            match res {
                Ok(_) => info!("Received SIGINT."),
                Err(e) => error!("Failed to listen for ctrl_c. Error: {}", e),
            }
        },
        res = terminate() => {
            match res {
                Ok(_) => info!("Received SIGTERM."),
                Err(e) => error!("Failed to listen for SIGTERM. Error: {}", e),
            }
        },
    }

    token.cancel();
}

#[cfg(unix)]
async fn terminate() -> std::io::Result<()> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;
    sigterm.recv().await;
    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> std::io::Result<()> {
    std::future::pending().await
}
