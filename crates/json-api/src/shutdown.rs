//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),

    #[cfg(unix)]
    #[error("failed to install SIGTERM handler: {0}")]
    SigTerm(#[source] io::Error),
}

/// Signal that triggered shutdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ShutdownSignal {
    CtrlC,
    Terminate,
}

/// Wait for a shutdown signal, then stop accepting connections and drain in-flight requests.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    let signal = wait_for_signal().await?;

    info!(?signal, "shutdown signal received, draining requests");

    handle.stop_graceful(None);

    Ok(())
}

async fn wait_for_signal() -> Result<ShutdownSignal, ShutdownSignalError> {
    let ctrl_c = async {
        signal::ctrl_c().await.map_err(ShutdownSignalError::CtrlC)?;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::CtrlC)
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .map_err(ShutdownSignalError::SigTerm)?
            .recv()
            .await;

        Ok::<_, ShutdownSignalError>(ShutdownSignal::Terminate)
    };

    // SIGTERM has no equivalent here; only Ctrl+C stops the server
    #[cfg(not(unix))]
    let terminate = std::future::pending::<Result<ShutdownSignal, ShutdownSignalError>>();

    tokio::select! {
        result = ctrl_c => result,
        result = terminate => result,
    }
}
