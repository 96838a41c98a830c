//! Shutdown signal delivery.

use tokio_util::sync::CancellationToken;

use crate::error::Error;

/// Raises `cancel` on the first Ctrl-C, or SIGTERM on unix.
///
/// Handlers are installed before this returns; must be called from within a
/// tokio runtime.
pub fn cancel_on_shutdown(cancel: CancellationToken) -> Result<(), Error> {
    let terminate = terminate()?;

    tokio::task::spawn(async move {
        tokio::select! {
            ctrl_c = tokio::signal::ctrl_c() => {
                if let Err(error) = ctrl_c {
                    tracing::error!(%error, "Failed to listen for Ctrl-C");
                    return;
                }
                tracing::info!("Ctrl-C received, shutting down");
            }

            () = terminate => {
                tracing::info!("SIGTERM received, shutting down");
            }
        }

        cancel.cancel();
    });

    Ok(())
}

/// Resolves on the first SIGTERM.
#[cfg(unix)]
fn terminate() -> Result<impl Future<Output = ()>, Error> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut terminate = signal(SignalKind::terminate()).map_err(Error::Signal)?;
    Ok(async move {
        terminate.recv().await;
    })
}

/// No SIGTERM outside unix.
#[cfg(not(unix))]
fn terminate() -> Result<impl Future<Output = ()>, Error> {
    Ok(std::future::pending())
}
