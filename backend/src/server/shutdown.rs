//! Graceful shutdown: fail liveness first, then stop accepting connections.

use std::future::Future;

use actix_web::dev::ServerHandle;
use actix_web::web;
use tracing::{info, warn};

use crate::inbound::http::health::HealthState;

/// Resolve on Ctrl+C or, on Unix, SIGTERM.
///
/// A signal whose handler cannot be installed is logged and never fires.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            warn!(error = %err, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                warn!(error = %err, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}

/// Wait for `signal`, mark the process as draining and stop `handle`
/// gracefully so in-flight requests complete.
pub async fn drain_on<F>(signal: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    signal.await;
    info!("shutdown signal received, draining");
    health_state.mark_draining();
    handle.stop(true).await;
}
