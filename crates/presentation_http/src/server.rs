//! Serving with a bounded graceful shutdown

use std::{future::Future, io, sync::Arc, time::Duration};

use axum::Router;
use tokio::{net::TcpListener, sync::Notify};
use tracing::{info, warn};

/// How the server stopped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownOutcome {
    /// All connections closed before the timeout
    Graceful,
    /// Connections were still open when the timeout elapsed
    TimedOut,
}

/// Serve `app` until `signal` resolves, then wait at most `timeout` for
/// in-flight connections to finish
pub async fn serve_until<F>(
    listener: TcpListener,
    app: Router,
    signal: F,
    timeout: Duration,
) -> io::Result<ShutdownOutcome>
where
    F: Future<Output = ()> + Send + 'static,
{
    let draining = Arc::new(Notify::new());
    let trigger = Arc::clone(&draining);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        signal.await;
        trigger.notify_one();
    });
    let server = std::future::IntoFuture::into_future(server);
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => {
            result?;
            return Ok(ShutdownOutcome::Graceful);
        }
        () = draining.notified() => {}
    }

    info!("Waiting up to {:?} for connections to close...", timeout);
    match tokio::time::timeout(timeout, &mut server).await {
        Ok(result) => {
            result?;
            Ok(ShutdownOutcome::Graceful)
        },
        Err(_) => {
            warn!("Shutdown timeout elapsed, dropping open connections");
            Ok(ShutdownOutcome::TimedOut)
        },
    }
}
