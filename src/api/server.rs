//! API server lifecycle — bind, spawn, shut down.
//!
//! Pattern: bind → spawn background task → return handle with shutdown
//! channel. The handle owns a oneshot sender; dropping or signalling it
//! stops the server gracefully.

use std::net::SocketAddr;
use std::sync::Arc;

use tokio::sync::oneshot;

use crate::api::router::consultation_api_router;
use crate::service::SessionService;

/// Handle to a running API server.
pub struct ApiServer {
    pub addr: SocketAddr,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl ApiServer {
    /// Shut down the server gracefully.
    pub fn shutdown(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            tracing::info!("API server shutdown signal sent");
        }
    }
}

/// Bind the consultation API to `addr` and serve it in a background task.
pub async fn start_api_server(
    service: Arc<SessionService>,
    addr: &str,
) -> Result<ApiServer, String> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("Failed to bind API server on {addr}: {e}"))?;

    let bound = listener
        .local_addr()
        .map_err(|e| format!("Cannot read bound address: {e}"))?;

    let app = consultation_api_router(service);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    tokio::spawn(async move {
        let serve = axum::serve(listener, app).with_graceful_shutdown(async {
            let _ = shutdown_rx.await;
        });
        if let Err(e) = serve.await {
            tracing::error!(error = %e, "API server terminated with error");
        }
    });

    tracing::info!(addr = %bound, "Consultation API listening");
    Ok(ApiServer {
        addr: bound,
        shutdown_tx: Some(shutdown_tx),
    })
}
