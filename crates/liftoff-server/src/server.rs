use std::net::{Ipv4Addr, SocketAddr};

use axum::Router;

/// TCP port the service listens on. Compiled in; not configurable.
pub const PORT: u16 = 33333;

/// Startup error. Fatal: the process exits non-zero without retrying.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },

    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}

/// Bind the listener on all interfaces and serve `app` until the process
/// is terminated.
#[allow(clippy::missing_errors_doc)]
pub async fn serve(app: Router) -> Result<(), ServerError> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, PORT));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!("liftoff server listening on {addr}");

    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
