//! Static HTTP health route.
//!
//! `GET /` answers `200 running` so a hosting platform can tell the process
//! is alive. It reports nothing about the tracker itself.

use axum::routing::get;
use axum::Router;
use tokio::net::TcpListener;
use tracing::info;

use crate::error::Result;

/// Build the health router.
pub fn router() -> Router {
    Router::new().route("/", get(root))
}

async fn root() -> &'static str {
    "running"
}

/// Serve the health route on an already bound listener.
///
/// # Errors
///
/// Returns an error if the server fails.
pub async fn serve_on(listener: TcpListener) -> Result<()> {
    info!(addr = %listener.local_addr()?, "Health endpoint listening");
    axum::serve(listener, router().into_make_service()).await?;
    Ok(())
}
