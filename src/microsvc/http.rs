//! HTTP transport - health check, tracing, and the listener loop.

use std::net::SocketAddr;

use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Wrap a service's routes with `GET /health` and request tracing.
///
/// `GET /health` returns `{ "ok": true, "service": "<name>" }`.
pub fn app(name: &'static str, routes: Router) -> Router {
    routes
        .route(
            "/health",
            get(move || async move { Json(json!({ "ok": true, "service": name })) }),
        )
        .layer(TraceLayer::new_for_http())
}

/// Serve a router at the given address until the process is stopped.
pub async fn serve(app: Router, addr: SocketAddr) -> Result<(), std::io::Error> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, app).await
}
