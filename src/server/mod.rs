//! HTTP front of the gateway.
//!
//! A single POST endpoint (`/`, and `/exec` for clients built against the
//! old web-app URL). The HTTP status is always 200; success or failure is
//! carried by the envelope's `status`.

use crate::core::{Gateway, Response};
use crate::db::store::SheetStore;
use crate::errors::{AppError, AppResult};
use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tracing::{error, info};

/// Gateway shared by all connections. The mutex serialises requests.
pub type SharedGateway<S> = Arc<Mutex<Gateway<S>>>;

pub fn router<S>(gateway: SharedGateway<S>) -> Router
where
    S: SheetStore + Send + 'static,
{
    Router::new()
        .route("/", post(handle_post::<S>))
        .route("/exec", post(handle_post::<S>))
        .with_state(gateway)
}

/// POST handler: raw body in, envelope out.
pub async fn handle_post<S>(State(gateway): State<SharedGateway<S>>, body: Bytes) -> Json<Response>
where
    S: SheetStore + Send + 'static,
{
    let body = match std::str::from_utf8(&body) {
        Ok(s) => s,
        Err(e) => return Json(Response::failure(format!("request body is not UTF-8: {e}"))),
    };

    let response = match gateway.lock() {
        Ok(mut gw) => gw.handle_body(body),
        Err(_) => {
            error!("gateway lock poisoned");
            Response::failure("gateway lock poisoned")
        }
    };

    Json(response)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve<S>(addr: &str, gateway: SharedGateway<S>) -> AppResult<()>
where
    S: SheetStore + Send + 'static,
{
    let addr: SocketAddr = addr
        .parse()
        .map_err(|e| AppError::Config(format!("invalid bind address '{addr}': {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("income-ledger gateway listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(gateway))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    info!("gateway stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {}", e);
    }
}
