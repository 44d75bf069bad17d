//! HTTP server initialization and runtime setup.
//!
//! Builds the link store, wires it into the router, and runs the Axum
//! server lifecycle.

use crate::application::services::LinkStore;
use crate::config::Config;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The listen address cannot be parsed or bound
/// - A server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let link_store = Arc::new(LinkStore::new(config.token_len));
    tracing::info!("Link store ready (token length: {})", config.token_len);

    let state = AppState::new(link_store);

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
