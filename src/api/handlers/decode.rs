//! Handler for the URL decode endpoint.

use axum::{
    Json,
    extract::{Path, State},
};
use tracing::debug;

use crate::api::dto::shortlink::LinkResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a short URL back to its original form.
///
/// # Endpoint
///
/// `GET /shortlink/decode/{*suffix}`
///
/// The wildcard segment is the short URL minus its `http://` prefix, e.g.
/// `GET /shortlink/decode/short.est/Ab3xY` resolves
/// `http://short.est/Ab3xY`.
///
/// # Errors
///
/// Returns 404 Not Found if the short URL was never issued.
pub async fn decode_handler(
    Path(suffix): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let short_url = format!("http://{}", suffix);

    debug!("Decode {}", short_url);

    let record = state.link_store.decode(&short_url)?;

    tracing::info!("Decoded {}", record.long_url);

    Ok(Json(record.into()))
}
