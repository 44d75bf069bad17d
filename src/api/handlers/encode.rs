//! Handler for the URL encode endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::shortlink::{EncodeBody, LinkResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Encodes a long URL into a short one.
///
/// # Endpoint
///
/// `POST /shortlink/encode`
///
/// # Request Body
///
/// ```json
/// {
///   "long_url": "https://example.com/some/long/path",
///   "domain": "my.dom",        // optional
///   "title": "Example"         // optional
/// }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "domain": "my.dom",
///   "long_url": "https://example.com/some/long/path",
///   "title": "Example",
///   "short_url": "http://my.dom/Ab3xY"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request if `long_url` is missing, `short_url` is
/// pre-supplied, or the URL is already encoded.
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(payload): Json<EncodeBody>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    tracing::info!("Encode {}", payload.long_url);

    let record = state.link_store.encode(payload.into())?;

    tracing::info!("Encoded {}", record.short_url);

    Ok(Json(record.into()))
}
