//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes for the shortlink API.
///
/// # Endpoints
///
/// - `POST /encode`            - Encode a long URL to a short one
/// - `GET  /decode/{*suffix}`  - Decode a short URL back to the original
///
/// The decode wildcard captures `domain/token`, the short URL with its
/// `http://` prefix stripped.
pub fn shortlink_routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode/{*suffix}", get(decode_handler))
}
