#![allow(dead_code)]

use std::sync::Arc;

use shortlink::application::services::LinkStore;
use shortlink::state::AppState;

pub const TOKEN_LEN: usize = 5;

pub fn create_test_state() -> AppState {
    AppState::new(Arc::new(LinkStore::new(TOKEN_LEN)))
}

/// Turns an issued short URL into the decode endpoint path for it.
pub fn decode_path(short_url: &str) -> String {
    format!(
        "/shortlink/decode/{}",
        short_url.trim_start_matches("http://")
    )
}
