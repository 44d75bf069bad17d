//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::LinkStore;

/// Application state shared across all request handlers.
///
/// One store instance per process; handlers clone the `Arc`, never the
/// store itself.
#[derive(Clone)]
pub struct AppState {
    pub link_store: Arc<LinkStore>,
}

impl AppState {
    pub fn new(link_store: Arc<LinkStore>) -> Self {
        Self { link_store }
    }
}
