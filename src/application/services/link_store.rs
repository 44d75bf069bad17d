//! In-memory encode/decode store for shortened links.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::entities::{DEFAULT_DOMAIN, EncodeRequest, LinkRecord};
use crate::error::AppError;
use crate::utils::token_generator::generate_token;

/// Bidirectional mapping between long URLs and generated short URLs.
///
/// Owns two maps: `short_url -> LinkRecord` and `long_url -> short_url`.
/// Both are guarded by a single mutex so that encode's
/// check-generate-insert sequence is serialized as a whole and decode
/// never observes one map without the other's matching entry.
///
/// Records are immutable once created and live for the lifetime of the
/// process; there is no persistence.
pub struct LinkStore {
    token_len: usize,
    inner: Mutex<StoreInner>,
}

#[derive(Default)]
struct StoreInner {
    short_urls: HashMap<String, LinkRecord>,
    long_urls: HashMap<String, String>,
}

impl LinkStore {
    /// Creates an empty store generating tokens of `token_len` characters.
    pub fn new(token_len: usize) -> Self {
        Self {
            token_len,
            inner: Mutex::new(StoreInner::default()),
        }
    }

    /// Encodes a long URL into a newly generated short URL.
    ///
    /// The resulting short URL has the form `http://{domain}/{token}` where
    /// the domain comes from the request (falling back to
    /// [`DEFAULT_DOMAIN`]) and the token is random.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidRequest`] if the request pre-supplies a
    /// non-empty `short_url` or has an empty `long_url`.
    ///
    /// Returns [`AppError::DuplicateUrl`] if `long_url` is already encoded.
    pub fn encode(&self, request: EncodeRequest) -> Result<LinkRecord, AppError> {
        if request.short_url.as_deref().is_some_and(|s| !s.is_empty()) {
            return Err(AppError::invalid_request(
                "Invalid request - short_url must not be set",
            ));
        }

        if request.long_url.is_empty() {
            return Err(AppError::invalid_request("long_url is required"));
        }

        let mut inner = self.inner.lock().expect("link store lock poisoned");

        if inner.long_urls.contains_key(&request.long_url) {
            return Err(AppError::duplicate(format!(
                "URL {} is already encoded",
                request.long_url
            )));
        }

        let domain = request
            .domain
            .unwrap_or_else(|| DEFAULT_DOMAIN.to_string());

        // Rejection sampling over the token space: redraw until the
        // candidate short URL is free. There is no retry cap; the loop only
        // terminates by finding an unused token.
        let short_url = loop {
            let token = generate_token(self.token_len);
            let candidate = format!("http://{}/{}", domain, token);

            if !inner.short_urls.contains_key(&candidate) {
                break candidate;
            }
        };

        let record = LinkRecord {
            domain,
            long_url: request.long_url,
            title: request.title,
            short_url: short_url.clone(),
        };

        inner
            .long_urls
            .insert(record.long_url.clone(), short_url.clone());
        inner.short_urls.insert(short_url, record.clone());

        Ok(record)
    }

    /// Looks up the record previously issued for `short_url`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the short URL was never issued.
    pub fn decode(&self, short_url: &str) -> Result<LinkRecord, AppError> {
        let inner = self.inner.lock().expect("link store lock poisoned");

        inner
            .short_urls
            .get(short_url)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("short_url {} not found", short_url)))
    }

    /// Number of links currently stored.
    pub fn len(&self) -> usize {
        self.inner
            .lock()
            .expect("link store lock poisoned")
            .short_urls
            .len()
    }

    /// Returns true if no links have been encoded yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Configured token length.
    pub fn token_len(&self) -> usize {
        self.token_len
    }
}
