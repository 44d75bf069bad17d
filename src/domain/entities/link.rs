//! Link entity representing a long URL / short URL association.

/// Domain used for generated short URLs when a request does not name one.
pub const DEFAULT_DOMAIN: &str = "short.est";

/// A stored link: the association between a long URL and its generated
/// short URL, plus metadata.
///
/// Records are created only by the store and are immutable afterwards.
/// `short_url` is always of the form `http://{domain}/{token}`.
#[derive(Debug, Clone)]
pub struct LinkRecord {
    pub domain: String,
    pub long_url: String,
    pub title: Option<String>,
    pub short_url: String,
}

/// Input data for encoding a long URL.
///
/// `short_url` is carried so the store can reject requests that try to
/// pre-supply one; it must never be set by well-behaved callers.
#[derive(Debug, Clone, Default)]
pub struct EncodeRequest {
    pub domain: Option<String>,
    pub long_url: String,
    pub title: Option<String>,
    pub short_url: Option<String>,
}

impl EncodeRequest {
    /// Creates a request for `long_url` with all metadata left unset.
    pub fn new(long_url: impl Into<String>) -> Self {
        Self {
            long_url: long_url.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_request_new() {
        let req = EncodeRequest::new("https://example.com");

        assert_eq!(req.long_url, "https://example.com");
        assert!(req.domain.is_none());
        assert!(req.title.is_none());
        assert!(req.short_url.is_none());
    }

    #[test]
    fn test_link_record_fields() {
        let record = LinkRecord {
            domain: DEFAULT_DOMAIN.to_string(),
            long_url: "https://example.com".to_string(),
            title: Some("Example".to_string()),
            short_url: "http://short.est/Ab3xY".to_string(),
        };

        assert_eq!(record.domain, "short.est");
        assert_eq!(record.long_url, "https://example.com");
        assert_eq!(record.title.as_deref(), Some("Example"));
        assert!(record.short_url.starts_with("http://short.est/"));
    }
}
