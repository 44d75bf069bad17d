//! DTOs for the encode and decode endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{EncodeRequest, LinkRecord};

/// Request to encode a long URL.
///
/// `long_url` defaults to an empty string when the field is missing so that
/// absence surfaces as a validation error with the boundary's error body
/// rather than a deserialization reject.
#[derive(Debug, Deserialize, Validate)]
pub struct EncodeBody {
    /// Optional domain override (otherwise uses the default domain).
    pub domain: Option<String>,

    /// The original URL to shorten.
    #[serde(default)]
    #[validate(length(min = 1, message = "long_url is required"))]
    pub long_url: String,

    /// Optional title for the URL.
    pub title: Option<String>,

    /// Must not be set; the short URL is always generated by the store.
    pub short_url: Option<String>,
}

impl From<EncodeBody> for EncodeRequest {
    fn from(body: EncodeBody) -> Self {
        Self {
            domain: body.domain,
            long_url: body.long_url,
            title: body.title,
            short_url: body.short_url,
        }
    }
}

/// A stored link as returned by both encode and decode.
///
/// `title` is serialized as `null` when absent.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub domain: String,
    pub long_url: String,
    pub title: Option<String>,
    pub short_url: String,
}

impl From<LinkRecord> for LinkResponse {
    fn from(record: LinkRecord) -> Self {
        Self {
            domain: record.domain,
            long_url: record.long_url,
            title: record.title,
            short_url: record.short_url,
        }
    }
}
