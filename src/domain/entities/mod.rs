//! Domain entities for shortened links.

pub mod link;

pub use link::{DEFAULT_DOMAIN, EncodeRequest, LinkRecord};
