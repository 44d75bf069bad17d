//! Business logic services.

pub mod link_store;

pub use link_store::LinkStore;
