//! Core domain entities.

pub mod entities;
