//! Domain layer for the rolodex service.
//!
//! Holds the shared id/timestamp types, the domain error type, input
//! validation, and the typed options used to build contact list queries.
//! This crate has no database or HTTP dependencies.

pub mod error;
pub mod listing;
pub mod types;
pub mod validation;
