//! Networking modules for the auth REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the auth client, `transport` the HTTP seam it sends through,
//! `types` the wire schema and `error` the failure taxonomy.

pub mod api;
pub mod error;
pub mod transport;
pub mod types;
