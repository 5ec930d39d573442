//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `storage` abstracts the persistence backend, `session` is the persisted
//! login session built on it, and `auth` is the reactive mirror the UI reads.

pub mod auth;
pub mod session;
pub mod storage;
