//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (guards, form submission) and
//! keeps markup minimal.

pub mod admin;
pub mod home;
pub mod login;
pub mod map;
pub mod register;
