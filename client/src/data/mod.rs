//! Static reference data.

pub mod regions;
