//! physio-core
//!
//! Pure domain types, static option catalogs, and storage key conventions.
//! No I/O here: this is the shared vocabulary of the Physio Doc Pilot system.

pub mod catalog;
pub mod dates;
pub mod error;
pub mod models;
pub mod storage_keys;
