//! physio-storage
//!
//! Local snapshot persistence. A small key/value seam ([`store::KeyValueStore`])
//! stands in for browser local storage; [`state`] reads and writes the
//! patient snapshot through it.

pub mod error;
pub mod state;
pub mod store;
