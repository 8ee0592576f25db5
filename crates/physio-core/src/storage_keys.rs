//! Local storage key conventions.
//!
//! The snapshot lives under a single versioned key. Bump the suffix when the
//! snapshot shape changes incompatibly.

pub const SNAPSHOT: &str = "physioDocPilot_v1";
