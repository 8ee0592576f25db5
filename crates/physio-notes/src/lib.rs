//! physio-notes
//!
//! SOAP-style treatment note drafting from structured session data.

pub mod error;
pub mod note;
pub mod render;

pub use note::generate_note;
