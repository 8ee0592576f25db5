//! physio-app
//!
//! Application layer for Physio Doc Pilot: the [`workspace::Workspace`]
//! controller that owns the explicit application state and applies user
//! actions to it, plus configuration, logging setup, the clipboard seam,
//! and view-model helpers for whatever shell renders the UI.

pub mod clipboard;
pub mod config;
pub mod error;
pub mod logging;
pub mod state;
pub mod view;
pub mod workspace;

pub use error::AppError;
pub use workspace::Workspace;
