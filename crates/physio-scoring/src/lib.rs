//! physio-scoring
//!
//! Severity score for a session: pain, function limitation, and the number
//! of reported complaints folded into a single 0–100 index, plus the
//! three-tier category that drives colors and note wording.

pub mod category;
pub mod scoring;

pub use category::{score_category, ScoreCategory};
pub use scoring::{calculate_score, session_score};
