pub use physio_core::models::session::SCORE_MAX;
use physio_core::models::session::RATING_MAX;
use physio_core::models::Session;

pub const PAIN_WEIGHT: f64 = 0.4;
pub const FUNCTION_WEIGHT: f64 = 0.4;
pub const COMPLAINTS_WEIGHT: f64 = 0.2;

/// Complaint counts above this saturate the complaint component.
pub const COMPLAINTS_CAP: usize = 5;

/// Combine the ratings into a 0–100 severity score.
///
/// Pain and function (0–10) and the complaint count (capped at
/// [`COMPLAINTS_CAP`]) are each normalised to a percentage, weighted
/// 0.4 / 0.4 / 0.2, and rounded half-up. Ratings above 10 are clamped.
pub fn calculate_score(pain: u8, function: u8, complaints_count: usize) -> u8 {
    let pain_pct = percent(pain.min(RATING_MAX) as f64, RATING_MAX as f64);
    let function_pct = percent(function.min(RATING_MAX) as f64, RATING_MAX as f64);
    let complaints_pct = percent(
        complaints_count.min(COMPLAINTS_CAP) as f64,
        COMPLAINTS_CAP as f64,
    );

    let score = pain_pct * PAIN_WEIGHT
        + function_pct * FUNCTION_WEIGHT
        + complaints_pct * COMPLAINTS_WEIGHT;

    // Non-negative, so `round` (half away from zero) is half-up here.
    score.round().clamp(0.0, SCORE_MAX as f64) as u8
}

/// The score for a session's current ratings, with missing ratings taken as
/// the midpoint.
pub fn session_score(session: &Session) -> u8 {
    calculate_score(
        session.pain_or_default(),
        session.function_or_default(),
        session.complaints.len(),
    )
}

fn percent(value: f64, max: f64) -> f64 {
    value / max * 100.0
}
