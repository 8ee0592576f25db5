//! Calendar date parsing and the short display format.

use jiff::civil::Date;
use serde::{Deserialize, Deserializer};

use crate::error::CoreError;

/// Shown wherever a session has no date.
pub const DATE_PLACEHOLDER: &str = "ohne Datum";

/// Parse an ISO 8601 calendar date as entered in a date field.
///
/// Blank input means "no date" and yields `Ok(None)`.
pub fn parse_iso(value: &str) -> Result<Option<Date>, CoreError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<Date>()
        .map(Some)
        .map_err(|_| CoreError::InvalidDate {
            value: trimmed.to_string(),
        })
}

/// Short German date, e.g. `7.3.2024` (day and month without zero padding).
pub fn format_short(date: Date) -> String {
    format!("{}.{}.{}", date.day(), date.month(), date.year())
}

/// [`format_short`] for an optional date, falling back to [`DATE_PLACEHOLDER`].
pub fn label(date: Option<Date>) -> String {
    date.map(format_short)
        .unwrap_or_else(|| DATE_PLACEHOLDER.to_string())
}

/// Serde helper: reads an optional ISO date string, treating blank or
/// unparseable values as absent instead of failing the whole snapshot.
pub fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(|s| parse_iso(s).ok().flatten()))
}
