use jiff::civil::Date;
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use super::ids::SessionId;
use crate::dates;

/// Upper bound of the pain and function-limitation ratings.
pub const RATING_MAX: u8 = 10;

/// Rating a new session starts with, and the value assumed when a rating is
/// missing at scoring time.
pub const RATING_DEFAULT: u8 = 5;

/// Upper bound of the severity score.
pub const SCORE_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SessionType {
    /// Erstbefund.
    Initial,
    /// Folgetermin. Stored sessions with a missing or unrecognised type
    /// count as follow-ups.
    #[default]
    Followup,
}

impl SessionType {
    pub fn label(&self) -> &'static str {
        match self {
            SessionType::Initial => "Erstbefund",
            SessionType::Followup => "Folgetermin",
        }
    }
}

/// One documented encounter. Always stored inside its patient's
/// `sessions`, which is what ties it to exactly one patient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Session {
    pub id: SessionId,
    #[serde(rename = "type", default, deserialize_with = "deserialize_session_type")]
    pub session_type: SessionType,
    #[serde(default, deserialize_with = "dates::deserialize_lenient")]
    pub date: Option<Date>,
    /// Body region; blank means "use the patient's main region".
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub complaints: Vec<String>,
    #[serde(default)]
    pub measures: Vec<String>,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub pain: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_rating")]
    pub function: Option<u8>,
    #[serde(default)]
    pub speech_notes: String,
    #[serde(default)]
    pub note: String,
    /// Cached severity score, `None` until a note has been generated.
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: Option<u8>,
}

impl Session {
    pub fn new(session_type: SessionType, date: Option<Date>, region: Option<String>) -> Self {
        Self {
            id: SessionId::new(),
            session_type,
            date,
            region,
            complaints: Vec::new(),
            measures: Vec::new(),
            pain: Some(RATING_DEFAULT),
            function: Some(RATING_DEFAULT),
            speech_notes: String::new(),
            note: String::new(),
            score: None,
        }
    }

    /// The session's own region, if one is set and not blank.
    pub fn region(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }

    pub fn has_complaint(&self, id: &str) -> bool {
        self.complaints.iter().any(|c| c == id)
    }

    /// Select the complaint if absent, deselect it if present.
    pub fn toggle_complaint(&mut self, id: &str) {
        toggle(&mut self.complaints, id);
    }

    /// Select the measure if absent, deselect it if present.
    pub fn toggle_measure(&mut self, id: &str) {
        toggle(&mut self.measures, id);
    }

    pub fn set_pain(&mut self, value: u8) {
        self.pain = Some(value.min(RATING_MAX));
    }

    pub fn set_function(&mut self, value: u8) {
        self.function = Some(value.min(RATING_MAX));
    }

    /// Pain rating with the scoring default applied.
    pub fn pain_or_default(&self) -> u8 {
        self.pain.unwrap_or(RATING_DEFAULT)
    }

    /// Function-limitation rating with the scoring default applied.
    pub fn function_or_default(&self) -> u8 {
        self.function.unwrap_or(RATING_DEFAULT)
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

fn deserialize_session_type<'de, D>(deserializer: D) -> Result<SessionType, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw.as_deref() {
        Some("initial") => SessionType::Initial,
        _ => SessionType::Followup,
    })
}

fn deserialize_rating<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_bounded(deserializer, RATING_MAX)
}

fn deserialize_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    deserialize_bounded(deserializer, SCORE_MAX)
}

/// Reads any JSON number and clamps it into `0..=max`, rounding fractions.
fn deserialize_bounded<'de, D>(deserializer: D, max: u8) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<f64> = Option::deserialize(deserializer)?;
    Ok(raw
        .filter(|v| v.is_finite())
        .map(|v| v.round().clamp(0.0, f64::from(max)) as u8))
}

fn toggle(selected: &mut Vec<String>, id: &str) {
    if let Some(idx) = selected.iter().position(|s| s == id) {
        selected.remove(idx);
    } else {
        selected.push(id.to_string());
    }
}
