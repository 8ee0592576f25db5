//! View-model helpers: the strings and lists a shell needs to render the
//! patient list, the session list, and the score panel.

use serde::Serialize;
use ts_rs::TS;

use physio_core::dates;
use physio_core::models::{Patient, Session, SessionId};
use physio_scoring::ScoreCategory;

pub const NO_PATIENTS: &str = "Noch keine Patienten";
pub const NO_SESSIONS: &str = "Noch keine Sitzungen";
pub const UNNAMED_PATIENT: &str = "Unbenannter Patient";
pub const NO_PATIENT_DETAILS: &str = "Keine Zusatzinfos";
pub const SCORE_NOT_COMPUTED: &str = "Noch nicht berechnet";

const SEPARATOR: &str = " · ";

pub fn patient_title(patient: &Patient) -> &str {
    let name = patient.name.trim();
    if name.is_empty() {
        UNNAMED_PATIENT
    } else {
        name
    }
}

/// Secondary line in the patient list, e.g. `*1980 · Knie`.
pub fn patient_list_meta(patient: &Patient) -> String {
    let mut parts = Vec::new();
    if let Some(year) = patient.birth_year {
        parts.push(format!("*{year}"));
    }
    if let Some(region) = patient.main_region() {
        parts.push(region.to_string());
    }
    parts.join(SEPARATOR)
}

/// Meta line under the patient title, e.g. `*1980 · Hauptregion: Knie`.
pub fn patient_detail_meta(patient: &Patient) -> String {
    let mut parts = Vec::new();
    if let Some(year) = patient.birth_year {
        parts.push(format!("*{year}"));
    }
    if let Some(region) = patient.main_region() {
        parts.push(format!("Hauptregion: {region}"));
    }
    if parts.is_empty() {
        NO_PATIENT_DETAILS.to_string()
    } else {
        parts.join(SEPARATOR)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct SessionListItem {
    pub id: SessionId,
    /// e.g. `Erstbefund – 7.3.2024`.
    pub title: String,
    /// e.g. `Knie · Score 60`.
    pub meta: String,
    pub active: bool,
}

/// The patient's sessions newest first, as list rows.
pub fn session_list(patient: &Patient, selected: Option<&SessionId>) -> Vec<SessionListItem> {
    patient
        .sessions_recent_first()
        .into_iter()
        .map(|session| SessionListItem {
            id: session.id.clone(),
            title: format!(
                "{} – {}",
                session.session_type.label(),
                dates::label(session.date)
            ),
            meta: session_meta(session),
            active: selected == Some(&session.id),
        })
        .collect()
}

fn session_meta(session: &Session) -> String {
    let mut parts = Vec::new();
    if let Some(region) = session.region() {
        parts.push(region.to_string());
    }
    if let Some(score) = session.score {
        parts.push(format!("Score {score}"));
    }
    parts.join(SEPARATOR)
}

#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct ScorePanel {
    pub value: String,
    pub category: String,
    /// CSS color for the category; `None` means the muted default.
    pub color: Option<String>,
}

pub fn score_panel(session: &Session) -> ScorePanel {
    match session.score {
        Some(score) => {
            let category = ScoreCategory::from_score(score);
            ScorePanel {
                value: score.to_string(),
                category: category.label().to_string(),
                color: Some(category.color_hint().to_string()),
            }
        }
        None => ScorePanel {
            value: "–".to_string(),
            category: SCORE_NOT_COMPUTED.to_string(),
            color: None,
        },
    }
}
