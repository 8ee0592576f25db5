use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::ids::{PatientId, SessionId};
use super::session::{non_blank, Session, SessionType};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    #[serde(default)]
    pub birth_year: Option<i32>,
    #[serde(default)]
    pub main_region: Option<String>,
    /// Storage order is insertion order; use [`Patient::sessions_recent_first`]
    /// for display.
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Patient {
    pub fn new(name: impl Into<String>, birth_year: Option<i32>, main_region: Option<String>) -> Self {
        Self {
            id: PatientId::new(),
            name: name.into(),
            birth_year,
            main_region,
            sessions: Vec::new(),
        }
    }

    /// The main region, if one is set and not blank.
    pub fn main_region(&self) -> Option<&str> {
        non_blank(self.main_region.as_deref())
    }

    /// Type for the next session: the first one is the initial assessment.
    pub fn next_session_type(&self) -> SessionType {
        if self.sessions.is_empty() {
            SessionType::Initial
        } else {
            SessionType::Followup
        }
    }

    pub fn session(&self, id: &SessionId) -> Option<&Session> {
        self.sessions.iter().find(|s| &s.id == id)
    }

    pub fn session_mut(&mut self, id: &SessionId) -> Option<&mut Session> {
        self.sessions.iter_mut().find(|s| &s.id == id)
    }

    pub fn remove_session(&mut self, id: &SessionId) -> Option<Session> {
        let idx = self.sessions.iter().position(|s| &s.id == id)?;
        Some(self.sessions.remove(idx))
    }

    /// Sessions newest first; undated sessions sort last.
    pub fn sessions_recent_first(&self) -> Vec<&Session> {
        let mut sorted: Vec<&Session> = self.sessions.iter().collect();
        sorted.sort_by(|a, b| b.date.cmp(&a.date));
        sorted
    }
}
