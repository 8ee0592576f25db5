use physio_core::models::{Patient, PatientId, Session, SessionId, Snapshot};

use crate::error::AppError;

/// Everything the UI works on: the persisted snapshot plus the current
/// selection, which is never persisted.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub snapshot: Snapshot,
    pub selected_patient: Option<PatientId>,
    pub selected_session: Option<SessionId>,
}

impl AppState {
    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot,
            selected_patient: None,
            selected_session: None,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.snapshot.patients
    }

    pub fn patient(&self, id: &PatientId) -> Option<&Patient> {
        self.snapshot.patients.iter().find(|p| &p.id == id)
    }

    pub fn selected_patient(&self) -> Result<&Patient, AppError> {
        let id = self
            .selected_patient
            .as_ref()
            .ok_or(AppError::NoPatientSelected)?;
        self.patient(id).ok_or(AppError::NoPatientSelected)
    }

    pub fn selected_patient_mut(&mut self) -> Result<&mut Patient, AppError> {
        let id = self
            .selected_patient
            .as_ref()
            .ok_or(AppError::NoPatientSelected)?;
        self.snapshot
            .patients
            .iter_mut()
            .find(|p| &p.id == id)
            .ok_or(AppError::NoPatientSelected)
    }

    /// The selected patient together with its selected session.
    pub fn selected_session(&self) -> Result<(&Patient, &Session), AppError> {
        let patient = self.selected_patient()?;
        let id = self
            .selected_session
            .as_ref()
            .ok_or(AppError::NoSessionSelected)?;
        let session = patient.session(id).ok_or(AppError::NoSessionSelected)?;
        Ok((patient, session))
    }

    pub fn selected_session_mut(&mut self) -> Result<&mut Session, AppError> {
        let id = self
            .selected_session
            .clone()
            .ok_or(AppError::NoSessionSelected)?;
        self.selected_patient_mut()?
            .session_mut(&id)
            .ok_or(AppError::NoSessionSelected)
    }
}
