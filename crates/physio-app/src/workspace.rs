use std::path::Path;

use jiff::civil::Date;
use tracing::{info, warn};

use physio_chart::{render_score_chart, Surface};
use physio_core::dates;
use physio_core::models::{Patient, PatientId, Session, SessionId, SessionType};
use physio_notes::generate_note;
use physio_scoring::session_score;
use physio_speech::{append_final, Recognizer, SpeechController, TranscriptEvent};
use physio_storage::state::{load_state, save_state};
use physio_storage::store::{FileStore, KeyValueStore};

use crate::clipboard::Clipboard;
use crate::config::{self, PhysioConfig};
use crate::error::{AppError, NAME_REQUIRED, NOTHING_TO_COPY};
use crate::state::AppState;

/// The application controller.
///
/// Owns the state, the snapshot store, and the config. Every mutating
/// action persists the snapshot afterwards; a failed write is logged and
/// the in-memory state stays authoritative.
pub struct Workspace<S> {
    state: AppState,
    store: S,
    config: PhysioConfig,
}

impl Workspace<FileStore> {
    /// Open the workspace in the platform config and data directories.
    pub fn open_default() -> eyre::Result<Self> {
        Self::open_in(&config::config_dir()?, &config::data_dir()?)
    }

    /// Load (or create) the config in `config_dir` and keep the snapshot in
    /// a file store under `data_dir`.
    pub fn open_in(config_dir: &Path, data_dir: &Path) -> eyre::Result<Self> {
        let config = config::load_or_init_config(config_dir)?;
        info!(data_dir = %data_dir.display(), "opening workspace");
        Ok(Self::open(FileStore::new(data_dir), config))
    }
}

impl<S: KeyValueStore> Workspace<S> {
    /// Load the stored snapshot (or start empty) with nothing selected.
    pub fn open(store: S, config: PhysioConfig) -> Self {
        let snapshot = load_state(&store, &config.storage_key);
        Self {
            state: AppState::from_snapshot(snapshot),
            store,
            config,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn config(&self) -> &PhysioConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn patients(&self) -> &[Patient] {
        self.state.patients()
    }

    pub fn selected_patient(&self) -> Option<&Patient> {
        self.state.selected_patient().ok()
    }

    pub fn selected_session(&self) -> Option<&Session> {
        self.state.selected_session().ok().map(|(_, s)| s)
    }

    /// Intake: add a patient and select it.
    pub fn create_patient(
        &mut self,
        name: &str,
        birth_year: Option<i32>,
        main_region: Option<&str>,
    ) -> Result<PatientId, AppError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(AppError::Validation(NAME_REQUIRED.to_string()));
        }

        let main_region = main_region
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        let patient = Patient::new(name, birth_year, main_region);
        let id = patient.id.clone();

        self.state.snapshot.patients.push(patient);
        self.state.selected_patient = Some(id.clone());
        self.state.selected_session = None;
        info!(patient_id = %id, "patient created");

        self.persist();
        Ok(id)
    }

    pub fn select_patient(&mut self, id: &PatientId) -> Result<(), AppError> {
        if self.state.patient(id).is_none() {
            return Err(AppError::UnknownPatient(id.clone()));
        }
        self.state.selected_patient = Some(id.clone());
        self.state.selected_session = None;
        Ok(())
    }

    pub fn select_session(&mut self, id: &SessionId) -> Result<(), AppError> {
        let patient = self.state.selected_patient()?;
        if patient.session(id).is_none() {
            return Err(AppError::UnknownSession(id.clone()));
        }
        self.state.selected_session = Some(id.clone());
        Ok(())
    }

    /// Add a session dated today to the selected patient and select it.
    pub fn add_session(&mut self) -> Result<SessionId, AppError> {
        let today = jiff::Zoned::now().date();
        self.add_session_on(today)
    }

    /// Add a session on `date`: the patient's first session is the initial
    /// assessment, later ones are follow-ups. Region defaults to the
    /// patient's main region.
    pub fn add_session_on(&mut self, date: Date) -> Result<SessionId, AppError> {
        let patient = self.state.selected_patient_mut()?;
        let session = Session::new(
            patient.next_session_type(),
            Some(date),
            patient.main_region().map(str::to_string),
        );
        let id = session.id.clone();
        info!(
            patient_id = %patient.id,
            session_id = %id,
            session_type = session.session_type.label(),
            "session added"
        );
        patient.sessions.push(session);

        self.state.selected_session = Some(id.clone());
        self.persist();
        Ok(id)
    }

    pub fn set_session_type(&mut self, session_type: SessionType) -> Result<(), AppError> {
        self.update_session(|s| s.session_type = session_type)
    }

    pub fn set_date(&mut self, date: Option<Date>) -> Result<(), AppError> {
        self.update_session(|s| s.date = date)
    }

    /// Set the date from date-field input. Blank clears the date; anything
    /// unparseable is rejected and the session keeps its date.
    pub fn set_date_input(&mut self, value: &str) -> Result<(), AppError> {
        let date = dates::parse_iso(value)?;
        self.set_date(date)
    }

    /// Blank input resets the session to the patient's main region.
    pub fn set_region(&mut self, region: &str) -> Result<(), AppError> {
        let region = Some(region.trim())
            .filter(|r| !r.is_empty())
            .map(str::to_string);
        self.update_session(|s| s.region = region)
    }

    pub fn toggle_complaint(&mut self, id: &str) -> Result<(), AppError> {
        self.update_session(|s| s.toggle_complaint(id))
    }

    pub fn toggle_measure(&mut self, id: &str) -> Result<(), AppError> {
        self.update_session(|s| s.toggle_measure(id))
    }

    /// Clamped to 0..=10.
    pub fn set_pain(&mut self, value: u8) -> Result<(), AppError> {
        self.update_session(|s| s.set_pain(value))
    }

    /// Clamped to 0..=10.
    pub fn set_function(&mut self, value: u8) -> Result<(), AppError> {
        self.update_session(|s| s.set_function(value))
    }

    pub fn set_speech_notes(&mut self, text: &str) -> Result<(), AppError> {
        self.update_session(|s| s.speech_notes = text.to_string())
    }

    /// Manual edit of the note text.
    pub fn set_note(&mut self, text: &str) -> Result<(), AppError> {
        self.update_session(|s| s.note = text.to_string())
    }

    /// Append the final chunks of a recognizer batch to the selected
    /// session's speech notes. Returns whether anything was appended.
    pub fn apply_transcript(&mut self, events: &[TranscriptEvent]) -> Result<bool, AppError> {
        let session = self.state.selected_session_mut()?;
        let Some(updated) = append_final(&session.speech_notes, events) else {
            return Ok(false);
        };
        session.speech_notes = updated;
        self.persist();
        Ok(true)
    }

    /// Dictation for the configured language, or a disabled controller when
    /// the platform has no recognizer.
    pub fn speech_controller<R: Recognizer>(&self, recognizer: Option<R>) -> SpeechController<R> {
        match recognizer {
            Some(recognizer) => SpeechController::new(recognizer, &self.config.speech_language),
            None => SpeechController::unavailable(),
        }
    }

    /// Score the selected session from its current ratings, then draft its
    /// note. Overwrites any manual edits to the note.
    pub fn generate_note(&mut self) -> Result<String, AppError> {
        let (patient, session) = self.state.selected_session()?;
        let score = session_score(session);

        let mut scored = session.clone();
        scored.score = Some(score);
        let note = generate_note(patient, &scored)?;

        let session = self.state.selected_session_mut()?;
        session.score = Some(score);
        session.note = note.clone();
        info!(session_id = %session.id, score, "note generated");

        self.persist();
        Ok(note)
    }

    /// Remove the selected session. Confirmation is the shell's job.
    pub fn delete_session(&mut self) -> Result<Session, AppError> {
        let id = self
            .state
            .selected_session
            .clone()
            .ok_or(AppError::NoSessionSelected)?;
        let removed = self
            .state
            .selected_patient_mut()?
            .remove_session(&id)
            .ok_or(AppError::NoSessionSelected)?;

        self.state.selected_session = None;
        info!(session_id = %id, "session deleted");
        self.persist();
        Ok(removed)
    }

    /// Put the selected session's note on the clipboard.
    pub fn copy_note<C: Clipboard + ?Sized>(&self, clipboard: &mut C) -> Result<(), AppError> {
        let (_, session) = self.state.selected_session()?;
        if session.note.trim().is_empty() {
            return Err(AppError::Validation(NOTHING_TO_COPY.to_string()));
        }
        clipboard.write_text(&session.note).map_err(|e| {
            warn!(error = %e, "clipboard write failed");
            AppError::from(e)
        })
    }

    /// Draw the selected patient's score history.
    pub fn render_chart<T: Surface + ?Sized>(&self, surface: &mut T) -> Result<(), AppError> {
        let patient = self.state.selected_patient()?;
        render_score_chart(surface, patient, &self.config.chart);
        Ok(())
    }

    /// Explicit save. Unlike the automatic write after each action, a
    /// failure is returned to the caller.
    pub fn save(&mut self) -> Result<(), AppError> {
        save_state(&mut self.store, &self.config.storage_key, &self.state.snapshot)?;
        Ok(())
    }

    fn update_session(&mut self, update: impl FnOnce(&mut Session)) -> Result<(), AppError> {
        let session = self.state.selected_session_mut()?;
        update(session);
        self.persist();
        Ok(())
    }

    fn persist(&mut self) {
        if let Err(e) = save_state(&mut self.store, &self.config.storage_key, &self.state.snapshot)
        {
            warn!(error = %e, "failed to persist state");
        }
    }
}
