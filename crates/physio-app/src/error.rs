use thiserror::Error;

use physio_core::error::CoreError;
use physio_core::models::{PatientId, SessionId};
use physio_notes::error::NoteError;
use physio_storage::error::StorageError;

use crate::clipboard::ClipboardError;

/// Shown when a patient is submitted without a name.
pub const NAME_REQUIRED: &str = "Bitte gib einen Namen ein.";

/// Shown when copying while the note is blank.
pub const NOTHING_TO_COPY: &str = "Keine Doku zum Kopieren vorhanden.";

#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid user input. The message is meant for the therapist.
    #[error("{0}")]
    Validation(String),

    #[error("no patient selected")]
    NoPatientSelected,

    #[error("no session selected")]
    NoSessionSelected,

    #[error("unknown patient: {0}")]
    UnknownPatient(PatientId),

    #[error("unknown session: {0}")]
    UnknownSession(SessionId),

    #[error("invalid input: {0}")]
    Input(#[from] CoreError),

    #[error("note generation failed: {0}")]
    Note(#[from] NoteError),

    #[error("storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Konnte nicht in die Zwischenablage kopieren. ({0})")]
    Clipboard(#[from] ClipboardError),
}
