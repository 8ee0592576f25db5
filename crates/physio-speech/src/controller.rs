use tracing::{info, warn};

use crate::error::SpeechError;

/// Explains why the dictation control is disabled.
pub const UNAVAILABLE_HINT: &str =
    "Sprachfunktion in diesem Browser nicht verfügbar (am besten Chrome verwenden).";

/// Platform speech recognizer (continuous, interim results enabled).
pub trait Recognizer {
    /// Begin listening for `language`, a BCP 47 tag such as `de-DE`.
    fn start(&mut self, language: &str) -> Result<(), SpeechError>;

    fn stop(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeechStatus {
    /// No recognizer on this platform; the control stays disabled.
    Unavailable,
    Ready,
    Recording,
    /// The recognizer reported an error; starting again is allowed.
    Failed,
}

impl SpeechStatus {
    pub fn indicator_text(&self) -> &'static str {
        match self {
            SpeechStatus::Unavailable => "Mikro nicht verfügbar",
            SpeechStatus::Ready => "Mikro bereit",
            SpeechStatus::Recording => "Mikro aktiv – Aufnahme läuft",
            SpeechStatus::Failed => "Fehler bei Spracheingabe",
        }
    }

    pub fn toggle_label(&self) -> &'static str {
        match self {
            SpeechStatus::Recording => "⏹️ Aufnahme stoppen",
            _ => "🎙️ Aufnahme starten",
        }
    }
}

/// Start/stop state around an optional recognizer.
pub struct SpeechController<R> {
    recognizer: Option<R>,
    language: String,
    status: SpeechStatus,
    last_error: Option<SpeechError>,
}

impl<R: Recognizer> SpeechController<R> {
    pub fn new(recognizer: R, language: impl Into<String>) -> Self {
        Self {
            recognizer: Some(recognizer),
            language: language.into(),
            status: SpeechStatus::Ready,
            last_error: None,
        }
    }

    /// A controller for platforms without speech recognition. Every start
    /// attempt fails with [`SpeechError::Unavailable`]; the rest of the
    /// application is unaffected.
    pub fn unavailable() -> Self {
        Self {
            recognizer: None,
            language: String::new(),
            status: SpeechStatus::Unavailable,
            last_error: None,
        }
    }

    pub fn status(&self) -> SpeechStatus {
        self.status
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The most recent recognizer failure, cleared by a successful start.
    pub fn last_error(&self) -> Option<&SpeechError> {
        self.last_error.as_ref()
    }

    pub fn recognizer(&self) -> Option<&R> {
        self.recognizer.as_ref()
    }

    pub fn is_available(&self) -> bool {
        self.recognizer.is_some()
    }

    pub fn is_recording(&self) -> bool {
        self.status == SpeechStatus::Recording
    }

    /// The disabled-control hint, if recognition is unavailable.
    pub fn hint(&self) -> Option<&'static str> {
        (!self.is_available()).then_some(UNAVAILABLE_HINT)
    }

    pub fn start(&mut self) -> Result<(), SpeechError> {
        let recognizer = self.recognizer.as_mut().ok_or(SpeechError::Unavailable)?;
        if self.status == SpeechStatus::Recording {
            return Ok(());
        }
        match recognizer.start(&self.language) {
            Ok(()) => {
                self.status = SpeechStatus::Recording;
                self.last_error = None;
                info!(language = %self.language, "speech recognition started");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "speech recognition failed to start");
                self.status = SpeechStatus::Failed;
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }

    /// Stop listening. Calling this while not recording does nothing.
    pub fn stop(&mut self) {
        if self.status != SpeechStatus::Recording {
            return;
        }
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.stop();
        }
        self.status = SpeechStatus::Ready;
        info!("speech recognition stopped");
    }

    pub fn toggle(&mut self) -> Result<(), SpeechError> {
        if self.is_recording() {
            self.stop();
            Ok(())
        } else {
            self.start()
        }
    }

    /// The recognizer ended on its own (silence timeout, page hidden).
    pub fn on_end(&mut self) {
        if self.status == SpeechStatus::Recording {
            self.status = SpeechStatus::Ready;
        }
    }

    pub fn on_error(&mut self, message: &str) {
        warn!(error = message, "speech recognition error");
        if self.is_available() {
            self.status = SpeechStatus::Failed;
            self.last_error = Some(SpeechError::Recognizer(message.to_string()));
        }
    }
}
