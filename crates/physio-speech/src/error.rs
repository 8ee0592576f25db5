use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpeechError {
    #[error("speech recognition is not available on this platform")]
    Unavailable,

    /// Reported by the platform recognizer, at start or while listening.
    #[error("speech recognizer error: {0}")]
    Recognizer(String),
}
