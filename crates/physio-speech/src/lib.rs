//! physio-speech
//!
//! Dictation into the session notes. The platform recognizer is an external
//! collaborator behind [`controller::Recognizer`]; it delivers
//! [`transcript::TranscriptEvent`]s, of which only final chunks are kept.

pub mod controller;
pub mod error;
pub mod transcript;

pub use controller::{Recognizer, SpeechController, SpeechStatus};
pub use transcript::{append_final, TranscriptEvent};
