use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One recognition result as delivered by the platform recognizer.
/// Interim results are revised later and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TranscriptEvent {
    pub text: String,
    pub is_final: bool,
}

impl TranscriptEvent {
    pub fn interim(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: false,
        }
    }

    pub fn final_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_final: true,
        }
    }
}

/// Append the final chunks of `events`, in delivery order, to `current`.
///
/// Chunks are space-joined and the result is trimmed. Returns `None` when
/// the batch holds no final text, so callers can skip the write.
pub fn append_final(current: &str, events: &[TranscriptEvent]) -> Option<String> {
    let chunks: Vec<&str> = events
        .iter()
        .filter(|e| e.is_final)
        .map(|e| e.text.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if chunks.is_empty() {
        return None;
    }

    let addition = chunks.join(" ");
    let current = current.trim();
    if current.is_empty() {
        Some(addition)
    } else {
        Some(format!("{current} {addition}"))
    }
}
