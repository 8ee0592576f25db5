use physio_speech::error::SpeechError;
use physio_speech::{append_final, Recognizer, SpeechController, SpeechStatus, TranscriptEvent};

#[derive(Default)]
struct FakeRecognizer {
    languages: Vec<String>,
    starts: usize,
    stops: usize,
    fail_start: bool,
}

impl Recognizer for FakeRecognizer {
    fn start(&mut self, language: &str) -> Result<(), SpeechError> {
        if self.fail_start {
            return Err(SpeechError::Recognizer("not-allowed".to_string()));
        }
        self.languages.push(language.to_string());
        self.starts += 1;
        Ok(())
    }

    fn stop(&mut self) {
        self.stops += 1;
    }
}

#[test]
fn only_final_chunks_are_appended_in_order() {
    let events = vec![
        TranscriptEvent::interim("Knie schmer"),
        TranscriptEvent::final_text("Knie schmerzt "),
        TranscriptEvent::interim("beim"),
        TranscriptEvent::final_text(" beim Treppensteigen"),
    ];
    assert_eq!(
        append_final("Befund:", &events).as_deref(),
        Some("Befund: Knie schmerzt beim Treppensteigen")
    );
    assert_eq!(
        append_final("  ", &events).as_deref(),
        Some("Knie schmerzt beim Treppensteigen")
    );
}

#[test]
fn interim_only_batches_change_nothing() {
    let events = vec![TranscriptEvent::interim("vorläufig"), TranscriptEvent::final_text("  ")];
    assert_eq!(append_final("bestehend", &events), None);
}

#[test]
fn events_deserialize_from_host_json() {
    let event: TranscriptEvent =
        serde_json::from_str(r#"{"text": "Schulter frei", "isFinal": true}"#).unwrap();
    assert_eq!(event, TranscriptEvent::final_text("Schulter frei"));
}

#[test]
fn stop_is_idempotent() {
    let mut speech = SpeechController::new(FakeRecognizer::default(), "de-DE");
    speech.start().unwrap();
    speech.start().unwrap();
    assert!(speech.is_recording());

    speech.stop();
    speech.stop();
    assert_eq!(speech.status(), SpeechStatus::Ready);
    assert_eq!(speech.status().indicator_text(), "Mikro bereit");

    let recognizer = speech.recognizer().unwrap();
    assert_eq!((recognizer.starts, recognizer.stops), (1, 1));
}

#[test]
fn toggle_switches_between_recording_and_ready() {
    let mut speech = SpeechController::new(FakeRecognizer::default(), "de-DE");
    speech.toggle().unwrap();
    assert_eq!(speech.status().toggle_label(), "⏹️ Aufnahme stoppen");
    speech.toggle().unwrap();
    assert_eq!(speech.status().toggle_label(), "🎙️ Aufnahme starten");
}

#[test]
fn unavailable_platform_degrades_gracefully() {
    let mut speech: SpeechController<FakeRecognizer> = SpeechController::unavailable();
    assert!(!speech.is_available());
    assert!(speech.hint().is_some());
    assert!(matches!(speech.start(), Err(SpeechError::Unavailable)));
    speech.stop();
    assert_eq!(speech.status().indicator_text(), "Mikro nicht verfügbar");
}

#[test]
fn failed_start_and_recognizer_errors_are_recoverable() {
    let mut speech = SpeechController::new(
        FakeRecognizer {
            fail_start: true,
            ..Default::default()
        },
        "de-DE",
    );
    assert!(speech.start().is_err());
    assert_eq!(speech.status(), SpeechStatus::Failed);
    assert_eq!(
        speech.last_error(),
        Some(&SpeechError::Recognizer("not-allowed".to_string()))
    );

    let mut speech = SpeechController::new(FakeRecognizer::default(), "de-DE");
    speech.start().unwrap();
    speech.on_error("network");
    assert_eq!(speech.status(), SpeechStatus::Failed);
    assert_eq!(
        speech.last_error().map(ToString::to_string).as_deref(),
        Some("speech recognizer error: network")
    );
    speech.start().unwrap();
    assert!(speech.is_recording());
    assert!(speech.last_error().is_none());
    speech.on_end();
    assert_eq!(speech.status(), SpeechStatus::Ready);
}

#[test]
fn recognizer_starts_with_the_configured_language() {
    let mut speech = SpeechController::new(FakeRecognizer::default(), "de-AT");
    assert_eq!(speech.language(), "de-AT");
    speech.start().unwrap();
    speech.stop();
    speech.toggle().unwrap();
    assert_eq!(speech.recognizer().unwrap().languages, ["de-AT", "de-AT"]);
}
