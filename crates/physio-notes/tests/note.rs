use jiff::civil::date;
use physio_core::models::{Patient, Session, SessionType};
use physio_notes::note::{objective_findings, OBJECTIVE_FALLBACK, REGION_PLACEHOLDER};
use physio_notes::generate_note;

fn anna() -> (Patient, Session) {
    let patient = Patient::new("Anna Muster", None, Some("Knie".to_string()));
    let mut session = Session::new(
        patient.next_session_type(),
        Some(date(2024, 3, 7)),
        patient.main_region.clone(),
    );
    session.set_pain(7);
    session.set_function(6);
    session.toggle_complaint("pain");
    session.toggle_complaint("limited_rom");
    (patient, session)
}

fn sections(note: &str) -> Vec<&str> {
    note.split("\n\n").collect()
}

#[test]
fn end_to_end_note_for_initial_session() {
    let (patient, session) = anna();
    let note = generate_note(&patient, &session).unwrap();

    let expected = "Erstbefund am 7.3.2024 – Region: Knie\n\
        \n\
        Subjektiv: Patient:in berichtet über Schmerz, Beweglichkeit ↓ im Bereich Knie. \
        Schmerzintensität aktuell 7/10. Alltags\u{00AD}einschränkung wird mit 6/10 angegeben.\n\
        \n\
        Objektiv: Beweglichkeit in der betroffenen Region reduziert.\n\
        \n\
        Assessment: Beschwerde-Score 60/100 (moderate Beschwerden). \
        Klinischer Befund vereinbar mit funktionellen Einschränkungen der Region Knie. \
        Prognose abhängig von Therapieadhärenz und Belastungsanpassung.\n\
        \n\
        Plan: Heutige Behandlung symptomorientiert durchgeführt. \
        Fortführung der Behandlung, Anpassung der Belastung im Alltag, \
        Heimübungsprogramm je nach Verlauf.";
    assert_eq!(note, expected);

    let parts = sections(&note);
    assert_eq!(parts.len(), 5);
    assert!(parts[3].contains("Score 60/100"));
    assert!(parts[3].contains("moderate"));
    assert!(!parts[2].contains(OBJECTIVE_FALLBACK));
}

#[test]
fn generation_is_idempotent() {
    let (patient, session) = anna();
    let first = generate_note(&patient, &session).unwrap();
    let second = generate_note(&patient, &session).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_session_gets_defaults_and_all_sections() {
    let patient = Patient::new("Ohne Region", None, None);
    let mut session = Session::new(SessionType::Followup, None, None);
    session.pain = None;
    session.function = None;

    let note = generate_note(&patient, &session).unwrap();
    let parts = sections(&note);

    assert_eq!(parts.len(), 5);
    assert_eq!(
        parts[0],
        format!("Folgetermin am ohne Datum – Region: {REGION_PLACEHOLDER}")
    );
    assert!(parts[1].starts_with("Subjektiv: Patient:in berichtet über Beschwerden im Bereich"));
    assert!(!parts[1].contains("Schmerzintensität"));
    assert!(!parts[1].contains("einschränkung wird"));
    assert_eq!(parts[2], format!("Objektiv: {OBJECTIVE_FALLBACK}"));
    // pain and function default to 5, no complaints: 20 + 20 + 0
    assert!(parts[3].starts_with("Assessment: Beschwerde-Score 40/100 (moderate Beschwerden)."));
    assert!(!parts[3].contains("Zusatznotizen"));
    assert!(parts[4].starts_with("Plan: Heutige Behandlung symptomorientiert durchgeführt."));
}

#[test]
fn zero_ratings_are_still_reported() {
    let (patient, mut session) = anna();
    session.set_pain(0);
    session.set_function(0);
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.contains("Schmerzintensität aktuell 0/10."));
    assert!(note.contains("Alltags\u{00AD}einschränkung wird mit 0/10 angegeben."));
}

#[test]
fn cached_score_wins_over_recomputation() {
    let (patient, mut session) = anna();
    session.score = Some(80);
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.contains("Beschwerde-Score 80/100 (ausgeprägte Beschwerden)."));
}

#[test]
fn objective_lists_each_specific_finding_without_fallback() {
    let (patient, mut session) = anna();
    session.toggle_complaint("instability");
    session.toggle_complaint("weakness");

    let findings = objective_findings(&session);
    assert_eq!(findings.len(), 3);
    assert!(!findings.contains(&OBJECTIVE_FALLBACK));

    let note = generate_note(&patient, &session).unwrap();
    assert_eq!(
        sections(&note)[2],
        "Objektiv: Beweglichkeit in der betroffenen Region reduziert. \
         Kraftdefizite in relevanten Muskelgruppen. \
         subjektives Instabilitätsgefühl, Stabilitätskontrolle überprüft."
    );
}

#[test]
fn unknown_ids_pass_through_and_measures_are_listed() {
    let (patient, mut session) = anna();
    session.toggle_complaint("dizziness");
    session.toggle_measure("mt");
    session.toggle_measure("cryo");

    let note = generate_note(&patient, &session).unwrap();
    assert!(note.contains("berichtet über Schmerz, Beweglichkeit ↓, dizziness im Bereich Knie."));
    assert!(note.contains("Plan: Heute durchgeführt: Manuelle Therapie (MT), cryo. Fortführung"));
}

#[test]
fn speech_notes_are_trimmed_into_assessment() {
    let (patient, mut session) = anna();
    session.speech_notes = "  Treppensteigen schmerzhaft  ".to_string();
    let note = generate_note(&patient, &session).unwrap();
    assert!(sections(&note)[3].ends_with(
        "Belastungsanpassung. Zusatznotizen: Treppensteigen schmerzhaft"
    ));
}

#[test]
fn speech_notes_keep_their_inner_line_breaks_and_spacing() {
    let (patient, mut session) = anna();
    session.speech_notes = "Zeile eins   \r\nZeile zwei".to_string();
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.contains("Zusatznotizen: Zeile eins   \r\nZeile zwei\n\nPlan: "));
}

#[test]
fn no_generated_line_ends_in_whitespace() {
    let (patient, mut session) = anna();
    session.pain = None;
    session.function = None;
    session.toggle_measure("edu");
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.lines().all(|line| line == line.trim_end()));
    assert!(note.contains("Heute durchgeführt: Patienten\u{00AD}edukation."));
}

#[test]
fn session_region_overrides_patient_region() {
    let (patient, mut session) = anna();
    session.region = Some("Schulter".to_string());
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.starts_with("Erstbefund am 7.3.2024 – Region: Schulter\n"));
    assert!(note.contains("der Region Schulter."));
}

#[test]
fn template_syntax_in_user_text_is_not_interpreted() {
    let (patient, mut session) = anna();
    session.speech_notes = "{{ region }} <b>&".to_string();
    let note = generate_note(&patient, &session).unwrap();
    assert!(note.contains("Zusatznotizen: {{ region }} <b>&"));
}
