use jiff::civil::date;
use physio_core::catalog::{self, complaint};
use physio_core::dates;
use physio_core::models::{Patient, Session, SessionId, SessionType, Snapshot};

const BROWSER_SNAPSHOT: &str = r#"{
  "patients": [
    {
      "id": "3f1c2a9e-0000-4000-8000-000000000001",
      "name": "Anna Muster",
      "birthYear": null,
      "mainRegion": "Knie",
      "sessions": [
        {
          "id": "s-1",
          "type": "initial",
          "date": "2024-03-07",
          "region": "Knie",
          "complaints": ["pain", "limited_rom"],
          "measures": ["mt"],
          "pain": 7,
          "function": 6,
          "speechNotes": "",
          "note": "",
          "score": 60
        },
        {
          "id": "s-2",
          "type": "followup",
          "date": "",
          "region": "",
          "complaints": [],
          "measures": [],
          "pain": 5,
          "function": 5,
          "speechNotes": "",
          "note": "",
          "score": null
        }
      ]
    }
  ]
}"#;

#[test]
fn reads_snapshot_written_by_browser_app() {
    let snapshot: Snapshot = serde_json::from_str(BROWSER_SNAPSHOT).unwrap();
    let patient = &snapshot.patients[0];

    assert_eq!(patient.name, "Anna Muster");
    assert_eq!(patient.birth_year, None);
    assert_eq!(patient.main_region(), Some("Knie"));
    assert_eq!(patient.sessions.len(), 2);

    let first = &patient.sessions[0];
    assert_eq!(first.session_type, SessionType::Initial);
    assert_eq!(first.date, Some(date(2024, 3, 7)));
    assert_eq!(first.score, Some(60));

    let second = &patient.sessions[1];
    assert_eq!(second.date, None);
    assert_eq!(second.region(), None);
}

#[test]
fn snapshot_uses_camel_case_keys() {
    let mut patient = Patient::new("Ben", Some(1980), Some("LWS".to_string()));
    patient
        .sessions
        .push(Session::new(SessionType::Initial, Some(date(2024, 1, 2)), None));
    let json = serde_json::to_value(Snapshot {
        patients: vec![patient],
    })
    .unwrap();

    let p = &json["patients"][0];
    assert_eq!(p["birthYear"], 1980);
    assert_eq!(p["mainRegion"], "LWS");
    let s = &p["sessions"][0];
    assert_eq!(s["type"], "initial");
    assert_eq!(s["date"], "2024-01-02");
    assert_eq!(s["speechNotes"], "");
    assert!(s["score"].is_null());
}

#[test]
fn missing_optional_session_fields_use_defaults() {
    let session: Session = serde_json::from_str(r#"{ "id": "abc" }"#).unwrap();
    assert_eq!(session.id, SessionId::from("abc"));
    // anything not explicitly initial is a follow-up
    assert_eq!(session.session_type, SessionType::Followup);
    assert_eq!(session.session_type.label(), "Folgetermin");
    assert!(session.complaints.is_empty());
    assert_eq!(session.pain, None);
    assert_eq!(session.pain_or_default(), 5);
}

#[test]
fn unknown_catalog_ids_fall_back_to_id() {
    assert_eq!(catalog::complaint_label(complaint::LIMITED_ROM), "Beweglichkeit ↓");
    assert_eq!(catalog::measure_label("mt"), "Manuelle Therapie (MT)");
    assert_eq!(catalog::complaint_label("dizziness"), "dizziness");
    assert_eq!(catalog::measure_label("edu"), "Patienten\u{00AD}edukation");
}

#[test]
fn toggling_complaints_and_clamping_ratings() {
    let mut session = Session::new(SessionType::Initial, None, None);
    session.toggle_complaint(complaint::PAIN);
    session.toggle_complaint(complaint::WEAKNESS);
    session.toggle_complaint(complaint::PAIN);
    assert_eq!(session.complaints, vec![complaint::WEAKNESS.to_string()]);

    session.set_pain(14);
    session.set_function(3);
    assert_eq!(session.pain, Some(10));
    assert_eq!(session.function, Some(3));
}

#[test]
fn sessions_sort_newest_first_with_undated_last() {
    let mut patient = Patient::new("Clara", None, None);
    patient
        .sessions
        .push(Session::new(SessionType::Initial, Some(date(2024, 1, 10)), None));
    patient
        .sessions
        .push(Session::new(SessionType::Followup, None, None));
    patient
        .sessions
        .push(Session::new(SessionType::Followup, Some(date(2024, 2, 1)), None));

    let dates: Vec<_> = patient
        .sessions_recent_first()
        .iter()
        .map(|s| s.date)
        .collect();
    assert_eq!(dates, vec![Some(date(2024, 2, 1)), Some(date(2024, 1, 10)), None]);
    assert_eq!(patient.next_session_type(), SessionType::Followup);
}

#[test]
fn short_dates_are_not_zero_padded() {
    assert_eq!(dates::format_short(date(2024, 3, 7)), "7.3.2024");
    assert_eq!(dates::label(None), "ohne Datum");
    assert_eq!(dates::parse_iso("  ").unwrap(), None);
    assert!(dates::parse_iso("07.03.2024").is_err());
}

#[test]
fn out_of_range_ratings_and_scores_are_clamped_on_load() {
    let session: Session = serde_json::from_str(
        r#"{ "id": "s", "type": "initial", "pain": 15, "function": -2, "score": 150.4 }"#,
    )
    .unwrap();
    assert_eq!(session.pain, Some(10));
    assert_eq!(session.function, Some(0));
    assert_eq!(session.score, Some(100));

    let session: Session =
        serde_json::from_str(r#"{ "id": "s", "pain": 6.6, "function": null }"#).unwrap();
    assert_eq!(session.pain, Some(7));
    assert_eq!(session.function, None);
    assert_eq!(session.score, None);
}

#[test]
fn only_initial_reads_as_initial_assessment() {
    for (raw, expected) in [
        (r#"{ "id": "s", "type": "initial" }"#, SessionType::Initial),
        (r#"{ "id": "s", "type": "followup" }"#, SessionType::Followup),
        (r#"{ "id": "s", "type": null }"#, SessionType::Followup),
        (r#"{ "id": "s", "type": "kontrolle" }"#, SessionType::Followup),
    ] {
        let session: Session = serde_json::from_str(raw).unwrap();
        assert_eq!(session.session_type, expected, "{raw}");
    }
}
