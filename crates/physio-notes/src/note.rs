use serde::Serialize;
use tracing::debug;

use physio_core::catalog::{self, complaint};
use physio_core::dates;
use physio_core::models::{Patient, Session};
use physio_scoring::{calculate_score, ScoreCategory};

use crate::error::NoteError;
use crate::render::render_template;

/// Region label used when neither the session nor the patient names one.
pub const REGION_PLACEHOLDER: &str = "nicht näher spezifiziert";

/// Objective findings implied by specific complaint flags, in note order.
const OBJECTIVE_FINDINGS: &[(&str, &str)] = &[
    (
        complaint::LIMITED_ROM,
        "Beweglichkeit in der betroffenen Region reduziert.",
    ),
    (
        complaint::WEAKNESS,
        "Kraftdefizite in relevanten Muskelgruppen.",
    ),
    (
        complaint::INSTABILITY,
        "subjektives Instabilitätsgefühl, Stabilitätskontrolle überprüft.",
    ),
];

/// Written instead of specific findings when none of the flags are set.
pub const OBJECTIVE_FALLBACK: &str =
    "Muskel- und Gelenkfunktion orientierend untersucht, weitere Tests je nach Verlauf.";

const TEMPLATE_NAME: &str = "soap_note.txt";

// One physical line per section: Tera keeps template newlines verbatim.
// Sentences are joined with a leading space so no line ends in whitespace.
const TEMPLATE: &str = concat!(
    "{{ session_type }} am {{ date }} – Region: {{ region }}\n",
    "\n",
    "Subjektiv: Patient:in berichtet über ",
    "{% if complaints %}{{ complaints | join(sep=\", \") }}{% else %}Beschwerden{% endif %}",
    " im Bereich {{ region }}.",
    "{% if pain is number %} Schmerzintensität aktuell {{ pain }}/10.{% endif %}",
    "{% if function is number %} Alltags\u{00AD}einschränkung wird mit {{ function }}/10 angegeben.{% endif %}\n",
    "\n",
    "Objektiv: {{ findings | join(sep=\" \") }}\n",
    "\n",
    "Assessment: Beschwerde-Score {{ score }}/100 ({{ category }}). ",
    "Klinischer Befund vereinbar mit funktionellen Einschränkungen der Region {{ region }}. ",
    "Prognose abhängig von Therapieadhärenz und Belastungsanpassung.",
    "{% if speech_notes %} Zusatznotizen: {{ speech_notes }}{% endif %}\n",
    "\n",
    "Plan: ",
    "{% if measures %}Heute durchgeführt: {{ measures | join(sep=\", \") }}. ",
    "{% else %}Heutige Behandlung symptomorientiert durchgeführt. {% endif %}",
    "Fortführung der Behandlung, Anpassung der Belastung im Alltag, ",
    "Heimübungsprogramm je nach Verlauf.",
);

/// Everything the note template needs, resolved to display strings.
#[derive(Debug, Serialize)]
struct NoteContext {
    session_type: &'static str,
    date: String,
    region: String,
    complaints: Vec<String>,
    measures: Vec<String>,
    pain: Option<u8>,
    function: Option<u8>,
    findings: Vec<&'static str>,
    score: u8,
    category: &'static str,
    speech_notes: Option<String>,
}

impl NoteContext {
    fn resolve(patient: &Patient, session: &Session) -> Self {
        let region = session
            .region()
            .or_else(|| patient.main_region())
            .unwrap_or(REGION_PLACEHOLDER)
            .to_string();

        let complaints: Vec<String> = session
            .complaints
            .iter()
            .map(|id| catalog::complaint_label(id).to_string())
            .collect();

        let measures = session
            .measures
            .iter()
            .map(|id| catalog::measure_label(id).to_string())
            .collect();

        let score = session.score.unwrap_or_else(|| {
            calculate_score(
                session.pain_or_default(),
                session.function_or_default(),
                complaints.len(),
            )
        });

        let speech_notes = Some(session.speech_notes.trim())
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Self {
            session_type: session.session_type.label(),
            date: dates::label(session.date),
            region,
            complaints,
            measures,
            pain: session.pain,
            function: session.function,
            findings: objective_findings(session),
            score,
            category: ScoreCategory::from_score(score).label(),
            speech_notes,
        }
    }
}

/// Specific findings for the flagged complaints, or the generic fallback
/// alone when none are flagged.
pub fn objective_findings(session: &Session) -> Vec<&'static str> {
    let findings: Vec<&'static str> = OBJECTIVE_FINDINGS
        .iter()
        .filter(|(id, _)| session.has_complaint(id))
        .map(|(_, sentence)| *sentence)
        .collect();

    if findings.is_empty() {
        vec![OBJECTIVE_FALLBACK]
    } else {
        findings
    }
}

/// Draft the four-section note (Subjektiv / Objektiv / Assessment / Plan)
/// under a one-line header.
///
/// Pure: the same patient and session always produce the same text. A
/// cached `session.score` is used as is; otherwise the score is computed
/// from the current ratings.
pub fn generate_note(patient: &Patient, session: &Session) -> Result<String, NoteError> {
    let context = NoteContext::resolve(patient, session);
    let note = render_template(TEMPLATE_NAME, TEMPLATE, &context)?;

    debug!(
        session_id = %session.id,
        score = context.score,
        len = note.len(),
        "note generated"
    );
    Ok(note)
}
