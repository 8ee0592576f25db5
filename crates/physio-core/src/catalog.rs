//! Static complaint and measure catalogs.
//!
//! Sessions store catalog ids; labels are resolved here at display time.
//! Ids that are not in the catalog (e.g. from an older snapshot) resolve to
//! themselves.

use serde::Serialize;

/// A selectable option: a stable id and the label shown to the therapist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// Complaint ids referenced by the note generator.
pub mod complaint {
    pub const PAIN: &str = "pain";
    pub const STIFFNESS: &str = "stiffness";
    pub const WEAKNESS: &str = "weakness";
    pub const NUMBNESS: &str = "numbness";
    pub const INSTABILITY: &str = "instability";
    pub const LIMITED_ROM: &str = "limited_rom";
    pub const SWELLING: &str = "swelling";
}

/// Measure ids.
pub mod measure {
    pub const MANUAL_THERAPY: &str = "mt";
    pub const PHYSIOTHERAPY: &str = "pt";
    pub const LYMPH_DRAINAGE: &str = "ml";
    pub const EXERCISE: &str = "exercise";
    pub const EDUCATION: &str = "edu";
    pub const TAPING: &str = "taping";
    pub const DEVICE_TRAINING: &str = "device";
}

pub const COMPLAINTS: &[CatalogOption] = &[
    option(complaint::PAIN, "Schmerz"),
    option(complaint::STIFFNESS, "Steifigkeit"),
    option(complaint::WEAKNESS, "Schwäche"),
    option(complaint::NUMBNESS, "Taubheit / Kribbeln"),
    option(complaint::INSTABILITY, "Instabilität"),
    option(complaint::LIMITED_ROM, "Beweglichkeit ↓"),
    option(complaint::SWELLING, "Schwellung"),
];

pub const MEASURES: &[CatalogOption] = &[
    option(measure::MANUAL_THERAPY, "Manuelle Therapie (MT)"),
    option(measure::PHYSIOTHERAPY, "Krankengymnastik (KG)"),
    option(measure::LYMPH_DRAINAGE, "Lymphdrainage (MLD)"),
    option(measure::EXERCISE, "aktive Übungen"),
    option(measure::EDUCATION, "Patienten\u{00AD}edukation"),
    option(measure::TAPING, "Taping"),
    option(measure::DEVICE_TRAINING, "Gerätetraining"),
];

const fn option(id: &'static str, label: &'static str) -> CatalogOption {
    CatalogOption { id, label }
}

/// Label for a complaint id, or the id itself when unknown.
pub fn complaint_label(id: &str) -> &str {
    label_or_id(COMPLAINTS, id)
}

/// Label for a measure id, or the id itself when unknown.
pub fn measure_label(id: &str) -> &str {
    label_or_id(MEASURES, id)
}

fn label_or_id<'a>(options: &'static [CatalogOption], id: &'a str) -> &'a str {
    options
        .iter()
        .find(|o| o.id == id)
        .map(|o| o.label)
        .unwrap_or(id)
}
