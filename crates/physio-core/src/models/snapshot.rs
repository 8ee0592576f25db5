use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::patient::Patient;

/// The persisted state: the patient list and nothing else. Selection is
/// ephemeral and never written.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snapshot {
    pub patients: Vec<Patient>,
}
