//! Patient observation record and its two sub-records.
//!
//! `PatientObservation` is the record holder: it owns at most one
//! `VitalSigns` and one `NursingNotes`, and every save replaces the
//! previous value wholesale.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// A snapshot of physiological measurements.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VitalSigns {
    blood_pressure: String,
    #[serde(serialize_with = "serialize_decimal")]
    temperature: f64,
    heart_rate: i64,
    respiratory_rate: i64,
    oxygen_saturation: i64,
    blood_glucose: Option<f64>,
}

impl VitalSigns {
    /// Create a snapshot. Blood glucose is not collected and stays unset.
    #[must_use]
    pub fn new(
        blood_pressure: impl Into<String>,
        temperature: f64,
        heart_rate: i64,
        respiratory_rate: i64,
        oxygen_saturation: i64,
    ) -> Self {
        Self {
            blood_pressure: blood_pressure.into(),
            temperature,
            heart_rate,
            respiratory_rate,
            oxygen_saturation,
            blood_glucose: None,
        }
    }

    /// Blood pressure as entered (free text, e.g. "120/80").
    #[must_use]
    pub fn blood_pressure(&self) -> &str {
        &self.blood_pressure
    }

    #[must_use]
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    #[must_use]
    pub fn heart_rate(&self) -> i64 {
        self.heart_rate
    }

    #[must_use]
    pub fn respiratory_rate(&self) -> i64 {
        self.respiratory_rate
    }

    #[must_use]
    pub fn oxygen_saturation(&self) -> i64 {
        self.oxygen_saturation
    }

    #[must_use]
    pub fn blood_glucose(&self) -> Option<f64> {
        self.blood_glucose
    }
}

/// Write finite values as JSON numbers and `inf`/`-inf`/`NaN` as strings,
/// which JSON numbers cannot hold.
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if value.is_finite() {
        serializer.serialize_f64(*value)
    } else {
        serializer.collect_str(value)
    }
}

/// Free-text nursing notes.
///
/// `procedures` and `complications` have no input on the notes form and are
/// always empty in this version.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct NursingNotes {
    complaints: String,
    observations: String,
    procedures: Vec<String>,
    complications: Vec<String>,
}

impl NursingNotes {
    /// Create notes with empty procedure and complication lists.
    #[must_use]
    pub fn new(complaints: impl Into<String>, observations: impl Into<String>) -> Self {
        Self {
            complaints: complaints.into(),
            observations: observations.into(),
            procedures: Vec::new(),
            complications: Vec::new(),
        }
    }

    #[must_use]
    pub fn complaints(&self) -> &str {
        &self.complaints
    }

    #[must_use]
    pub fn observations(&self) -> &str {
        &self.observations
    }

    #[must_use]
    pub fn procedures(&self) -> &[String] {
        &self.procedures
    }

    #[must_use]
    pub fn complications(&self) -> &[String] {
        &self.complications
    }
}

/// The observation record for one patient.
///
/// Identifier and creation time are fixed at construction. The two
/// sub-records go from absent to present and can be overwritten, never
/// cleared.
#[derive(Debug, Clone, Serialize)]
pub struct PatientObservation {
    id: String,
    created_at: DateTime<Utc>,
    vital_signs: Option<VitalSigns>,
    nursing_notes: Option<NursingNotes>,
}

impl PatientObservation {
    /// Create an empty observation stamped with the current time.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            created_at: Utc::now(),
            vital_signs: None,
            nursing_notes: None,
        }
    }

    /// Replace the current vital signs.
    pub fn set_vital_signs(&mut self, vitals: VitalSigns) {
        self.vital_signs = Some(vitals);
    }

    /// Replace the current nursing notes.
    ///
    /// Despite the name this does not accumulate: the previous notes are
    /// dropped.
    pub fn add_notes(&mut self, notes: NursingNotes) {
        self.nursing_notes = Some(notes);
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub fn vital_signs(&self) -> Option<&VitalSigns> {
        self.vital_signs.as_ref()
    }

    #[must_use]
    pub fn nursing_notes(&self) -> Option<&NursingNotes> {
        self.nursing_notes.as_ref()
    }

    /// Render the record as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
