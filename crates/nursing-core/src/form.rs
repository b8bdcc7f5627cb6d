//! Raw form contents and their conversion into record values.

use std::str::FromStr;

use crate::error::{RecordError, VitalField};
use crate::model::{NursingNotes, VitalSigns};

/// Text of the five vital-signs fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VitalSignsForm {
    pub blood_pressure: String,
    pub temperature: String,
    pub heart_rate: String,
    pub respiratory_rate: String,
    pub oxygen_saturation: String,
}

impl VitalSignsForm {
    /// Convert the form into a `VitalSigns` snapshot.
    ///
    /// Blood pressure is kept verbatim. Numeric fields may carry
    /// surrounding whitespace; empty or non-numeric text fails on the
    /// first offending field in form order and nothing is produced.
    pub fn parse(&self) -> Result<VitalSigns, RecordError> {
        let temperature = parse_field::<f64>(VitalField::Temperature, &self.temperature)?;
        let heart_rate = parse_field::<i64>(VitalField::HeartRate, &self.heart_rate)?;
        let respiratory_rate =
            parse_field::<i64>(VitalField::RespiratoryRate, &self.respiratory_rate)?;
        let oxygen_saturation =
            parse_field::<i64>(VitalField::OxygenSaturation, &self.oxygen_saturation)?;

        Ok(VitalSigns::new(
            self.blood_pressure.clone(),
            temperature,
            heart_rate,
            respiratory_rate,
            oxygen_saturation,
        ))
    }
}

fn parse_field<T: FromStr>(field: VitalField, raw: &str) -> Result<T, RecordError> {
    raw.trim()
        .parse()
        .map_err(|_| RecordError::InvalidNumericInput {
            field,
            input: raw.to_string(),
        })
}

/// Text of the two notes fields, exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotesForm {
    pub complaints: String,
    pub observations: String,
}

impl NotesForm {
    /// Build `NursingNotes` with surrounding whitespace trimmed.
    #[must_use]
    pub fn to_notes(&self) -> NursingNotes {
        NursingNotes::new(self.complaints.trim(), self.observations.trim())
    }
}
