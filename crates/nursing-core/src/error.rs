//! Error types for the command layer.

use std::fmt;

/// The numeric vital-signs fields, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VitalField {
    Temperature,
    HeartRate,
    RespiratoryRate,
    OxygenSaturation,
}

impl VitalField {
    /// Human-readable field name.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::HeartRate => "heart rate",
            Self::RespiratoryRate => "respiratory rate",
            Self::OxygenSaturation => "oxygen saturation",
        }
    }
}

impl fmt::Display for VitalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error type for record commands.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// A numeric vital-signs field was empty or not a number.
    #[error("invalid numeric input for {field}: {input:?}")]
    InvalidNumericInput { field: VitalField, input: String },
}

impl RecordError {
    /// The field that failed to parse.
    #[must_use]
    pub fn field(&self) -> VitalField {
        match self {
            Self::InvalidNumericInput { field, .. } => *field,
        }
    }
}
