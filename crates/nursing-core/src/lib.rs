//! # nursing-core
//!
//! Data model and command layer for the nursing record: one patient
//! observation, the two entry forms that populate it, and the save
//! operations that connect them. Has no UI dependency.

pub mod constants;
pub mod controller;
pub mod error;
pub mod form;
pub mod interfaces;
pub mod model;

// Re-exports
pub use constants::{messages, DEFAULT_PATIENT_ID};
pub use controller::ObservationController;
pub use error::{RecordError, VitalField};
pub use form::{NotesForm, VitalSignsForm};
pub use interfaces::{FeedbackPresenter, NullPresenter};
pub use model::{NursingNotes, PatientObservation, VitalSigns};
