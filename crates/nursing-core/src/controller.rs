//! Save commands over the single patient observation.
//!
//! `ObservationController` is the application context handed to the view
//! at start-up. The view collects form text; the controller parses it,
//! mutates the record, and reports the outcome through a
//! `FeedbackPresenter`.

use tracing::{debug, info};

use crate::constants::messages;
use crate::error::RecordError;
use crate::form::{NotesForm, VitalSignsForm};
use crate::interfaces::FeedbackPresenter;
use crate::model::PatientObservation;

/// Owns the observation being recorded during this session.
#[derive(Debug)]
pub struct ObservationController {
    observation: PatientObservation,
}

impl ObservationController {
    /// Create a controller around a fresh observation for `patient_id`.
    #[must_use]
    pub fn new(patient_id: impl Into<String>) -> Self {
        Self::with_observation(PatientObservation::new(patient_id))
    }

    /// Create a controller around an existing observation.
    #[must_use]
    pub fn with_observation(observation: PatientObservation) -> Self {
        Self { observation }
    }

    /// Parse the vital-signs form and store the result.
    ///
    /// On a parse failure the record is left untouched, the presenter gets
    /// the generic error message and the error is returned to the caller.
    pub fn save_vital_signs(
        &mut self,
        form: &VitalSignsForm,
        presenter: &mut dyn FeedbackPresenter,
    ) -> Result<(), RecordError> {
        let vitals = match form.parse() {
            Ok(vitals) => vitals,
            Err(err) => {
                debug!(patient = self.observation.id(), field = %err.field(), "vital signs rejected");
                presenter.present_error(messages::ERROR_TITLE, messages::CHECK_VALUES);
                return Err(err);
            }
        };

        self.observation.set_vital_signs(vitals);
        info!(patient = self.observation.id(), "vital signs recorded");
        presenter.present_info(messages::SUCCESS_TITLE, messages::VITALS_SAVED);
        Ok(())
    }

    /// Store the notes form. Cannot fail.
    pub fn save_notes(&mut self, form: &NotesForm, presenter: &mut dyn FeedbackPresenter) {
        self.observation.add_notes(form.to_notes());
        info!(patient = self.observation.id(), "nursing notes recorded");
        presenter.present_info(messages::SUCCESS_TITLE, messages::NOTES_SAVED);
    }

    /// The observation being recorded.
    #[must_use]
    pub fn observation(&self) -> &PatientObservation {
        &self.observation
    }

    /// Consume the controller, returning the observation.
    #[must_use]
    pub fn into_observation(self) -> PatientObservation {
        self.observation
    }
}
