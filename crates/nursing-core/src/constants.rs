//! Fixed identifiers and user-facing messages.

/// Identifier of the observation created at start-up when none is configured.
pub const DEFAULT_PATIENT_ID: &str = "12345";

/// Title shown in the application header.
pub const APP_TITLE: &str = "Nursing Record System";

/// Dialog titles and bodies.
pub mod messages {
    /// Title of the confirmation shown after a successful save.
    pub const SUCCESS_TITLE: &str = "Success";
    /// Body shown after vital signs are saved.
    pub const VITALS_SAVED: &str = "Vital signs recorded!";
    /// Body shown after nursing notes are saved.
    pub const NOTES_SAVED: &str = "Notes recorded!";
    /// Title of the error dialog.
    pub const ERROR_TITLE: &str = "Error";
    /// Generic body of the error dialog. Carries no field detail.
    pub const CHECK_VALUES: &str = "Please check the values entered";
    /// Title of the close confirmation.
    pub const CONFIRM_TITLE: &str = "Confirm";
    /// Body of the close confirmation.
    pub const CONFIRM_CLOSE: &str = "Close the application?";
}
