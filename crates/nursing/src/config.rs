//! Application configuration from CLI flags and environment.

use clap::Parser;

use nursing_core::DEFAULT_PATIENT_ID;

/// Nursing record: vital signs and nursing notes for one patient.
#[derive(Parser, Debug)]
#[command(name = "nursing", version, about)]
pub struct AppConfig {
    /// Identifier of the patient being observed.
    #[arg(long, default_value = DEFAULT_PATIENT_ID, env = "NURSING_PATIENT_ID")]
    pub patient_id: String,

    /// Print the final record as JSON after the window closes.
    #[arg(long)]
    pub print_record: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Patient identifier with surrounding whitespace removed, falling back
    /// to the default when nothing is left.
    #[must_use]
    pub fn patient_id(&self) -> &str {
        match self.patient_id.trim() {
            "" => DEFAULT_PATIENT_ID,
            id => id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::try_parse_from(["nursing"]).unwrap();
        assert_eq!(config.patient_id(), "12345");
        assert!(!config.print_record);
    }

    #[test]
    fn explicit_flags() {
        let config =
            AppConfig::try_parse_from(["nursing", "--patient-id", "A-77", "--print-record"])
                .unwrap();
        assert_eq!(config.patient_id(), "A-77");
        assert!(config.print_record);
    }

    #[test]
    fn blank_patient_id_falls_back() {
        let config = AppConfig::try_parse_from(["nursing", "--patient-id", "  "]).unwrap();
        assert_eq!(config.patient_id(), DEFAULT_PATIENT_ID);
    }

    #[test]
    fn unknown_flag_rejected() {
        assert!(AppConfig::try_parse_from(["nursing", "--persist"]).is_err());
    }
}
