//! Application entry point and dispatch.

use anyhow::Result;
use tracing::info;

use nursing_core::{ObservationController, PatientObservation};
use nursing_tui::TuiApp;

use crate::config::AppConfig;
use crate::logging::LogSink;

/// Run the application.
///
/// Log events are held in `logs` while the TUI owns the terminal.
pub fn run(config: &AppConfig, logs: &LogSink) -> Result<()> {
    let controller = ObservationController::new(config.patient_id());
    info!(patient = config.patient_id(), "session started");

    logs.hold();
    let outcome = run_tui(controller);
    logs.release()?;
    let observation = outcome?;
    info!(patient = observation.id(), "session closed");

    if config.print_record {
        println!("{}", render_record(&observation)?);
    }

    Ok(())
}

fn run_tui(controller: ObservationController) -> Result<PatientObservation> {
    let mut app = TuiApp::new(controller);
    app.run().map_err(|e| anyhow::anyhow!("TUI error: {e}"))?;
    Ok(app.into_controller().into_observation())
}

/// Pretty JSON for the `--print-record` summary.
pub fn render_record(observation: &PatientObservation) -> Result<String> {
    Ok(observation.to_json_pretty()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursing_core::{NotesForm, NullPresenter, VitalSignsForm};

    #[test]
    fn record_summary_includes_saved_values() {
        let mut controller = ObservationController::new("12345");
        let form = VitalSignsForm {
            blood_pressure: "120/80".into(),
            temperature: "36.5".into(),
            heart_rate: "72".into(),
            respiratory_rate: "16".into(),
            oxygen_saturation: "98".into(),
        };
        controller
            .save_vital_signs(&form, &mut NullPresenter)
            .unwrap();
        controller.save_notes(
            &NotesForm {
                complaints: "none".into(),
                observations: "stable".into(),
            },
            &mut NullPresenter,
        );

        let json = render_record(controller.observation()).unwrap();
        assert!(json.contains("\"id\": \"12345\""));
        assert!(json.contains("\"blood_pressure\": \"120/80\""));
        assert!(json.contains("\"observations\": \"stable\""));
    }
}
