//! Property-based tests for form parsing and the record holder.

use proptest::prelude::*;

use nursing_core::form::{NotesForm, VitalSignsForm};
use nursing_core::interfaces::NullPresenter;
use nursing_core::ObservationController;

fn numeric_form(bp: &str, temp: f64, hr: i64, rr: i64, sat: i64) -> VitalSignsForm {
    VitalSignsForm {
        blood_pressure: bp.to_string(),
        temperature: temp.to_string(),
        heart_rate: hr.to_string(),
        respiratory_rate: rr.to_string(),
        oxygen_saturation: sat.to_string(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Valid numeric text parses back to the same values; pressure is verbatim.
    #[test]
    fn valid_vitals_roundtrip_fields(
        bp in ".*",
        temp in -50.0f64..50.0,
        hr in any::<i64>(),
        rr in any::<i64>(),
        sat in any::<i64>(),
    ) {
        let vitals = numeric_form(&bp, temp, hr, rr, sat).parse().unwrap();
        prop_assert_eq!(vitals.blood_pressure(), bp.as_str());
        prop_assert_eq!(vitals.temperature(), temp);
        prop_assert_eq!(vitals.heart_rate(), hr);
        prop_assert_eq!(vitals.respiratory_rate(), rr);
        prop_assert_eq!(vitals.oxygen_saturation(), sat);
        prop_assert_eq!(vitals.blood_glucose(), None);
    }

    /// Letter-only text (no `n`, which would admit "nan" and "inf") in any
    /// numeric field rejects the whole form and leaves the stored vitals alone.
    #[test]
    fn non_numeric_field_leaves_record_unchanged(
        junk in "[a-mo-zA-MO-Z ]{0,12}",
        slot in 0usize..4,
    ) {
        let mut controller = ObservationController::new("12345");
        let mut form = numeric_form("120/80", 36.5, 72, 16, 98);
        match slot {
            0 => form.temperature = junk,
            1 => form.heart_rate = junk,
            2 => form.respiratory_rate = junk,
            _ => form.oxygen_saturation = junk,
        }
        prop_assert!(controller.save_vital_signs(&form, &mut NullPresenter).is_err());
        prop_assert!(controller.observation().vital_signs().is_none());
    }

    /// Notes are stored trimmed with empty procedure/complication lists.
    #[test]
    fn notes_always_trimmed(complaints in "\\PC*", observations in "\\PC*") {
        let mut controller = ObservationController::new("12345");
        let form = NotesForm {
            complaints: format!("  {complaints}\n"),
            observations: format!("\t{observations}  "),
        };
        controller.save_notes(&form, &mut NullPresenter);

        let notes = controller.observation().nursing_notes().unwrap();
        prop_assert_eq!(notes.complaints(), complaints.trim());
        prop_assert_eq!(notes.observations(), observations.trim());
        prop_assert!(notes.procedures().is_empty());
        prop_assert!(notes.complications().is_empty());
    }

    /// Identifier and creation time never move, whatever is saved.
    #[test]
    fn identity_is_stable(saves in proptest::collection::vec(any::<bool>(), 0..16)) {
        let mut controller = ObservationController::new("12345");
        let created = controller.observation().created_at();
        for save_vitals in saves {
            if save_vitals {
                let _ = controller.save_vital_signs(
                    &numeric_form("120/80", 36.5, 72, 16, 98),
                    &mut NullPresenter,
                );
            } else {
                controller.save_notes(&NotesForm::default(), &mut NullPresenter);
            }
        }
        prop_assert_eq!(controller.observation().id(), "12345");
        prop_assert_eq!(controller.observation().created_at(), created);
    }
}
