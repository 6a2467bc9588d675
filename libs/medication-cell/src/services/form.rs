// libs/medication-cell/src/services/form.rs
use shared_models::error::ValidationErrors;
use shared_utils::validation::{FieldRules, FormSchema};

use crate::models::{Frequency, MedicationForm, NewMedication};

impl FormSchema for MedicationForm {
    type Output = NewMedication;
    const FORM_NAME: &'static str = "MedicationForm";

    fn validate(&self) -> Result<NewMedication, ValidationErrors> {
        let mut rules = FieldRules::new();

        let name = rules.min_len(
            "name",
            &self.name,
            2,
            "Medication name must be at least 2 characters.",
        );
        let dosage = rules.required("dosage", &self.dosage, "Dosage is required.");
        let frequency = match rules.required("frequency", &self.frequency, "Frequency is required.") {
            Some(label) if label == Frequency::OTHER_LABEL => rules
                .required(
                    "custom_frequency",
                    self.custom_frequency.as_deref().unwrap_or_default(),
                    "Describe the frequency when choosing Other.",
                )
                .map(|text| Frequency::from_label(&text)),
            Some(label) => {
                let choice = Frequency::from_choice(&label);
                if choice.is_none() {
                    rules.fail("frequency", "Select a valid frequency.");
                }
                choice
            }
            None => None,
        };
        let times = rules.dose_times(
            "times",
            self.times.as_deref(),
            "Enter times like HH:MM, separated by commas if multiple.",
        );
        let refill_date = rules.optional_date(
            "refill_date",
            self.refill_date.as_deref(),
            "Refill date must be a valid date (YYYY-MM-DD).",
        );

        rules.finish(|| {
            Some(NewMedication {
                name: name?,
                dosage: dosage?,
                frequency: frequency?,
                times: times?,
                refill_reminder: self.refill_reminder,
                refill_date: refill_date?,
            })
        })
    }
}
