// libs/medication-cell/src/services/schedule.rs
//
// The due time is read straight off the stored schedule: the first listed
// dose, always presented as today's. Doses already taken are not considered.

use crate::models::{Medication, MedicationView};

pub const NEXT_DUE_PLACEHOLDER: &str = "Scheduled";

pub fn next_due_time(medication: &Medication) -> String {
    match medication.times.first() {
        Some(time) => format!("Today at {}", time),
        None => NEXT_DUE_PLACEHOLDER.to_string(),
    }
}

impl From<&Medication> for MedicationView {
    fn from(medication: &Medication) -> Self {
        Self {
            next_due_time: next_due_time(medication),
            medication: medication.clone(),
        }
    }
}
