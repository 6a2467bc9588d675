// libs/medication-cell/src/lib.rs
//! Medication list: validated add/edit/delete, derived "next due" display and
//! a simple intake log.

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Frequency, IntakeRecord, Medication, MedicationError, MedicationForm, MedicationPatch,
    MedicationView, NewMedication,
};
pub use router::medication_routes;
pub use services::{next_due_time, MedicationStore, SharedMedicationStore};
