pub mod form;
pub mod schedule;
pub mod store;

pub use schedule::{next_due_time, NEXT_DUE_PLACEHOLDER};
pub use store::{MedicationStore, SharedMedicationStore};
