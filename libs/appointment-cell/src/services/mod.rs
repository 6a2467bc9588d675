pub mod form;
pub mod lifecycle;
pub mod scheduling;
pub mod store;

pub use lifecycle::AppointmentLifecycleService;
pub use store::{AppointmentStore, SharedAppointmentStore};
