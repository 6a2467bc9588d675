// libs/appointment-cell/src/lib.rs
//! # Appointment Cell
//!
//! In-memory appointment book: validated creation and edits, lifecycle
//! transitions (`Upcoming -> Completed | Cancelled`), and the date/time rules
//! used to present the list (chronological sort, per-day calendar view,
//! 12-hour time display).
//!
//! ```text
//! +-----------------------------------------------------+
//! |  handlers.rs      |  HTTP endpoint handlers         |
//! |  router.rs        |  Route definitions              |
//! |  models.rs        |  Entities, forms, errors        |
//! |  services/                                          |
//! |    form.rs        |  AppointmentForm validation     |
//! |    lifecycle.rs   |  Status transition rules        |
//! |    scheduling.rs  |  Sort / filter / time display   |
//! |    store.rs       |  AppointmentStore               |
//! +-----------------------------------------------------+
//! ```

pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentError, AppointmentForm, AppointmentPatch, AppointmentStatus,
    AppointmentView, NewAppointment,
};
pub use router::appointment_routes;
pub use services::{AppointmentStore, SharedAppointmentStore};
