// libs/appointment-cell/src/models.rs
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_database::{Record, StoreError};
use shared_models::error::AppError;
use shared_models::schedule::TimeOfDay;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_name: String,
    pub clinic_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeOfDay,
    pub appointment_type: String,
    pub status: AppointmentStatus,
}

impl Record for Appointment {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Appointment {
    pub fn is_upcoming(&self) -> bool {
        self.status == AppointmentStatus::Upcoming
    }

    pub fn display_time(&self) -> String {
        self.appointment_time.to_display_string()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AppointmentStatus {
    #[default]
    Upcoming,
    Completed,
    Cancelled,
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Upcoming => write!(f, "Upcoming"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Validated creation payload; the store assigns `id` and `status`.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAppointment {
    pub doctor_name: String,
    pub clinic_name: Option<String>,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeOfDay,
    pub appointment_type: String,
}

/// Shallow field overwrite: `Some` replaces, `None` keeps.
/// `clinic_name: Some(None)` clears the clinic.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentPatch {
    pub doctor_name: Option<String>,
    pub clinic_name: Option<Option<String>>,
    pub appointment_date: Option<NaiveDate>,
    pub appointment_time: Option<TimeOfDay>,
    pub appointment_type: Option<String>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentPatch {
    pub fn status(status: AppointmentStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn apply_to(self, appointment: &mut Appointment) {
        if let Some(v) = self.doctor_name { appointment.doctor_name = v; }
        if let Some(v) = self.clinic_name { appointment.clinic_name = v; }
        if let Some(v) = self.appointment_date { appointment.appointment_date = v; }
        if let Some(v) = self.appointment_time { appointment.appointment_time = v; }
        if let Some(v) = self.appointment_type { appointment.appointment_type = v; }
        if let Some(v) = self.status { appointment.status = v; }
    }
}

/// An edit submission carries the whole form, so every field is overwritten.
impl From<NewAppointment> for AppointmentPatch {
    fn from(new: NewAppointment) -> Self {
        Self {
            doctor_name: Some(new.doctor_name),
            clinic_name: Some(new.clinic_name),
            appointment_date: Some(new.appointment_date),
            appointment_time: Some(new.appointment_time),
            appointment_type: Some(new.appointment_type),
            status: None,
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Raw appointment form as submitted. Every field is optional on the wire so
/// missing input surfaces as a field error rather than a decode failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppointmentForm {
    pub doctor_name: String,
    pub clinic_name: Option<String>,
    pub appointment_date: Option<String>,
    pub appointment_time: String,
    pub appointment_type: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayQuery {
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AppointmentView {
    #[serde(flatten)]
    pub appointment: Appointment,
    pub display_time: String,
}

impl From<&Appointment> for AppointmentView {
    fn from(appointment: &Appointment) -> Self {
        Self {
            display_time: appointment.display_time(),
            appointment: appointment.clone(),
        }
    }
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum AppointmentError {
    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Appointment cannot move from {from} to {to}")]
    InvalidStatusTransition {
        from: AppointmentStatus,
        to: AppointmentStatus,
    },
}

impl From<StoreError> for AppointmentError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => AppointmentError::NotFound(id),
        }
    }
}

impl From<AppointmentError> for AppError {
    fn from(error: AppointmentError) -> Self {
        match error {
            AppointmentError::NotFound(_) => AppError::NotFound(error.to_string()),
            AppointmentError::InvalidStatusTransition { .. } => AppError::Conflict(error.to_string()),
        }
    }
}
