// libs/appointment-cell/src/services/store.rs
use std::sync::Arc;

use chrono::{Duration, NaiveDate};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::RecordStore;
use shared_models::schedule::TimeOfDay;

use crate::models::{
    Appointment, AppointmentError, AppointmentPatch, AppointmentStatus, NewAppointment,
};
use crate::services::lifecycle::AppointmentLifecycleService;

/// Handle shared between request handlers; every mutation runs under the write lock.
pub type SharedAppointmentStore = Arc<RwLock<AppointmentStore>>;

#[derive(Debug, Default)]
pub struct AppointmentStore {
    records: RecordStore<Appointment>,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The demo appointments, dated relative to `today`.
    pub fn with_demo_data(today: NaiveDate) -> Self {
        let seed = |days: i64, doctor: &str, clinic: &str, hour: u8, minute: u8, kind: &str, status: AppointmentStatus| {
            Appointment {
                id: Uuid::new_v4(),
                doctor_name: doctor.to_string(),
                clinic_name: Some(clinic.to_string()),
                appointment_date: today + Duration::days(days),
                appointment_time: TimeOfDay::new(hour, minute).unwrap_or_default(),
                appointment_type: kind.to_string(),
                status,
            }
        };

        let records = vec![
            seed(5, "Dr. Emily Carter", "City General Hospital", 10, 30, "Annual Check-up", AppointmentStatus::Upcoming),
            seed(-2, "Dr. John Smith", "Dental Care Clinic", 14, 0, "Dental Cleaning", AppointmentStatus::Completed),
            seed(12, "Dr. Anya Sharma", "Vision First Eye Center", 9, 0, "Eye Examination", AppointmentStatus::Upcoming),
        ];

        info!("Seeded {} demo appointments", records.len());
        Self {
            records: RecordStore::from_records(records),
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    pub fn create(&mut self, new: NewAppointment) -> Appointment {
        let appointment = Appointment {
            id: self.records.next_id(),
            doctor_name: new.doctor_name,
            clinic_name: new.clinic_name,
            appointment_date: new.appointment_date,
            appointment_time: new.appointment_time,
            appointment_type: new.appointment_type,
            status: AppointmentStatus::default(),
        };

        info!(
            "Created appointment {} ({} with {} on {})",
            appointment.id, appointment.appointment_type, appointment.doctor_name, appointment.appointment_date
        );
        self.records.insert(appointment).clone()
    }

    pub fn get(&self, id: Uuid) -> Result<&Appointment, AppointmentError> {
        debug!("Fetching appointment {}", id);
        self.records.get(id).ok_or(AppointmentError::NotFound(id))
    }

    /// Merges `patch` onto the appointment. A status change must be a legal
    /// lifecycle transition; on any error the appointment is left untouched.
    pub fn update(&mut self, id: Uuid, patch: AppointmentPatch) -> Result<Appointment, AppointmentError> {
        let current = self.get(id)?.status;
        if let Some(next) = patch.status {
            self.lifecycle.validate_status_transition(current, next)?;
        }

        let updated = self.records.update_with(id, |appointment| patch.apply_to(appointment))?;
        info!("Updated appointment {}", id);
        Ok(updated)
    }

    pub fn transition(&mut self, id: Uuid, status: AppointmentStatus) -> Result<Appointment, AppointmentError> {
        self.update(id, AppointmentPatch::status(status))
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Appointment, AppointmentError> {
        let removed = self.records.remove(id)?;
        info!("Deleted appointment {}", id);
        Ok(removed)
    }

    /// Live collection in insertion order (newest first); callers sort.
    pub fn list(&self) -> &[Appointment] {
        self.records.list()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_shared(self) -> SharedAppointmentStore {
        Arc::new(RwLock::new(self))
    }
}
