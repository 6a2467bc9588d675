// libs/medication-cell/src/services/store.rs
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};
use uuid::Uuid;

use shared_database::RecordStore;
use shared_models::schedule::DoseTimes;

use crate::models::{
    Frequency, IntakeRecord, Medication, MedicationError, MedicationPatch, NewMedication,
};

pub type SharedMedicationStore = Arc<RwLock<MedicationStore>>;

/// Oldest intake entries are dropped beyond this many.
pub const INTAKE_LOG_CAPACITY: usize = 1000;

#[derive(Debug, Default)]
pub struct MedicationStore {
    records: RecordStore<Medication>,
    intake_log: Vec<IntakeRecord>,
}

impl MedicationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        let seed = |name: &str, dosage: &str, frequency: Frequency, times: &str, refill_date: Option<NaiveDate>| {
            Medication {
                id: Uuid::new_v4(),
                name: name.to_string(),
                dosage: dosage.to_string(),
                frequency,
                times: times.parse::<DoseTimes>().unwrap_or_default(),
                refill_reminder: refill_date.is_some(),
                refill_date,
            }
        };

        let records = vec![
            seed("Amoxicillin", "250mg", Frequency::TwiceDaily, "08:00,20:00", NaiveDate::from_ymd_opt(2024, 9, 15)),
            seed("Lisinopril", "10mg", Frequency::OnceDaily, "09:00", None),
            seed("Metformin", "500mg", Frequency::TwiceDaily, "07:00,19:00", NaiveDate::from_ymd_opt(2024, 10, 1)),
        ];

        info!("Seeded {} demo medications", records.len());
        Self {
            records: RecordStore::from_records(records),
            intake_log: Vec::new(),
        }
    }

    pub fn create(&mut self, new: NewMedication) -> Medication {
        let medication = Medication {
            id: self.records.next_id(),
            name: new.name,
            dosage: new.dosage,
            frequency: new.frequency,
            times: new.times,
            refill_reminder: new.refill_reminder,
            refill_date: new.refill_date,
        };

        info!("Created medication {} ({})", medication.id, medication.name);
        self.records.insert(medication).clone()
    }

    pub fn get(&self, id: Uuid) -> Result<&Medication, MedicationError> {
        debug!("Fetching medication {}", id);
        self.records.get(id).ok_or(MedicationError::NotFound(id))
    }

    pub fn update(&mut self, id: Uuid, patch: MedicationPatch) -> Result<Medication, MedicationError> {
        let updated = self.records.update_with(id, |medication| patch.apply_to(medication))?;
        info!("Updated medication {}", id);
        Ok(updated)
    }

    pub fn delete(&mut self, id: Uuid) -> Result<Medication, MedicationError> {
        let removed = self.records.remove(id)?;
        info!("Deleted medication {} ({})", id, removed.name);
        Ok(removed)
    }

    pub fn list(&self) -> &[Medication] {
        self.records.list()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records that a dose was taken. History outlives the medication itself
    /// and is capped at [`INTAKE_LOG_CAPACITY`] entries.
    pub fn log_intake(&mut self, id: Uuid, logged_at: DateTime<Utc>) -> Result<IntakeRecord, MedicationError> {
        let medication = self.get(id)?;
        let record = IntakeRecord {
            medication_id: id,
            medication_name: medication.name.clone(),
            logged_at,
        };

        info!("Logged intake for {} at {}", record.medication_name, logged_at);
        self.intake_log.push(record.clone());
        if self.intake_log.len() > INTAKE_LOG_CAPACITY {
            let excess = self.intake_log.len() - INTAKE_LOG_CAPACITY;
            self.intake_log.drain(..excess);
        }
        Ok(record)
    }

    /// Oldest first.
    pub fn intake_log(&self) -> &[IntakeRecord] {
        &self.intake_log
    }

    pub fn into_shared(self) -> SharedMedicationStore {
        Arc::new(RwLock::new(self))
    }
}
