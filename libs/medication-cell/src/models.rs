// libs/medication-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use shared_database::{Record, StoreError};
use shared_models::error::AppError;
use shared_models::schedule::DoseTimes;

// ==============================================================================
// CORE MEDICATION MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Medication {
    pub id: Uuid,
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub times: DoseTimes,
    pub refill_reminder: bool,
    pub refill_date: Option<NaiveDate>,
}

impl Record for Medication {
    fn id(&self) -> Uuid {
        self.id
    }
}

/// How often a medication is taken. Anything outside the fixed choices is
/// kept verbatim as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Frequency {
    OnceDaily,
    TwiceDaily,
    ThreeTimesDaily,
    AsNeeded,
    Other(String),
}

impl Frequency {
    pub const OTHER_LABEL: &'static str = "Other";

    /// One of the fixed choices, or `None` for anything else (including "Other").
    pub fn from_choice(label: &str) -> Option<Self> {
        match label.trim() {
            "Once daily" => Some(Frequency::OnceDaily),
            "Twice daily" => Some(Frequency::TwiceDaily),
            "Three times daily" => Some(Frequency::ThreeTimesDaily),
            "As needed" => Some(Frequency::AsNeeded),
            _ => None,
        }
    }

    /// Maps a stored label back onto a fixed choice, falling back to free text.
    /// Free text equal to a fixed label collapses to that choice, so a value
    /// always survives a label round trip unchanged.
    pub fn from_label(label: &str) -> Self {
        Self::from_choice(label).unwrap_or_else(|| Frequency::Other(label.trim().to_string()))
    }

    pub fn label(&self) -> &str {
        match self {
            Frequency::OnceDaily => "Once daily",
            Frequency::TwiceDaily => "Twice daily",
            Frequency::ThreeTimesDaily => "Three times daily",
            Frequency::AsNeeded => "As needed",
            Frequency::Other(text) => text,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Frequency {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Frequency {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Frequency::from_label(&raw))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMedication {
    pub name: String,
    pub dosage: String,
    pub frequency: Frequency,
    pub times: DoseTimes,
    pub refill_reminder: bool,
    pub refill_date: Option<NaiveDate>,
}

/// Shallow field overwrite: `Some` replaces, `None` keeps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MedicationPatch {
    pub name: Option<String>,
    pub dosage: Option<String>,
    pub frequency: Option<Frequency>,
    pub times: Option<DoseTimes>,
    pub refill_reminder: Option<bool>,
    pub refill_date: Option<Option<NaiveDate>>,
}

impl MedicationPatch {
    pub fn apply_to(self, medication: &mut Medication) {
        if let Some(v) = self.name { medication.name = v; }
        if let Some(v) = self.dosage { medication.dosage = v; }
        if let Some(v) = self.frequency { medication.frequency = v; }
        if let Some(v) = self.times { medication.times = v; }
        if let Some(v) = self.refill_reminder { medication.refill_reminder = v; }
        if let Some(v) = self.refill_date { medication.refill_date = v; }
    }
}

impl From<NewMedication> for MedicationPatch {
    fn from(new: NewMedication) -> Self {
        Self {
            name: Some(new.name),
            dosage: Some(new.dosage),
            frequency: Some(new.frequency),
            times: Some(new.times),
            refill_reminder: Some(new.refill_reminder),
            refill_date: Some(new.refill_date),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub medication_id: Uuid,
    pub medication_name: String,
    pub logged_at: DateTime<Utc>,
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Raw medication form. `custom_frequency` is only read when `frequency` is "Other".
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicationForm {
    pub name: String,
    pub dosage: String,
    pub frequency: String,
    pub custom_frequency: Option<String>,
    pub times: Option<String>,
    pub refill_reminder: bool,
    pub refill_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MedicationView {
    #[serde(flatten)]
    pub medication: Medication,
    pub next_due_time: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Error, Debug)]
pub enum MedicationError {
    #[error("Medication not found: {0}")]
    NotFound(Uuid),
}

impl From<StoreError> for MedicationError {
    fn from(error: StoreError) -> Self {
        match error {
            StoreError::NotFound(id) => MedicationError::NotFound(id),
        }
    }
}

impl From<MedicationError> for AppError {
    fn from(error: MedicationError) -> Self {
        match error {
            MedicationError::NotFound(_) => AppError::NotFound(error.to_string()),
        }
    }
}
