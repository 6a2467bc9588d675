use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use shared_database::Record;

// ==============================================================================
// PROFILE SECTIONS
// ==============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedicalInfo {
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmergencyContact {
    pub id: Uuid,
    pub name: String,
    pub relationship: String,
    pub phone: String,
}

impl Record for EmergencyContact {
    fn id(&self) -> Uuid {
        self.id
    }
}

// ==============================================================================
// FORMS
// ==============================================================================

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonalInfoForm {
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MedicalInfoForm {
    pub allergies: Option<String>,
    pub chronic_conditions: Option<String>,
    pub blood_type: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AccountSettingsForm {
    pub current_password: String,
    pub new_password: String,
    pub confirm_new_password: String,
}

/// Validated password change. Nothing is persisted; there are no real accounts.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordChange {
    pub current_password: String,
    pub new_password: String,
}
