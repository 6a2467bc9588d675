use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use shared_database::RecordStore;

use crate::models::{EmergencyContact, MedicalInfo, PersonalInfo};

pub type SharedProfileStore = Arc<RwLock<ProfileStore>>;

/// The single user's profile. Sections are replaced wholesale on save.
#[derive(Debug, Default)]
pub struct ProfileStore {
    personal: PersonalInfo,
    medical: MedicalInfo,
    emergency_contacts: RecordStore<EmergencyContact>,
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_demo_data() -> Self {
        let contact = |name: &str, relationship: &str, phone: &str| EmergencyContact {
            id: Uuid::new_v4(),
            name: name.to_string(),
            relationship: relationship.to_string(),
            phone: phone.to_string(),
        };

        info!("Seeded demo profile");
        Self {
            personal: PersonalInfo {
                full_name: "Dora E. Mon".to_string(),
                email: "doraemon@example.com".to_string(),
                phone: Some("123-456-7890".to_string()),
                date_of_birth: NaiveDate::from_ymd_opt(1970, 1, 1),
            },
            medical: MedicalInfo {
                allergies: Some("Dorayaki (causes extreme happiness)".to_string()),
                chronic_conditions: Some("Fear of mice".to_string()),
                blood_type: Some("O+".to_string()),
            },
            emergency_contacts: RecordStore::from_records(vec![
                contact("Nobita Nobi", "Best Friend", "555-0101"),
                contact("Shizuka Minamoto", "Friend", "555-0102"),
            ]),
        }
    }

    pub fn personal(&self) -> &PersonalInfo {
        &self.personal
    }

    pub fn update_personal(&mut self, personal: PersonalInfo) -> &PersonalInfo {
        info!("Personal information updated");
        self.personal = personal;
        &self.personal
    }

    pub fn medical(&self) -> &MedicalInfo {
        &self.medical
    }

    pub fn update_medical(&mut self, medical: MedicalInfo) -> &MedicalInfo {
        info!("Medical information updated");
        self.medical = medical;
        &self.medical
    }

    pub fn emergency_contacts(&self) -> &[EmergencyContact] {
        self.emergency_contacts.list()
    }

    pub fn into_shared(self) -> SharedProfileStore {
        Arc::new(RwLock::new(self))
    }
}
