// User profile: personal and medical sections, emergency contacts and the
// account settings form.
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    AccountSettingsForm, EmergencyContact, MedicalInfo, MedicalInfoForm, PasswordChange,
    PersonalInfo, PersonalInfoForm,
};
pub use router::health_profile_routes;
pub use services::{ProfileStore, SharedProfileStore};
