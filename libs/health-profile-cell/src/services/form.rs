use shared_models::error::ValidationErrors;
use shared_utils::validation::{normalize_optional, FieldRules, FormSchema};

use crate::models::{
    AccountSettingsForm, MedicalInfo, MedicalInfoForm, PasswordChange, PersonalInfo,
    PersonalInfoForm,
};

pub const MIN_PASSWORD_LENGTH: usize = 6;

impl FormSchema for PersonalInfoForm {
    type Output = PersonalInfo;
    const FORM_NAME: &'static str = "PersonalInfoForm";

    fn validate(&self) -> Result<PersonalInfo, ValidationErrors> {
        let mut rules = FieldRules::new();

        let full_name = rules.required("full_name", &self.full_name, "Full name is required.");
        let email = rules.email("email", &self.email, "Invalid email address.");
        let date_of_birth = rules.optional_date(
            "date_of_birth",
            self.date_of_birth.as_deref(),
            "Date of birth must be a valid date (YYYY-MM-DD).",
        );

        rules.finish(|| {
            Some(PersonalInfo {
                full_name: full_name?,
                email: email?,
                phone: normalize_optional(self.phone.as_deref()),
                date_of_birth: date_of_birth?,
            })
        })
    }
}

/// Every medical field is free text and optional.
impl FormSchema for MedicalInfoForm {
    type Output = MedicalInfo;
    const FORM_NAME: &'static str = "MedicalInfoForm";

    fn validate(&self) -> Result<MedicalInfo, ValidationErrors> {
        Ok(MedicalInfo {
            allergies: normalize_optional(self.allergies.as_deref()),
            chronic_conditions: normalize_optional(self.chronic_conditions.as_deref()),
            blood_type: normalize_optional(self.blood_type.as_deref()),
        })
    }
}

impl FormSchema for AccountSettingsForm {
    type Output = PasswordChange;
    const FORM_NAME: &'static str = "AccountSettingsForm";

    fn validate(&self) -> Result<PasswordChange, ValidationErrors> {
        let mut rules = FieldRules::new();

        let current = rules.min_len(
            "current_password",
            &self.current_password,
            MIN_PASSWORD_LENGTH,
            "Password must be at least 6 characters.",
        );
        let new = rules.min_len(
            "new_password",
            &self.new_password,
            MIN_PASSWORD_LENGTH,
            "New password must be at least 6 characters.",
        );
        rules.min_len(
            "confirm_new_password",
            &self.confirm_new_password,
            MIN_PASSWORD_LENGTH,
            "Confirm password must be at least 6 characters.",
        );
        rules.matches(
            "confirm_new_password",
            &self.confirm_new_password,
            &self.new_password,
            "New passwords don't match.",
        );

        rules.finish(|| {
            Some(PasswordChange {
                current_password: current?,
                new_password: new?,
            })
        })
    }
}
