use serde::{Deserialize, Serialize};

use shared_models::error::ValidationErrors;
use shared_utils::validation::{FieldRules, FormSchema};

pub const MIN_PASSWORD_LENGTH: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RegisterForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

/// Accepted sign-in or sign-up. No session or account is created from it.
#[derive(Debug, Clone, PartialEq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl FormSchema for LoginForm {
    type Output = Credentials;
    const FORM_NAME: &'static str = "LoginForm";

    fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut rules = FieldRules::new();

        let email = rules.email("email", &self.email, "Invalid email address.");
        let password = rules.required("password", &self.password, "Password is required.");

        rules.finish(|| {
            Some(Credentials {
                email: email?,
                password: password?,
            })
        })
    }
}

impl FormSchema for RegisterForm {
    type Output = Credentials;
    const FORM_NAME: &'static str = "RegisterForm";

    fn validate(&self) -> Result<Credentials, ValidationErrors> {
        let mut rules = FieldRules::new();

        let email = rules.email("email", &self.email, "Invalid email address.");
        let password = rules.min_len(
            "password",
            &self.password,
            MIN_PASSWORD_LENGTH,
            "Password must be at least 6 characters.",
        );
        rules.matches(
            "confirm_password",
            &self.confirm_password,
            &self.password,
            "Passwords don't match.",
        );

        rules.finish(|| {
            Some(Credentials {
                email: email?,
                password: password?,
            })
        })
    }
}
