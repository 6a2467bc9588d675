use serde::{Deserialize, Serialize};

/// Where the client should navigate after a login or registration form is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthRedirect {
    pub redirect: String,
}

impl AuthRedirect {
    pub fn dashboard() -> Self {
        Self {
            redirect: "/dashboard".to_string(),
        }
    }
}
