// Login and registration form checks. Accepted submissions are answered with
// a redirect target only.
pub mod handlers;
pub mod models;
pub mod router;

pub use models::{Credentials, LoginForm, RegisterForm};
pub use router::auth_routes;
