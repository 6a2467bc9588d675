use axum::Json;
use tracing::{info, instrument};

use shared_models::auth::AuthRedirect;
use shared_models::error::AppError;
use shared_utils::extractor::AppJson;
use shared_utils::validation::validate_form;

use crate::models::{LoginForm, RegisterForm};

#[instrument(skip(form))]
pub async fn login(AppJson(form): AppJson<LoginForm>) -> Result<Json<AuthRedirect>, AppError> {
    let credentials = validate_form(&form)?;
    info!("Login accepted for {}", credentials.email);

    Ok(Json(AuthRedirect::dashboard()))
}

#[instrument(skip(form))]
pub async fn register(AppJson(form): AppJson<RegisterForm>) -> Result<Json<AuthRedirect>, AppError> {
    let credentials = validate_form(&form)?;
    info!("Registration accepted for {}", credentials.email);

    Ok(Json(AuthRedirect::dashboard()))
}
