use axum::{extract::State, Json};
use serde_json::{json, Value};
use tracing::{info, instrument};

use shared_models::error::AppError;
use shared_utils::extractor::AppJson;
use shared_utils::validation::validate_form;

use crate::models::{AccountSettingsForm, MedicalInfoForm, PersonalInfoForm};
use crate::services::store::SharedProfileStore;

#[instrument(skip(store))]
pub async fn get_personal_info(State(store): State<SharedProfileStore>) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    Ok(Json(json!(store.personal())))
}

#[instrument(skip(store, form))]
pub async fn update_personal_info(
    State(store): State<SharedProfileStore>,
    AppJson(form): AppJson<PersonalInfoForm>,
) -> Result<Json<Value>, AppError> {
    let personal = validate_form(&form)?;

    let mut store = store.write().await;
    Ok(Json(json!({
        "message": "Personal information updated successfully!",
        "personal": store.update_personal(personal),
    })))
}

#[instrument(skip(store))]
pub async fn get_medical_info(State(store): State<SharedProfileStore>) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    Ok(Json(json!(store.medical())))
}

#[instrument(skip(store, form))]
pub async fn update_medical_info(
    State(store): State<SharedProfileStore>,
    AppJson(form): AppJson<MedicalInfoForm>,
) -> Result<Json<Value>, AppError> {
    let medical = validate_form(&form)?;

    let mut store = store.write().await;
    Ok(Json(json!({
        "message": "Medical information updated successfully!",
        "medical": store.update_medical(medical),
    })))
}

#[instrument(skip(store))]
pub async fn get_emergency_contacts(
    State(store): State<SharedProfileStore>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let contacts = store.emergency_contacts();

    Ok(Json(json!({
        "contacts": contacts,
        "total": contacts.len(),
    })))
}

// Passwords are validated only; there is no account to update.
#[instrument(skip(form))]
pub async fn change_password(AppJson(form): AppJson<AccountSettingsForm>) -> Result<Json<Value>, AppError> {
    validate_form(&form)?;
    info!("Password change accepted");

    Ok(Json(json!({ "message": "Password changed successfully!" })))
}
