// libs/medication-cell/src/handlers.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};
use tracing::{debug, instrument};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_utils::extractor::{AppJson, AppPath};
use shared_utils::validation::validate_form;

use crate::models::{MedicationForm, MedicationView};
use crate::services::store::SharedMedicationStore;

#[instrument(skip(store))]
pub async fn list_medications(
    State(store): State<SharedMedicationStore>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let medications: Vec<MedicationView> = store.list().iter().map(MedicationView::from).collect();
    debug!("Listing {} medications", medications.len());

    Ok(Json(json!({
        "total": medications.len(),
        "medications": medications,
    })))
}

#[instrument(skip(store))]
pub async fn get_medication(
    State(store): State<SharedMedicationStore>,
    AppPath(medication_id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let medication = store.get(medication_id)?;
    Ok(Json(json!(MedicationView::from(medication))))
}

#[instrument(skip(store, form))]
pub async fn create_medication(
    State(store): State<SharedMedicationStore>,
    AppJson(form): AppJson<MedicationForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let new_medication = validate_form(&form)?;

    let created = store.write().await.create(new_medication);

    Ok((StatusCode::CREATED, Json(json!(MedicationView::from(&created)))))
}

#[instrument(skip(store, form))]
pub async fn update_medication(
    State(store): State<SharedMedicationStore>,
    AppPath(medication_id): AppPath<Uuid>,
    AppJson(form): AppJson<MedicationForm>,
) -> Result<Json<Value>, AppError> {
    let changes = validate_form(&form)?;

    let updated = store.write().await.update(medication_id, changes.into())?;

    Ok(Json(json!(MedicationView::from(&updated))))
}

#[instrument(skip(store))]
pub async fn delete_medication(
    State(store): State<SharedMedicationStore>,
    AppPath(medication_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    store.write().await.delete(medication_id)?;
    Ok(StatusCode::NO_CONTENT)
}

#[instrument(skip(store))]
pub async fn log_intake(
    State(store): State<SharedMedicationStore>,
    AppPath(medication_id): AppPath<Uuid>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let record = store.write().await.log_intake(medication_id, Utc::now())?;

    Ok((StatusCode::CREATED, Json(json!(record))))
}

#[instrument(skip(store))]
pub async fn get_intake_log(
    State(store): State<SharedMedicationStore>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let log = store.intake_log();

    Ok(Json(json!({
        "total": log.len(),
        "intakes": log,
    })))
}
