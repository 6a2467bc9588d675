// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::State,
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use tracing::{debug, instrument};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_utils::extractor::{AppJson, AppPath, AppQuery};
use shared_utils::validation::validate_form;

use crate::models::{Appointment, AppointmentForm, AppointmentStatus, AppointmentView, DayQuery};
use crate::services::scheduling::{filter_by_day, sort_by_date_time};
use crate::services::store::SharedAppointmentStore;

fn views(appointments: &[Appointment]) -> Vec<AppointmentView> {
    appointments.iter().map(AppointmentView::from).collect()
}

// ==============================================================================
// LISTINGS
// ==============================================================================

#[instrument(skip(store))]
pub async fn list_appointments(
    State(store): State<SharedAppointmentStore>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let sorted = sort_by_date_time(store.list());
    debug!("Listing {} appointments", sorted.len());

    Ok(Json(json!({
        "appointments": views(&sorted),
        "total": sorted.len(),
    })))
}

#[instrument(skip(store))]
pub async fn get_appointments_for_day(
    State(store): State<SharedAppointmentStore>,
    AppQuery(query): AppQuery<DayQuery>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let on_day = filter_by_day(store.list(), query.date);
    debug!("{} upcoming appointments on {}", on_day.len(), query.date);

    Ok(Json(json!({
        "date": query.date,
        "appointments": views(&on_day),
        "total": on_day.len(),
    })))
}

#[instrument(skip(store))]
pub async fn get_appointment(
    State(store): State<SharedAppointmentStore>,
    AppPath(appointment_id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let store = store.read().await;
    let appointment = store.get(appointment_id)?;
    Ok(Json(json!(AppointmentView::from(appointment))))
}

// ==============================================================================
// MUTATIONS
// ==============================================================================

#[instrument(skip(store, form))]
pub async fn create_appointment(
    State(store): State<SharedAppointmentStore>,
    AppJson(form): AppJson<AppointmentForm>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let new_appointment = validate_form(&form)?;

    let created = store.write().await.create(new_appointment);

    Ok((StatusCode::CREATED, Json(json!(AppointmentView::from(&created)))))
}

#[instrument(skip(store, form))]
pub async fn update_appointment(
    State(store): State<SharedAppointmentStore>,
    AppPath(appointment_id): AppPath<Uuid>,
    AppJson(form): AppJson<AppointmentForm>,
) -> Result<Json<Value>, AppError> {
    let changes = validate_form(&form)?;

    let updated = store.write().await.update(appointment_id, changes.into())?;

    Ok(Json(json!(AppointmentView::from(&updated))))
}

#[instrument(skip(store))]
pub async fn cancel_appointment(
    State(store): State<SharedAppointmentStore>,
    AppPath(appointment_id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let cancelled = store
        .write()
        .await
        .transition(appointment_id, AppointmentStatus::Cancelled)?;

    Ok(Json(json!(AppointmentView::from(&cancelled))))
}

#[instrument(skip(store))]
pub async fn complete_appointment(
    State(store): State<SharedAppointmentStore>,
    AppPath(appointment_id): AppPath<Uuid>,
) -> Result<Json<Value>, AppError> {
    let completed = store
        .write()
        .await
        .transition(appointment_id, AppointmentStatus::Completed)?;

    Ok(Json(json!(AppointmentView::from(&completed))))
}

#[instrument(skip(store))]
pub async fn delete_appointment(
    State(store): State<SharedAppointmentStore>,
    AppPath(appointment_id): AppPath<Uuid>,
) -> Result<StatusCode, AppError> {
    store.write().await.delete(appointment_id)?;
    Ok(StatusCode::NO_CONTENT)
}
