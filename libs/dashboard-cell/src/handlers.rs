// =====================================================================================
// DASHBOARD CELL HANDLERS
// =====================================================================================

use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use chrono::Local;
use tracing::instrument;

use appointment_cell::SharedAppointmentStore;
use medication_cell::SharedMedicationStore;
use shared_config::AppConfig;
use shared_models::error::AppError;
use shared_utils::extractor::AppQuery;

use crate::models::{DashboardQuery, DashboardSummary};
use crate::services::build_summary;

/// Read handles on the stores the dashboard summarises.
#[derive(Clone)]
pub struct DashboardState {
    pub appointments: SharedAppointmentStore,
    pub medications: SharedMedicationStore,
    pub config: Arc<AppConfig>,
}

impl DashboardState {
    pub fn new(
        appointments: SharedAppointmentStore,
        medications: SharedMedicationStore,
        config: Arc<AppConfig>,
    ) -> Self {
        Self {
            appointments,
            medications,
            config,
        }
    }
}

#[instrument(skip(state))]
pub async fn get_dashboard(
    State(state): State<DashboardState>,
    AppQuery(query): AppQuery<DashboardQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let today = query.today.unwrap_or_else(|| Local::now().date_naive());

    let appointments = state.appointments.read().await;
    let medications = state.medications.read().await;

    Ok(Json(build_summary(
        appointments.list(),
        medications.list(),
        today,
        state.config.dashboard_preview_limit,
    )))
}
