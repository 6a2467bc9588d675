use std::sync::Arc;

use axum::{
    Router,
    routing::get,
};
use chrono::NaiveDate;

use appointment_cell::{appointment_routes, AppointmentStore, SharedAppointmentStore};
use auth_cell::auth_routes;
use dashboard_cell::{dashboard_routes, DashboardState};
use health_profile_cell::{health_profile_routes, ProfileStore, SharedProfileStore};
use medication_cell::{medication_routes, MedicationStore, SharedMedicationStore};
use shared_config::AppConfig;

/// Every in-memory store the API serves from.
pub struct AppStores {
    pub appointments: SharedAppointmentStore,
    pub medications: SharedMedicationStore,
    pub profile: SharedProfileStore,
}

impl AppStores {
    pub fn empty() -> Self {
        Self {
            appointments: AppointmentStore::new().into_shared(),
            medications: MedicationStore::new().into_shared(),
            profile: ProfileStore::new().into_shared(),
        }
    }

    /// Demo appointment dates are placed relative to `today`.
    pub fn demo(today: NaiveDate) -> Self {
        Self {
            appointments: AppointmentStore::with_demo_data(today).into_shared(),
            medications: MedicationStore::with_demo_data().into_shared(),
            profile: ProfileStore::with_demo_data().into_shared(),
        }
    }
}

pub fn create_router(config: Arc<AppConfig>, stores: AppStores) -> Router {
    let dashboard = DashboardState::new(
        stores.appointments.clone(),
        stores.medications.clone(),
        config,
    );

    Router::new()
        .route("/", get(|| async { "MediTrack API is running!" }))
        .nest("/appointments", appointment_routes(stores.appointments))
        .nest("/medications", medication_routes(stores.medications))
        .nest("/profile", health_profile_routes(stores.profile))
        .nest("/auth", auth_routes())
        .nest("/dashboard", dashboard_routes(dashboard))
}
