// libs/appointment-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::store::SharedAppointmentStore;

pub fn appointment_routes(store: SharedAppointmentStore) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments).post(handlers::create_appointment))
        .route("/day", get(handlers::get_appointments_for_day))
        .route(
            "/{appointment_id}",
            get(handlers::get_appointment)
                .put(handlers::update_appointment)
                .delete(handlers::delete_appointment),
        )
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route("/{appointment_id}/complete", post(handlers::complete_appointment))
        .with_state(store)
}
