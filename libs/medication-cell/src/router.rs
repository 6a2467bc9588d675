// libs/medication-cell/src/router.rs
use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::store::SharedMedicationStore;

pub fn medication_routes(store: SharedMedicationStore) -> Router {
    Router::new()
        .route("/", get(handlers::list_medications).post(handlers::create_medication))
        .route("/intake", get(handlers::get_intake_log))
        .route(
            "/{medication_id}",
            get(handlers::get_medication)
                .put(handlers::update_medication)
                .delete(handlers::delete_medication),
        )
        .route("/{medication_id}/intake", post(handlers::log_intake))
        .with_state(store)
}
