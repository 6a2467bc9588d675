use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::services::store::SharedProfileStore;

pub fn health_profile_routes(store: SharedProfileStore) -> Router {
    Router::new()
        .route(
            "/personal",
            get(handlers::get_personal_info).put(handlers::update_personal_info),
        )
        .route(
            "/medical",
            get(handlers::get_medical_info).put(handlers::update_medical_info),
        )
        .route("/emergency-contacts", get(handlers::get_emergency_contacts))
        .route("/account/password", post(handlers::change_password))
        .with_state(store)
}
