use axum::{routing::get, Router};

use crate::handlers::{get_dashboard, DashboardState};

pub fn dashboard_routes(state: DashboardState) -> Router {
    Router::new()
        .route("/", get(get_dashboard))
        .with_state(state)
}
