use axum::{
    Router,
    routing::post,
};

use crate::handlers;

pub fn auth_routes() -> Router {
    Router::new()
        .route("/login", post(handlers::login))
        .route("/register", post(handlers::register))
}
