use assert_matches::assert_matches;
use axum::{
    http::{Method, StatusCode},
    Json,
};
use serde_json::json;
use tower::ServiceExt;

use auth_cell::handlers::{login, register};
use auth_cell::models::{LoginForm, RegisterForm};
use auth_cell::router::auth_routes;
use shared_models::auth::AuthRedirect;
use shared_models::error::AppError;
use shared_utils::extractor::AppJson;
use shared_utils::test_utils::TestRequests;

#[tokio::test]
async fn test_login_redirects_to_dashboard() {
    let form = LoginForm {
        email: "doraemon@example.com".to_string(),
        password: "x".to_string(),
    };

    let result = login(AppJson(form)).await;

    let Json(redirect) = result.unwrap();
    assert_eq!(redirect, AuthRedirect::dashboard());
}

#[tokio::test]
async fn test_login_with_bad_email() {
    let form = LoginForm {
        email: "doraemon".to_string(),
        password: "gadget".to_string(),
    };

    let result = login(AppJson(form)).await;

    assert_matches!(result, Err(AppError::Validation(errors)) if errors.has("email"));
}

#[tokio::test]
async fn test_register_mismatch_is_rejected() {
    let form = RegisterForm {
        email: "nobita@example.com".to_string(),
        password: "bamboo".to_string(),
        confirm_password: "copter".to_string(),
    };

    let result = register(AppJson(form)).await;

    assert_matches!(
        result,
        Err(AppError::Validation(errors)) if errors.has("confirm_password")
    );
}

#[tokio::test]
async fn test_register_route() {
    let app = auth_routes();

    let response = app
        .oneshot(TestRequests::json(
            Method::POST,
            "/register",
            &json!({
                "email": "shizuka@example.com",
                "password": "violin",
                "confirm_password": "violin"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let json = TestRequests::read_json(response).await;
    assert_eq!(json["redirect"], "/dashboard");
}

#[tokio::test]
async fn test_login_route_rejects_empty_form() {
    let app = auth_routes();

    let response = app
        .oneshot(TestRequests::json(Method::POST, "/login", &json!({})))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let json = TestRequests::read_json(response).await;
    assert_eq!(json["fields"]["password"], "Password is required.");
}
