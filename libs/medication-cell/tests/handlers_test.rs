use axum::{
    http::{Method, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use medication_cell::router::medication_routes;
use medication_cell::services::store::{MedicationStore, SharedMedicationStore};
use shared_utils::test_utils::TestRequests;

fn create_test_app() -> (Router, SharedMedicationStore) {
    let store = MedicationStore::with_demo_data().into_shared();
    (medication_routes(store.clone()), store)
}

fn valid_form() -> Value {
    json!({
        "name": "Vitamin D",
        "dosage": "1000 IU",
        "frequency": "Other",
        "custom_frequency": "Weekly",
        "times": "8:30",
        "refill_reminder": false
    })
}

#[tokio::test]
async fn test_list_includes_next_due() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(TestRequests::empty(Method::GET, "/"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = TestRequests::read_json(response).await;
    assert_eq!(json["total"], 3);
    let first = &json["medications"][0];
    assert_eq!(first["name"], "Amoxicillin");
    assert_eq!(first["frequency"], "Twice daily");
    assert_eq!(first["times"], "08:00,20:00");
    assert_eq!(first["next_due_time"], "Today at 08:00");
}

#[tokio::test]
async fn test_create_with_custom_frequency() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(TestRequests::json(Method::POST, "/", &valid_form()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = TestRequests::read_json(response).await;
    assert_eq!(json["frequency"], "Weekly");
    assert_eq!(json["times"], "08:30");
    assert_eq!(json["next_due_time"], "Today at 08:30");
    assert_eq!(store.read().await.list()[0].name, "Vitamin D");
}

#[tokio::test]
async fn test_create_without_times_shows_placeholder() {
    let (app, _) = create_test_app();
    let mut form = valid_form();
    form["times"] = json!("");

    let response = app
        .oneshot(TestRequests::json(Method::POST, "/", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = TestRequests::read_json(response).await;
    assert_eq!(json["next_due_time"], "Scheduled");
}

#[tokio::test]
async fn test_create_invalid_reports_fields() {
    let (app, store) = create_test_app();

    let response = app
        .oneshot(TestRequests::json(
            Method::POST,
            "/",
            &json!({ "name": "X", "dosage": "", "frequency": "Once daily", "times": "25:00" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = TestRequests::read_json(response).await;
    assert!(json["fields"]["name"].is_string());
    assert!(json["fields"]["dosage"].is_string());
    assert!(json["fields"]["times"].is_string());
    assert_eq!(store.read().await.len(), 3);
}

#[tokio::test]
async fn test_update_then_delete() {
    let (app, store) = create_test_app();
    let id = store.read().await.list()[1].id;
    let uri = format!("/{}", id);

    let response = app
        .clone()
        .oneshot(TestRequests::json(Method::PUT, &uri, &valid_form()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = TestRequests::read_json(response).await;
    assert_eq!(json["name"], "Vitamin D");
    assert_eq!(json["id"], id.to_string());

    let response = app
        .clone()
        .oneshot(TestRequests::empty(Method::DELETE, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = app
        .oneshot(TestRequests::empty(Method::GET, &uri))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(store.read().await.len(), 2);
}

#[tokio::test]
async fn test_log_and_list_intake() {
    let (app, store) = create_test_app();
    let id = store.read().await.list()[2].id;

    let response = app
        .clone()
        .oneshot(TestRequests::empty(Method::POST, &format!("/{}/intake", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app
        .oneshot(TestRequests::empty(Method::GET, "/intake"))
        .await
        .unwrap();
    let json = TestRequests::read_json(response).await;
    assert_eq!(json["total"], 1);
    assert_eq!(json["intakes"][0]["medication_name"], "Metformin");
    assert_eq!(json["intakes"][0]["medication_id"], id.to_string());
}

#[tokio::test]
async fn test_create_with_unknown_frequency_is_rejected() {
    let (app, store) = create_test_app();
    let mut form = valid_form();
    form["frequency"] = json!("Every full moon");

    let response = app
        .oneshot(TestRequests::json(Method::POST, "/", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = TestRequests::read_json(response).await;
    assert_eq!(json["fields"]["frequency"], "Select a valid frequency.");
    assert_eq!(store.read().await.len(), 3);
}

#[tokio::test]
async fn test_other_naming_a_fixed_choice_is_stored_as_that_choice() {
    let (app, store) = create_test_app();
    let mut form = valid_form();
    form["custom_frequency"] = json!("Twice daily");

    let response = app
        .oneshot(TestRequests::json(Method::POST, "/", &form))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    assert_eq!(
        store.read().await.list()[0].frequency,
        medication_cell::Frequency::TwiceDaily
    );
}

#[tokio::test]
async fn test_malformed_id_is_json_bad_request() {
    let (app, _) = create_test_app();

    let response = app
        .oneshot(TestRequests::empty(Method::POST, "/not-a-uuid/intake"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = TestRequests::read_json(response).await;
    assert!(json["error"].is_string());
}
