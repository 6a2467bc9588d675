use std::sync::Arc;

use axum::{
    body::Body,
    http::{Method, Request},
    response::Response,
};
use chrono::{Duration, NaiveDate};
use serde::Serialize;
use serde_json::Value;

use shared_config::AppConfig;

pub struct TestConfig {
    pub seed_demo_data: bool,
    pub dashboard_preview_limit: usize,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            seed_demo_data: false,
            dashboard_preview_limit: 2,
        }
    }
}

impl TestConfig {
    pub fn seeded() -> Self {
        Self {
            seed_demo_data: true,
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            seed_demo_data: self.seed_demo_data,
            dashboard_preview_limit: self.dashboard_preview_limit,
            ..AppConfig::default()
        }
    }

    pub fn to_arc(&self) -> Arc<AppConfig> {
        Arc::new(self.to_app_config())
    }
}

/// Stable "today" so date-relative fixtures do not depend on the wall clock.
pub struct TestDates;

impl TestDates {
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).expect("valid fixture date")
    }

    pub fn days_from_today(days: i64) -> NaiveDate {
        Self::today() + Duration::days(days)
    }
}

pub struct TestRequests;

impl TestRequests {
    pub fn json<T: Serialize>(method: Method, uri: &str, body: &T) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(
                serde_json::to_vec(body).expect("test body serializes"),
            ))
            .expect("valid test request")
    }

    pub fn empty(method: Method, uri: &str) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("valid test request")
    }

    pub async fn read_json(response: Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("response body is readable");
        serde_json::from_slice(&body).expect("response body is JSON")
    }
}
