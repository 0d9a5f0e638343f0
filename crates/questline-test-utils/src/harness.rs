// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test harness for end-to-end integration testing.
//!
//! `TestHarness` assembles the full mission stack -- store, optional demo
//! seed, and router -- and drives requests through the router in process,
//! without binding a socket. Provides `get()` and `post_json()` to exercise
//! the same code paths a real client would.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use questline_gateway::{router, AppState};
use questline_store::{seed, MissionStore};
use serde_json::Value;
use tower::ServiceExt;

/// Builder for creating test environments with configurable options.
pub struct TestHarnessBuilder {
    seed_demo: bool,
    demo_username: String,
    demo_password: String,
}

impl TestHarnessBuilder {
    fn new() -> Self {
        Self {
            seed_demo: true,
            demo_username: "demoUser".to_string(),
            demo_password: "password123".to_string(),
        }
    }

    /// Start from an empty store instead of the seeded demo catalog.
    pub fn without_seed(mut self) -> Self {
        self.seed_demo = false;
        self
    }

    /// Override the demo account credentials used when seeding.
    pub fn with_demo_user(mut self, username: &str, password: &str) -> Self {
        self.demo_username = username.to_string();
        self.demo_password = password.to_string();
        self
    }

    /// Build the test harness, creating the store and router.
    pub async fn build(self) -> TestHarness {
        let store = Arc::new(MissionStore::new());
        if self.seed_demo {
            seed::seed_demo(&store, &self.demo_username, &self.demo_password).await;
        }
        let app = router(AppState::new(store.clone()));
        TestHarness { store, app }
    }
}

/// A complete in-process test environment.
///
/// Exposes the store for direct assertions and the router for HTTP-level
/// checks; both share the same state.
pub struct TestHarness {
    /// The entity store behind the router.
    pub store: Arc<MissionStore>,
    /// The assembled mission API router.
    pub app: Router,
}

impl TestHarness {
    /// Create a new builder for configuring the test harness.
    pub fn builder() -> TestHarnessBuilder {
        TestHarnessBuilder::new()
    }

    /// Issue a GET request and return the status plus decoded JSON body.
    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        Self::split(response).await
    }

    /// Issue a POST with a JSON body and return the status plus decoded body.
    pub async fn post_json(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        let response = self
            .app
            .clone()
            .oneshot(
                Request::post(uri)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        Self::split(response).await
    }

    async fn split(response: axum::response::Response) -> (StatusCode, Value) {
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
        (status, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn builder_seeds_demo_catalog_by_default() {
        let harness = TestHarness::builder().build().await;
        let (status, missions) = harness.get("/api/missions").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(missions.as_array().unwrap().len(), 3);
    }

    #[tokio::test]
    async fn without_seed_starts_empty() {
        let harness = TestHarness::builder().without_seed().build().await;
        let (_, missions) = harness.get("/api/missions").await;
        assert!(missions.as_array().unwrap().is_empty());

        let (status, _) = harness.get("/api/demo/user").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn with_demo_user_overrides_credentials() {
        let harness = TestHarness::builder()
            .with_demo_user("tester", "secret")
            .build()
            .await;
        let (_, user) = harness.get("/api/demo/user").await;
        assert_eq!(user["username"], "tester");
    }

    #[tokio::test]
    async fn store_and_router_share_state() {
        let harness = TestHarness::builder().build().await;
        harness
            .post_json(
                "/api/users/1/progress/fab-seeds",
                json!({"progress": 10, "currentStep": 1}),
            )
            .await;

        let record = harness
            .store
            .get_user_progress(1, "fab-seeds")
            .await
            .unwrap();
        assert_eq!(record.progress, 10);
        assert_eq!(record.current_step, 1);
    }
}
