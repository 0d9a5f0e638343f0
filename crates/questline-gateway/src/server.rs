// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Gateway HTTP server built on axum.
//!
//! Sets up routes, middleware, and shared state for the mission API.

use std::sync::Arc;
use std::time::Instant;

use axum::routing::{get, post};
use axum::Router;
use questline_core::QuestlineError;
use questline_store::MissionStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::dispatch;
use crate::handlers;

/// Shared state for axum request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The injected entity store. Constructed once in `serve` and shared;
    /// handlers never reach for a global.
    pub store: Arc<MissionStore>,
    /// Process start time for uptime reporting.
    pub start_time: Instant,
}

impl AppState {
    pub fn new(store: Arc<MissionStore>) -> Self {
        Self {
            store,
            start_time: Instant::now(),
        }
    }
}

/// Build the mission API router.
///
/// Routes mirror the original JSON contract under `/api`, plus an
/// unauthenticated `/health` endpoint for process supervision.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::get_health))
        .route("/api/missions", get(handlers::list_missions))
        .route("/api/missions/{code}", get(handlers::get_mission))
        .route("/api/missions/{code}/steps", get(handlers::list_mission_steps))
        .route(
            "/api/missions/{code}/steps/{step}",
            get(handlers::get_mission_step),
        )
        .route("/api/users", post(handlers::register_user))
        .route("/api/users/{user_id}", get(handlers::get_user))
        .route("/api/users/{user_id}/progress", get(handlers::list_user_progress))
        .route(
            "/api/users/{user_id}/progress/{mission_code}",
            get(handlers::get_user_progress).post(handlers::post_user_progress),
        )
        .route("/api/demo/user", get(handlers::get_demo_user))
        .route("/api/dispatch", post(dispatch::dispatch_mission))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Bind and serve the mission API until the shutdown future resolves.
pub async fn start_server(
    host: &str,
    port: u16,
    state: AppState,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), QuestlineError> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| QuestlineError::Server {
            message: format!("failed to bind gateway to {addr}: {e}"),
            source: Some(Box::new(e)),
        })?;

    tracing::info!("Questline server listening on {addr}");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| QuestlineError::Server {
            message: format!("gateway server error: {e}"),
            source: Some(Box::new(e)),
        })?;

    Ok(())
}
