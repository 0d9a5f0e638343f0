// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP request handlers for the mission REST API.
//!
//! Store lookups report absence as `None`; handlers map that to 404 with
//! the same messages the browser client already displays. Snapshots come
//! straight out of the store and serialize with camelCase field names.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use questline_core::types::{Mission, MissionStep, NewUser, ProgressUpdate, User, UserProgress};

use crate::error::ApiError;
use crate::server::AppState;

/// The seeded demo user always gets the first id on a fresh store.
pub const DEMO_USER_ID: i64 = 1;

/// Request body for POST /api/users.
///
/// Fields are optional so an incomplete payload surfaces as a 400 with a
/// message instead of an extractor rejection.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Response body for GET /health.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Health status string.
    pub status: String,
    /// Binary version.
    pub version: String,
    /// Uptime in seconds.
    pub uptime_secs: u64,
}

/// GET /health
pub async fn get_health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /api/missions
pub async fn list_missions(State(state): State<AppState>) -> Json<Vec<Mission>> {
    Json(state.store.all_missions().await)
}

/// GET /api/missions/:code
pub async fn get_mission(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Mission>, ApiError> {
    state
        .store
        .get_mission(&code)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Mission not found".to_string()))
}

/// GET /api/missions/:code/steps
///
/// Steps come back sorted ascending by step index; sequential playback
/// relies on that ordering. An empty list is a 404, matching the original
/// contract.
pub async fn list_mission_steps(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<Vec<MissionStep>>, ApiError> {
    let steps = state.store.mission_steps(&code).await;
    if steps.is_empty() {
        return Err(ApiError::NotFound(
            "No steps found for this mission".to_string(),
        ));
    }
    Ok(Json(steps))
}

/// GET /api/missions/:code/steps/:step
pub async fn get_mission_step(
    State(state): State<AppState>,
    Path((code, step)): Path<(String, i32)>,
) -> Result<Json<MissionStep>, ApiError> {
    state
        .store
        .get_mission_step(&code, step)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Mission step not found".to_string()))
}

/// GET /api/users/:userId/progress
pub async fn list_user_progress(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Json<Vec<UserProgress>> {
    Json(state.store.all_user_progress(user_id).await)
}

/// GET /api/users/:userId/progress/:missionCode
pub async fn get_user_progress(
    State(state): State<AppState>,
    Path((user_id, mission_code)): Path<(i64, String)>,
) -> Result<Json<UserProgress>, ApiError> {
    state
        .store
        .get_user_progress(user_id, &mission_code)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Progress not found".to_string()))
}

/// POST /api/users/:userId/progress/:missionCode
///
/// Upserts progress fields: creates the record if absent, merges only the
/// provided fields, and adds any per-mission star increase to the owning
/// user's lifetime total. The whole read-modify-write runs under one store
/// write lock.
pub async fn post_user_progress(
    State(state): State<AppState>,
    Path((user_id, mission_code)): Path<(i64, String)>,
    Json(update): Json<ProgressUpdate>,
) -> Json<UserProgress> {
    Json(
        state
            .store
            .apply_progress_update(user_id, &mission_code, update)
            .await,
    )
}

/// POST /api/users
pub async fn register_user(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let (username, password) = match (body.username, body.password) {
        (Some(u), Some(p)) if !u.trim().is_empty() && !p.is_empty() => (u, p),
        _ => return Err(ApiError::Validation("Invalid user data".to_string())),
    };

    if state.store.get_user_by_username(&username).await.is_some() {
        return Err(ApiError::Conflict("Username already exists".to_string()));
    }

    let user = state.store.create_user(NewUser { username, password }).await;
    tracing::info!(user_id = user.id, "user registered");
    Ok((StatusCode::CREATED, Json(user)))
}

/// GET /api/users/:userId
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    state
        .store
        .get_user(user_id)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("User not found".to_string()))
}

/// GET /api/demo/user
pub async fn get_demo_user(State(state): State<AppState>) -> Result<Json<User>, ApiError> {
    state
        .store
        .get_user(DEMO_USER_ID)
        .await
        .map(Json)
        .ok_or_else(|| ApiError::NotFound("Demo user not found".to_string()))
}
