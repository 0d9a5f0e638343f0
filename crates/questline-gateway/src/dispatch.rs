// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mission dispatch: reassign every step of a mission to a new character.
//!
//! Dispatch rewrites the mission's steps in place. Step indices, messages,
//! and option graphs survive untouched; only the speaking character
//! changes. Running the same dispatch twice is a no-op after the first.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};

use questline_core::types::{Mission, MissionStep, NewMissionStep};

use crate::error::ApiError;
use crate::server::AppState;

/// Request body for POST /api/dispatch.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DispatchRequest {
    #[serde(default)]
    pub mission_code: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
}

/// Response body for POST /api/dispatch.
#[derive(Debug, Serialize)]
pub struct DispatchResponse {
    /// Human-readable confirmation.
    pub message: String,
    /// The mission that was dispatched.
    pub mission: Mission,
    /// The rewritten steps, sorted by step index.
    pub steps: Vec<MissionStep>,
}

/// POST /api/dispatch
pub async fn dispatch_mission(
    State(state): State<AppState>,
    Json(body): Json<DispatchRequest>,
) -> Result<Json<DispatchResponse>, ApiError> {
    let (mission_code, character_name) = match (body.mission_code, body.character_name) {
        (Some(code), Some(name)) if !code.is_empty() && !name.is_empty() => (code, name),
        _ => {
            return Err(ApiError::Validation(
                "Mission code and character name are required".to_string(),
            ));
        }
    };

    let mission = state
        .store
        .get_mission(&mission_code)
        .await
        .ok_or_else(|| ApiError::NotFound("Mission not found".to_string()))?;

    let existing = state.store.mission_steps(&mission_code).await;
    tracing::info!(
        mission = mission_code.as_str(),
        character = character_name.as_str(),
        steps = existing.len(),
        "dispatching mission"
    );

    let mut steps = Vec::with_capacity(existing.len());
    for step in existing {
        // Steps already voiced by the target keep their record, id included.
        if step.character == character_name {
            steps.push(step);
            continue;
        }
        // Options went through the store's decode boundary once already;
        // re-encode so the upsert path stays uniform.
        let options = serde_json::to_value(&step.options)
            .map_err(|e| ApiError::internal("Failed to dispatch mission", e))?;
        let rewritten = state
            .store
            .upsert_mission_step(NewMissionStep {
                mission_code: step.mission_code,
                step: step.step,
                character: character_name.clone(),
                message: step.message,
                options,
            })
            .await;
        steps.push(rewritten);
    }
    steps.sort_by_key(|s| s.step);

    Ok(Json(DispatchResponse {
        message: format!("Mission {mission_code} has been assigned to {character_name}"),
        mission,
        steps,
    }))
}
