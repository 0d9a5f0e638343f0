// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! API error taxonomy and its HTTP mapping.
//!
//! Four classes: not-found (404), validation (400), conflict (409), and
//! unexpected (500). Bodies are `{"message": ...}`; the unexpected class
//! may carry an additional `"error"` field with the fault's string form
//! (used by the dispatch endpoint only). No retries anywhere: the store is
//! in-process memory, so there is no transient-failure class.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// An error response from the REST API.
#[derive(Debug)]
pub enum ApiError {
    /// A referenced entity is absent.
    NotFound(String),
    /// The request payload is malformed or incomplete.
    Validation(String),
    /// A unique key is already taken.
    Conflict(String),
    /// Any other fault, optionally carrying the fault's string form.
    Internal {
        message: String,
        detail: Option<String>,
    },
}

impl ApiError {
    /// Build an `Internal` error wrapping a fault's string form.
    pub fn internal(message: impl Into<String>, fault: impl std::fmt::Display) -> Self {
        Self::Internal {
            message: message.into(),
            detail: Some(fault.to_string()),
        }
    }
}

/// Wire shape of an error body.
#[derive(Debug, Serialize)]
struct ErrorBody {
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message, detail) = match self {
            ApiError::NotFound(message) => (StatusCode::NOT_FOUND, message, None),
            ApiError::Validation(message) => (StatusCode::BAD_REQUEST, message, None),
            ApiError::Conflict(message) => (StatusCode::CONFLICT, message, None),
            ApiError::Internal { message, detail } => {
                tracing::error!(message = message.as_str(), detail = ?detail, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, message, detail)
            }
        };
        (
            status,
            Json(ErrorBody {
                message,
                error: detail,
            }),
        )
            .into_response()
    }
}
