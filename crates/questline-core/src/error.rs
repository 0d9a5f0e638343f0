// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Questline mission service.
//!
//! Entity absence is never an error: store lookups return `Option` and the
//! gateway maps `None` to a 404 response. This enum covers the faults that
//! actually abort work (bad configuration, server startup, internal bugs).

use thiserror::Error;

/// The primary error type used across the Questline workspace.
#[derive(Debug, Error)]
pub enum QuestlineError {
    /// Configuration errors (invalid TOML, missing required fields, type mismatches).
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP server errors (bind failure, accept loop failure).
    #[error("server error: {message}")]
    Server {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}
