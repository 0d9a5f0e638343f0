// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Axum REST gateway for the Questline mission service.
//!
//! Translates HTTP requests into entity store and progression rule calls
//! and serializes results as JSON. The store handle is injected through
//! shared state; nothing here is a process-wide global.

pub mod dispatch;
pub mod error;
pub mod handlers;
pub mod server;

pub use error::ApiError;
pub use server::{router, start_server, AppState};
