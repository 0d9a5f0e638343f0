// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Layered configuration for the Questline mission service.
//!
//! Loading goes through Figment (defaults, system TOML, user XDG TOML,
//! local TOML, `QUESTLINE_*` env vars), then post-deserialization
//! validation. Errors are rendered as miette diagnostics with "did you
//! mean?" suggestions for unknown keys.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

pub mod diagnostic;
pub mod loader;
pub mod model;
pub mod validation;

pub use diagnostic::{render_errors, ConfigError};
pub use model::QuestlineConfig;

/// Load configuration from the standard hierarchy and validate it.
///
/// Returns all collected errors rather than failing on the first, so a
/// user can fix their config in one pass.
pub fn load_and_validate() -> Result<QuestlineConfig, Vec<ConfigError>> {
    let config = loader::load_config().map_err(diagnostic::figment_to_config_errors)?;
    validation::validate_config(&config)?;
    Ok(config)
}
