// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./questline.toml` > `~/.config/questline/questline.toml`
//! > `/etc/questline/questline.toml` with environment variable overrides via
//! `QUESTLINE_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::QuestlineConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/questline/questline.toml` (system-wide)
/// 3. `~/.config/questline/questline.toml` (user XDG config)
/// 4. `./questline.toml` (local directory)
/// 5. `QUESTLINE_*` environment variables
pub fn load_config() -> Result<QuestlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuestlineConfig::default()))
        .merge(Toml::file("/etc/questline/questline.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("questline/questline.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("questline.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<QuestlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuestlineConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<QuestlineConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(QuestlineConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` rather than `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names: `QUESTLINE_CONTENT_DEMO_USERNAME` must
/// map to `content.demo_username`, not `content.demo.username`.
fn env_provider() -> Env {
    Env::prefixed("QUESTLINE_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: QUESTLINE_SERVER_LOG_LEVEL -> "server_log_level"
        let mapped = key
            .as_str()
            .replacen("server_", "server.", 1)
            .replacen("content_", "content.", 1);
        mapped.into()
    })
}
