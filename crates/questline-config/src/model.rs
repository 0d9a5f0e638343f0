// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Questline mission service.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Questline configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct QuestlineConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Seed content settings.
    #[serde(default)]
    pub content: ContentConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Host address to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to bind.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            log_level: default_log_level(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Seed content configuration.
///
/// The store is volatile, so the demo catalog is loaded on every start
/// unless disabled.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Seed the demo user and mission catalog at startup.
    #[serde(default = "default_seed_demo")]
    pub seed_demo: bool,

    /// Username for the seeded demo user (always assigned id 1).
    #[serde(default = "default_demo_username")]
    pub demo_username: String,

    /// Password for the seeded demo user (stored verbatim; this is demo
    /// content, not an account system).
    #[serde(default = "default_demo_password")]
    pub demo_password: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            seed_demo: default_seed_demo(),
            demo_username: default_demo_username(),
            demo_password: default_demo_password(),
        }
    }
}

fn default_seed_demo() -> bool {
    true
}

fn default_demo_username() -> String {
    "demoUser".to_string()
}

fn default_demo_password() -> String {
    "password123".to_string()
}
