// SPDX-FileCopyrightText: 2026 Questline Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `questline serve` command implementation.
//!
//! Builds the in-memory store, seeds the demo catalog when configured, and
//! runs the axum gateway until interrupted.

use std::sync::Arc;

use questline_config::QuestlineConfig;
use questline_core::QuestlineError;
use questline_gateway::{start_server, AppState};
use questline_store::{seed, MissionStore};
use tracing::info;

/// Runs the `questline serve` command.
///
/// The store is volatile, so the demo catalog is reloaded on every start
/// unless `content.seed_demo` is off. Supports graceful shutdown via ctrl-c.
pub async fn run_serve(config: QuestlineConfig) -> Result<(), QuestlineError> {
    init_tracing(&config.server.log_level);

    info!("starting questline serve");

    let store = Arc::new(MissionStore::new());
    if config.content.seed_demo {
        let demo_user = seed::seed_demo(
            &store,
            &config.content.demo_username,
            &config.content.demo_password,
        )
        .await;
        info!(user_id = demo_user.id, "demo catalog ready");
    } else {
        info!("demo seeding disabled by configuration");
    }

    let state = AppState::new(store);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for shutdown signal");
        }
        info!("shutdown signal received");
    };

    start_server(&config.server.host, config.server.port, state, shutdown).await?;

    info!("questline serve shutdown complete");
    Ok(())
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("questline={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_names(false)
        .init();
}
