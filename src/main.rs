//! walletd - Ledger-Style Funds-Transfer Service
//!
//! This is the main entry point. Architecture:
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌────────────┐    ┌──────────────┐
//! │ Gateway  │───▶│ Transfer  │───▶│ PostgreSQL │    │ Notification │
//! │ (axum)   │    │ Engine    │    │ (wallets + │───▶│ worker       │
//! └──────────┘    │ (1 txn)   │    │  transfers)│    │ (post-commit)│
//!                 └───────────┘    └────────────┘    └──────────────┘
//!                       │
//!                       ▼
//!                 Authorization service (in the critical path, bounded timeout)
//! ```

use anyhow::Context;
use std::sync::Arc;

use walletd::config::AppConfig;
use walletd::db::Database;

// ============================================================
// COMMAND LINE
// ============================================================

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

/// Get port override from command line (--port argument)
fn get_port_override() -> Option<u16> {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if args[i] == "--port" && i + 1 < args.len() {
            return args[i + 1].parse().ok();
        }
    }
    None
}

// ============================================================
// MAIN
// ============================================================

fn main() -> anyhow::Result<()> {
    let env = get_env();
    let app_config = AppConfig::load(&env);
    let _log_guard = walletd::logging::init_logging(&app_config);

    tracing::info!(
        "Starting walletd in {} mode (build {})",
        env,
        env!("GIT_HASH")
    );

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(async {
        let postgres_url = app_config
            .postgres_url
            .as_deref()
            .context("postgres_url must be set in config")?;

        let db = Database::connect(postgres_url)
            .await
            .context("Failed to connect to PostgreSQL")?;
        db.init_schema()
            .await
            .context("Failed to initialize database schema")?;

        let port = get_port_override().unwrap_or(app_config.gateway.port);

        walletd::gateway::run_server(&app_config, port, Arc::new(db)).await;
        Ok(())
    })
}
