//! walletd - Ledger-Style Funds-Transfer Service
//!
//! Holds wallet balances and moves value between two wallets under strict
//! consistency and authorization rules.
//!
//! # Modules
//!
//! - [`config`] - YAML configuration loading
//! - [`db`] - PostgreSQL connection pool and schema bootstrap
//! - [`wallet`] - Wallet model, registration and repository
//! - [`transfer`] - Transfer engine: validation, atomic balance moves, records
//! - [`clients`] - External authorization / notification service clients
//! - [`notifier`] - Post-commit notification queue and worker
//! - [`gateway`] - Axum HTTP gateway
//! - [`logging`] - tracing subscriber setup

pub mod clients;
pub mod config;
pub mod db;
pub mod gateway;
pub mod logging;
pub mod notifier;
pub mod transfer;
pub mod wallet;

// Convenient re-exports at crate root
pub use clients::{AuthorizationGateway, NotificationClient};
pub use db::Database;
pub use notifier::NotificationDispatcher;
pub use transfer::{Transfer, TransferError, TransferService};
pub use wallet::{Wallet, WalletService, WalletType};
