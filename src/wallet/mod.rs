//! Wallet management module
//!
//! PostgreSQL-based storage for wallets: the account records whose balances
//! the transfer engine moves value between.

pub mod hashing;
pub mod models;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use hashing::CredentialHasher;
pub use models::{Wallet, WalletType};
pub use repository::WalletRepository;
pub use service::{CreateWalletRequest, WalletError, WalletService};
