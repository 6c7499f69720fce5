use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransferError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Wallet {0} not found")]
    WalletNotFound(i64),

    #[error("This wallet type is not allowed to transfer")]
    TransferNotAllowedForWalletType,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("Transfer not authorized")]
    TransferNotAuthorized,

    /// The authorization service failed or was unreachable. Kept distinct
    /// from [`TransferError::TransferNotAuthorized`]: a transport failure
    /// must never read as a legitimate denial.
    #[error("Authorization service unavailable")]
    AuthorizationUnavailable,

    #[error("Invalid amount: must be positive with at most {0} decimal places")]
    InvalidAmount(u32),
}
