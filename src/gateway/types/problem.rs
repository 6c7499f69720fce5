//! Structured problem payloads
//!
//! Every error kind maps to exactly one response category here, so callers
//! can branch on cause without parsing free-form messages. Internal error
//! detail never leaks past a generic title.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::transfer::TransferError;
use crate::wallet::WalletError;

/// Error payload returned by every failing endpoint
#[derive(Debug, Serialize, ToSchema)]
pub struct Problem {
    /// HTTP status code, mirrored in the response status line
    #[schema(example = 422)]
    pub status: u16,
    #[schema(example = "Insufficient balance")]
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Problem {
    pub fn new(status: StatusCode, title: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            title: title.into(),
            detail: None,
        }
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    /// Malformed request payload: bad-request class with field-level detail
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::new(
            StatusCode::BAD_REQUEST,
            "Your request parameters didn't validate",
        )
        .with_detail(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, "Not found").with_detail(detail)
    }

    /// Internal-error class: generic title, no detail leaked to the caller
    pub fn internal() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

impl IntoResponse for Problem {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

impl From<TransferError> for Problem {
    fn from(err: TransferError) -> Self {
        match err {
            TransferError::WalletNotFound(wallet_id) => {
                Problem::new(StatusCode::NOT_FOUND, "Wallet not found")
                    .with_detail(format!("There is no wallet with id {}.", wallet_id))
            }
            TransferError::TransferNotAllowedForWalletType => Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "This wallet type is not allowed to transfer",
            ),
            TransferError::InsufficientBalance => Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Insufficient balance",
            )
            .with_detail("You cannot transfer a value bigger than your current balance."),
            TransferError::TransferNotAuthorized => Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Transfer not authorized",
            )
            .with_detail("Authorization service did not authorize this transfer."),
            TransferError::InvalidAmount(scale) => Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Invalid transfer amount",
            )
            .with_detail(format!(
                "Amount must be positive with at most {} decimal places.",
                scale
            )),
            // Gateway failures and storage failures are internal: the caller
            // learns nothing beyond the generic title, and a transport
            // failure never masquerades as a denial.
            TransferError::AuthorizationUnavailable | TransferError::Database(_) => {
                Problem::internal()
            }
        }
    }
}

impl From<WalletError> for Problem {
    fn from(err: WalletError) -> Self {
        match err {
            WalletError::DataAlreadyExists => Problem::new(
                StatusCode::UNPROCESSABLE_ENTITY,
                "Wallet data already exists",
            )
            .with_detail("NIF or Email already exists."),
            WalletError::Hashing(_) | WalletError::Database(_) => Problem::internal(),
        }
    }
}
