//! Wallet registration endpoint

use std::sync::Arc;

use axum::{
    Json,
    extract::State,
    extract::rejection::JsonRejection,
    http::StatusCode,
};

use super::super::state::AppState;
use super::super::types::Problem;
use crate::wallet::{CreateWalletRequest, Wallet, WalletService};

/// Register a new wallet
///
/// POST /wallets
#[utoipa::path(
    post,
    path = "/wallets",
    request_body = CreateWalletRequest,
    responses(
        (status = 201, description = "Wallet registered", body = Wallet),
        (status = 400, description = "Malformed request payload", body = Problem),
        (status = 422, description = "NIF or email already registered", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Wallet"
)]
pub async fn create_wallet(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CreateWalletRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Wallet>), Problem> {
    let Json(req) = payload.map_err(|e| Problem::validation(e.body_text()))?;

    if req.full_name.trim().is_empty()
        || req.nif.trim().is_empty()
        || req.email.trim().is_empty()
        || req.password.is_empty()
    {
        return Err(Problem::validation(
            "full_name, nif, email and password must not be blank",
        ));
    }

    match WalletService::create(&state.db, &state.hasher, req).await {
        Ok(wallet) => Ok((StatusCode::CREATED, Json(wallet))),
        Err(e) => {
            tracing::warn!("Wallet registration rejected: {}", e);
            Err(e.into())
        }
    }
}
