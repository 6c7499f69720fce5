//! Transfer endpoints

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    extract::rejection::JsonRejection,
};
use uuid::Uuid;

use super::super::state::AppState;
use super::super::types::Problem;
use crate::transfer::{Transfer, TransferRepository, TransferRequest, TransferService};

/// Execute a wallet-to-wallet transfer
///
/// POST /transfer
#[utoipa::path(
    post,
    path = "/transfer",
    request_body = TransferRequest,
    responses(
        (status = 200, description = "Transfer committed", body = Transfer),
        (status = 400, description = "Malformed request payload", body = Problem),
        (status = 404, description = "Payer or payee wallet not found", body = Problem),
        (status = 422, description = "Business rule violation", body = Problem),
        (status = 500, description = "Internal error or authorization service unavailable", body = Problem)
    ),
    tag = "Transfer"
)]
pub async fn create_transfer(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<TransferRequest>, JsonRejection>,
) -> Result<Json<Transfer>, Problem> {
    let Json(req) = payload.map_err(|e| Problem::validation(e.body_text()))?;

    match TransferService::execute(
        &state.db,
        state.authorization.as_ref(),
        &state.notifier,
        req,
    )
    .await
    {
        Ok(transfer) => Ok(Json(transfer)),
        Err(e) => {
            tracing::warn!("Transfer rejected: {}", e);
            Err(e.into())
        }
    }
}

/// Get a committed transfer by ID
///
/// GET /transfer/{transfer_id}
#[utoipa::path(
    get,
    path = "/transfer/{transfer_id}",
    params(
        ("transfer_id" = Uuid, Path, description = "Transfer identifier")
    ),
    responses(
        (status = 200, description = "Committed transfer", body = Transfer),
        (status = 404, description = "Transfer not found", body = Problem),
        (status = 500, description = "Internal error", body = Problem)
    ),
    tag = "Transfer"
)]
pub async fn get_transfer(
    State(state): State<Arc<AppState>>,
    Path(transfer_id): Path<Uuid>,
) -> Result<Json<Transfer>, Problem> {
    let transfer = TransferRepository::get_by_id(state.db.pool(), transfer_id)
        .await
        .map_err(|e| {
            tracing::error!("Transfer lookup failed: {}", e);
            Problem::internal()
        })?
        .ok_or_else(|| {
            Problem::not_found(format!("There is no transfer with id {}.", transfer_id))
        })?;

    Ok(Json(transfer))
}
