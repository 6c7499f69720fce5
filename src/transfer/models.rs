use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::gateway::types::StrictAmount;

/// Immutable record of value moved from one wallet to another
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Transfer {
    pub transfer_id: Uuid,
    pub payer_id: i64,
    pub payee_id: i64,
    #[schema(value_type = String, example = "40.00")]
    pub amount: Decimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct TransferRequest {
    /// Wallet initiating the transfer
    #[schema(example = 1)]
    pub payer: i64,
    /// Wallet receiving the transfer
    #[schema(example = 2)]
    pub payee: i64,
    /// Amount as a decimal string to avoid float precision issues in JSON
    pub value: StrictAmount,
}
