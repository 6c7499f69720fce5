//! OpenAPI / Swagger UI Documentation
//!
//! - Swagger UI: `http://localhost:8080/docs`
//! - OpenAPI JSON: `http://localhost:8080/api-docs/openapi.json`

use utoipa::OpenApi;

use crate::gateway::handlers::HealthResponse;
use crate::gateway::types::Problem;
use crate::transfer::{Transfer, TransferRequest};
use crate::wallet::{CreateWalletRequest, Wallet, WalletType};

/// Main API Documentation struct
#[derive(OpenApi)]
#[openapi(
    info(
        title = "walletd API",
        version = "1.0.0",
        description = "Ledger-style funds-transfer service: wallet balances, atomic transfers, external authorization.",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Development"),
    ),
    paths(
        crate::gateway::handlers::health_check,
        crate::gateway::handlers::create_wallet,
        crate::gateway::handlers::create_transfer,
        crate::gateway::handlers::get_transfer,
    ),
    components(schemas(
        HealthResponse,
        Problem,
        Transfer,
        TransferRequest,
        Wallet,
        WalletType,
        CreateWalletRequest,
    )),
    tags(
        (name = "Transfer", description = "Atomic wallet-to-wallet transfers"),
        (name = "Wallet", description = "Wallet registration"),
        (name = "System", description = "Health and diagnostics")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_document_builds() {
        let doc = ApiDoc::openapi();
        let json = doc.to_json().expect("OpenAPI doc should serialize");
        assert!(json.contains("/transfer"));
        assert!(json.contains("/wallets"));
    }
}
