pub mod handlers;
pub mod openapi;
pub mod state;
pub mod types;

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tokio::net::TcpListener;

use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::clients::{HttpAuthorizationGateway, HttpNotificationClient};
use crate::config::AppConfig;
use crate::db::Database;
use crate::notifier::NotificationDispatcher;
use crate::wallet::CredentialHasher;
use state::AppState;

/// Start the HTTP gateway server
pub async fn run_server(config: &AppConfig, port: u16, db: Arc<Database>) {
    // External service clients, built once with bounded timeouts
    let authorization = match HttpAuthorizationGateway::new(&config.clients.authorization) {
        Ok(gateway) => Arc::new(gateway),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to build authorization client: {}", e);
            std::process::exit(1);
        }
    };
    let notification = match HttpNotificationClient::new(&config.clients.notification) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("❌ FATAL: Failed to build notification client: {}", e);
            std::process::exit(1);
        }
    };

    // Post-commit notification worker; transfers outlive its failures
    let (notifier, _notification_worker) =
        NotificationDispatcher::spawn(notification, config.clients.notification_queue_size);
    println!("📨 Notification worker started");

    let state = Arc::new(AppState::new(
        db,
        authorization,
        notifier,
        Arc::new(CredentialHasher::new()),
    ));

    let app = Router::new()
        .route("/transfer", post(handlers::create_transfer))
        .route("/transfer/{transfer_id}", get(handlers::get_transfer))
        .route("/wallets", post(handlers::create_wallet))
        .route("/api/v1/health", get(handlers::health_check))
        .with_state(state)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi::ApiDoc::openapi()));

    // Bind address
    let addr = format!("{}:{}", config.gateway.host, port);
    let listener = match TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            eprintln!("❌ FATAL: Failed to bind to {}: {}", addr, e);
            eprintln!(
                "   Hint: Port {} may already be in use. Check with: lsof -i :{}",
                port, port
            );
            std::process::exit(1);
        }
    };

    println!("🚀 Gateway listening on http://{}", addr);
    println!("📖 API Docs: http://{}/docs", addr);

    // Start server
    if let Err(e) = axum::serve(listener, app).await {
        eprintln!("❌ FATAL: Server error: {}", e);
        std::process::exit(1);
    }
}
