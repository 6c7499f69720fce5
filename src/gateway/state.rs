use std::sync::Arc;

use crate::clients::authorization::AuthorizationGateway;
use crate::db::Database;
use crate::notifier::NotificationDispatcher;
use crate::wallet::CredentialHasher;

/// Shared gateway application state
#[derive(Clone)]
pub struct AppState {
    /// PostgreSQL wallet and transfer store
    pub db: Arc<Database>,
    /// External authorization decision service
    pub authorization: Arc<dyn AuthorizationGateway>,
    /// Post-commit notification queue handle
    pub notifier: NotificationDispatcher,
    /// Password hashing capability for wallet registration
    pub hasher: Arc<CredentialHasher>,
}

impl AppState {
    pub fn new(
        db: Arc<Database>,
        authorization: Arc<dyn AuthorizationGateway>,
        notifier: NotificationDispatcher,
        hasher: Arc<CredentialHasher>,
    ) -> Self {
        Self {
            db,
            authorization,
            notifier,
            hasher,
        }
    }
}
