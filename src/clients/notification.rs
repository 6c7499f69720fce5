//! Notification service client
//!
//! Delivery is advisory: the caller logs failures and moves on. No retry,
//! no escalation back into the transfer path.

use crate::config::ServiceClientConfig;
use crate::transfer::Transfer;
use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Boundary contract for the external notification service
#[async_trait]
pub trait NotificationClient: Send + Sync {
    async fn notify(&self, transfer: &Transfer) -> Result<(), NotificationError>;
}

/// reqwest-backed client POSTing the committed transfer payload
pub struct HttpNotificationClient {
    client: reqwest::Client,
    url: String,
}

impl HttpNotificationClient {
    pub fn new(config: &ServiceClientConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl NotificationClient for HttpNotificationClient {
    async fn notify(&self, transfer: &Transfer) -> Result<(), NotificationError> {
        let resp = self.client.post(&self.url).json(transfer).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(NotificationError::Status(status));
        }

        Ok(())
    }
}
