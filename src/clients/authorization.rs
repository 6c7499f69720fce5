//! Authorization decision service client
//!
//! The transfer engine consults this service once per transfer, inside the
//! critical path. The request timeout is bounded by configuration because
//! the call runs while wallet row locks are held.

use crate::config::ServiceClientConfig;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Failure talking to the authorization service. Never to be conflated with
/// an explicit `authorized: false` decision.
#[derive(Error, Debug)]
pub enum AuthorizationError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("service returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Decision payload returned by the authorization service
#[derive(Debug, Deserialize)]
pub struct AuthorizationDecision {
    pub authorized: bool,
}

/// Boundary contract for the external authorization decision service
#[async_trait]
pub trait AuthorizationGateway: Send + Sync {
    /// Ask for an allow/deny decision. `Ok(false)` is a legitimate denial;
    /// `Err` means the service could not answer.
    async fn authorize(&self) -> Result<bool, AuthorizationError>;
}

/// reqwest-backed gateway talking to the configured URL
pub struct HttpAuthorizationGateway {
    client: reqwest::Client,
    url: String,
}

impl HttpAuthorizationGateway {
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
impl AuthorizationGateway for HttpAuthorizationGateway {
    async fn authorize(&self) -> Result<bool, AuthorizationError> {
        let resp = self.client.get(&self.url).send().await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(AuthorizationError::Status(status));
        }

        let decision: AuthorizationDecision = resp.json().await?;
        Ok(decision.authorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_deserializes() {
        let allow: AuthorizationDecision = serde_json::from_str(r#"{"authorized": true}"#).unwrap();
        assert!(allow.authorized);

        let deny: AuthorizationDecision = serde_json::from_str(r#"{"authorized": false}"#).unwrap();
        assert!(!deny.authorized);
    }

    #[test]
    fn test_gateway_builds_from_config() {
        let config = ServiceClientConfig {
            url: "http://localhost:8081/authorize".to_string(),
            timeout_ms: 500,
        };
        assert!(HttpAuthorizationGateway::new(&config).is_ok());
    }
}
