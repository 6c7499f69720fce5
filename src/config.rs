use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub log_dir: String,
    pub log_file: String,
    pub use_json: bool,
    pub rotation: String,
    pub gateway: GatewayConfig,
    /// PostgreSQL connection URL for wallet and transfer persistence
    #[serde(default)]
    pub postgres_url: Option<String>,
    /// External authorization / notification service endpoints
    #[serde(default)]
    pub clients: ClientsConfig,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ClientsConfig {
    pub authorization: ServiceClientConfig,
    pub notification: ServiceClientConfig,
    /// Capacity of the post-commit notification queue
    pub notification_queue_size: usize,
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            authorization: ServiceClientConfig {
                url: "http://localhost:8081/authorize".to_string(),
                timeout_ms: 3000,
            },
            notification: ServiceClientConfig {
                url: "http://localhost:8082/notify".to_string(),
                timeout_ms: 3000,
            },
            notification_queue_size: 1024,
        }
    }
}

/// Endpoint of a remote service plus the request timeout bound.
///
/// The timeout matters for the authorization call: it runs inside the
/// transfer transaction, so a hung gateway must not hold wallet row locks
/// indefinitely.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ServiceClientConfig {
    pub url: String,
    pub timeout_ms: u64,
}

impl AppConfig {
    pub fn load(env: &str) -> Self {
        let config_path = format!("config/{}.yaml", env);
        let content = fs::read_to_string(&config_path)
            .unwrap_or_else(|_| panic!("Failed to read config file: {}", config_path));
        serde_yaml::from_str(&content).expect("Failed to parse config yaml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clients_config_defaults_are_bounded() {
        let clients = ClientsConfig::default();
        assert!(clients.authorization.timeout_ms > 0);
        assert!(clients.notification.timeout_ms > 0);
        assert!(clients.notification_queue_size > 0);
    }

    #[test]
    fn config_parses_without_optional_sections() {
        let yaml = r#"
log_level: "info"
log_dir: "logs"
log_file: "walletd.log"
use_json: false
rotation: "never"
gateway:
  host: "127.0.0.1"
  port: 8080
"#;
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.gateway.port, 8080);
        assert!(config.postgres_url.is_none());
        assert_eq!(config.clients.notification_queue_size, 1024);
    }
}
