//! HTTP clients for the external authorization and notification services
//!
//! Both services are consumed through trait contracts so the transfer engine
//! and its tests never depend on the wire implementations directly.

pub mod authorization;
pub mod notification;

pub use authorization::{AuthorizationError, AuthorizationGateway, HttpAuthorizationGateway};
pub use notification::{HttpNotificationClient, NotificationClient, NotificationError};
