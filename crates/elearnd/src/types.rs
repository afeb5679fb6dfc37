use crate::config::ServerConfig;
use crate::db::PortalDbManager;

/// Shared application state injected into every handler.
pub struct PortalState {
    pub db: PortalDbManager,
    pub config: ServerConfig,
}
