//! Process configuration from the environment

use crate::modules::ModuleSettings;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("MENU_ROUTER_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
    #[error("MENU_ROUTER_BIND must be an IP address, got {0:?}")]
    InvalidBind(String),
}

/// Server and module settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind: IpAddr,
    pub port: u16,
    pub modules: ModuleSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            modules: ModuleSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = lookup("MENU_ROUTER_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }
        if let Some(bind) = lookup("MENU_ROUTER_BIND") {
            config.bind = bind.parse().map_err(|_| ConfigError::InvalidBind(bind))?;
        }
        if let Some(url) = lookup("MENU_ROUTER_TABLES_IMAGE_URL") {
            config.modules.tables_image_url = url;
        }

        Ok(config)
    }

    pub fn addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind, self.port)
    }
}
