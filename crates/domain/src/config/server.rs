use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerConfig {
    pub dns_port: u16,

    pub web_port: u16,

    pub bind_address: String,

    /// Upper bound on datagrams being handled at once. Datagrams arriving while
    /// every slot is busy are dropped.
    pub max_inflight_queries: usize,

    pub web_enabled: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            dns_port: 9154,
            web_port: 8154,
            bind_address: "0.0.0.0".to_string(),
            max_inflight_queries: 1024,
            web_enabled: true,
        }
    }
}

impl ServerConfig {
    /// Accepts IPv4 and IPv6 literals, e.g. `0.0.0.0` or `::`.
    pub fn bind_ip(&self) -> Result<IpAddr, ConfigError> {
        self.bind_address
            .trim()
            .parse()
            .map_err(|_| ConfigError::BindAddress(self.bind_address.clone()))
    }

    pub fn dns_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.dns_port))
    }

    pub fn web_addr(&self) -> Result<SocketAddr, ConfigError> {
        Ok(SocketAddr::new(self.bind_ip()?, self.web_port))
    }
}
