use std::fmt;
use std::net::{IpAddr, SocketAddr};

use crate::config::{ConfigError, Protocol};

/// Socket binding of one listener.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ListenSpec {
    pub address: String,
    pub port: u16,
    pub protocol: Protocol,
}

impl ListenSpec {
    pub fn new(address: impl Into<String>, port: u16, protocol: Protocol) -> Self {
        Self {
            address: address.into(),
            port,
            protocol,
        }
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self.address.parse().map_err(|_| {
            ConfigError::Validation(format!("Invalid bind address: {}", self.address))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl fmt::Display for ListenSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.address.parse::<IpAddr>() {
            Ok(IpAddr::V6(_)) => write!(f, "[{}]:{}/{}", self.address, self.port, self.protocol),
            _ => write!(f, "{}:{}/{}", self.address, self.port, self.protocol),
        }
    }
}
