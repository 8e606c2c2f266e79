use serde::{Deserialize, Serialize};
use std::net::IpAddr;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::protocol::Protocol;
use super::server::ServerConfig;
use super::zone::ZoneRecordsConfig;
use crate::fqdn::{is_root, validate_name};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["ipdns.toml", "/etc/ipdns/config.toml"];

/// Main configuration structure for ipdns
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Listen address, port, transports and served domains
    #[serde(default)]
    pub server: ServerConfig,

    /// TTL, nameservers and SOA fields of the synthesized records
    #[serde(default)]
    pub zone: ZoneRecordsConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. ipdns.toml in current directory
    /// 3. /etc/ipdns/config.toml
    /// 4. Default configuration
    ///
    /// Command-line overrides are applied on top, then an unset SOA serial
    /// is pinned to the current time.
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        config.pin_serial();
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    /// Apply command-line overrides to configuration
    pub fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(addr) = overrides.bind_address {
            self.server.bind_address = addr;
        }
        if let Some(port) = overrides.port {
            self.server.port = port;
        }
        if let Some(protocols) = overrides.protocols.filter(|p| !p.is_empty()) {
            self.server.protocols = protocols;
        }
        if let Some(domains) = overrides.domains.filter(|d| !d.is_empty()) {
            self.server.domains = domains;
        }
        if let Some(ttl) = overrides.ttl {
            self.zone.ttl = ttl;
        }
        if let Some(nameservers) = overrides.nameservers.filter(|n| !n.is_empty()) {
            self.zone.nameservers = nameservers;
        }
        if let Some(mbox) = overrides.mbox.filter(|m| !m.is_empty()) {
            self.zone.soa.mbox = Some(mbox);
        }
        if let Some(serial) = overrides.serial {
            self.zone.soa.serial = Some(serial);
        }
        if let Some(refresh) = overrides.refresh {
            self.zone.soa.refresh = refresh;
        }
        if let Some(retry) = overrides.retry {
            self.zone.soa.retry = retry;
        }
        if let Some(expire) = overrides.expire {
            self.zone.soa.expire = expire;
        }
        if let Some(minttl) = overrides.minttl {
            self.zone.soa.minttl = minttl;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Fix an unset SOA serial to the current Unix time so every zone
    /// built from this config reports the same value.
    pub fn pin_serial(&mut self) {
        if self.zone.soa.serial.is_none() {
            self.zone.soa.serial = Some(crate::zone_config::default_serial());
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }

        if self.server.bind_address.parse::<IpAddr>().is_err() {
            return Err(ConfigError::Validation(format!(
                "Invalid bind address: {}",
                self.server.bind_address
            )));
        }

        if self.server.protocols.is_empty() {
            return Err(ConfigError::Validation(
                "No listen protocols configured".to_string(),
            ));
        }

        if self.server.domains.is_empty() {
            return Err(ConfigError::Validation("No domains configured".to_string()));
        }

        for domain in &self.server.domains {
            validate_name(domain).map_err(|e| {
                ConfigError::Validation(format!("Invalid domain '{}': {}", domain, e))
            })?;

            if is_root(domain) && !self.zone.soa.has_mbox() {
                return Err(ConfigError::Validation(
                    "A domain is required when no SOA mbox is configured".to_string(),
                ));
            }
        }

        for ns in &self.zone.nameservers {
            validate_name(ns).map_err(|e| {
                ConfigError::Validation(format!("Invalid nameserver '{}': {}", ns, e))
            })?;
        }

        let soa = &self.zone.soa;
        if let Some(mbox) = soa.mbox.as_deref().filter(|m| !m.trim().is_empty()) {
            validate_name(&mbox.replace('@', ".")).map_err(|e| {
                ConfigError::Validation(format!("Invalid SOA mbox '{}': {}", mbox, e))
            })?;
        }

        for (field, value) in [
            ("refresh", soa.refresh),
            ("retry", soa.retry),
            ("expire", soa.expire),
        ] {
            if i32::try_from(value).is_err() {
                return Err(ConfigError::Validation(format!(
                    "SOA {} {} exceeds {}",
                    field,
                    value,
                    i32::MAX
                )));
            }
        }

        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        DEFAULT_CONFIG_PATHS
            .iter()
            .find(|path| std::path::Path::new(path).exists())
            .map(|path| path.to_string())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub protocols: Option<Vec<Protocol>>,
    pub domains: Option<Vec<String>>,
    pub ttl: Option<u32>,
    pub nameservers: Option<Vec<String>>,
    pub mbox: Option<String>,
    pub serial: Option<u32>,
    pub refresh: Option<u32>,
    pub retry: Option<u32>,
    pub expire: Option<u32>,
    pub minttl: Option<u32>,
    pub log_level: Option<String>,
}
