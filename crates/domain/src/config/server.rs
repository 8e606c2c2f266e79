use serde::{Deserialize, Serialize};

use super::protocol::Protocol;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_protocols")]
    pub protocols: Vec<Protocol>,

    /// Domains served by every listener; `"."` is the root zone.
    #[serde(default = "default_domains")]
    pub domains: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            port: default_port(),
            protocols: default_protocols(),
            domains: default_domains(),
        }
    }
}

// IPv6 wildcard, bound dual-stack so IPv4 clients are served too.
fn default_bind_address() -> String {
    "::".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_protocols() -> Vec<Protocol> {
    vec![Protocol::Tcp, Protocol::Udp]
}

fn default_domains() -> Vec<String> {
    vec![".".to_string()]
}
