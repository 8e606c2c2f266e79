use serde::{Deserialize, Serialize};

/// Record parameters shared by every served zone.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ZoneRecordsConfig {
    #[serde(default = "default_ttl")]
    pub ttl: u32,

    /// Explicit NS targets. Empty means each zone names itself.
    #[serde(default)]
    pub nameservers: Vec<String>,

    #[serde(default)]
    pub soa: SoaConfig,
}

impl Default for ZoneRecordsConfig {
    fn default() -> Self {
        Self {
            ttl: default_ttl(),
            nameservers: Vec::new(),
            soa: SoaConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SoaConfig {
    /// Responsible mailbox, either `user@host` or already in `user.host` form.
    /// Defaults to `admin.<domain>`.
    #[serde(default)]
    pub mbox: Option<String>,

    /// Defaults to the process start time in Unix seconds.
    #[serde(default)]
    pub serial: Option<u32>,

    #[serde(default = "default_refresh")]
    pub refresh: u32,

    #[serde(default = "default_retry")]
    pub retry: u32,

    #[serde(default = "default_expire")]
    pub expire: u32,

    #[serde(default = "default_minttl")]
    pub minttl: u32,
}

impl Default for SoaConfig {
    fn default() -> Self {
        Self {
            mbox: None,
            serial: None,
            refresh: default_refresh(),
            retry: default_retry(),
            expire: default_expire(),
            minttl: default_minttl(),
        }
    }
}

impl SoaConfig {
    pub fn has_mbox(&self) -> bool {
        self.mbox.as_deref().is_some_and(|m| !m.trim().is_empty())
    }
}

fn default_ttl() -> u32 {
    60
}

fn default_refresh() -> u32 {
    3600
}

fn default_retry() -> u32 {
    900
}

fn default_expire() -> u32 {
    604_800
}

fn default_minttl() -> u32 {
    3600
}
