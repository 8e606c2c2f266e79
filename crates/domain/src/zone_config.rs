use crate::config::Config;
use crate::fqdn::{fqdn, is_root};

const DEFAULT_MBOX_USER: &str = "admin";

/// Immutable per-domain settings the resolver reads.
///
/// `domain`, every nameserver and `mbox` are stored in trailing-dot form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneConfig {
    pub domain: String,
    pub ttl: u32,
    pub nameservers: Vec<String>,
    pub mbox: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minttl: u32,
}

impl ZoneConfig {
    pub fn new(domain: &str, config: &Config) -> Self {
        let domain = fqdn(domain);
        let soa = &config.zone.soa;

        let mbox = match soa.mbox.as_deref().map(str::trim).filter(|m| !m.is_empty()) {
            Some(mbox) => fqdn(&mbox.replace('@', ".")),
            None => default_mbox(&domain),
        };

        Self {
            nameservers: config.zone.nameservers.iter().map(|ns| fqdn(ns)).collect(),
            ttl: config.zone.ttl,
            mbox,
            serial: soa.serial.unwrap_or_else(default_serial),
            refresh: soa.refresh,
            retry: soa.retry,
            expire: soa.expire,
            minttl: soa.minttl,
            domain,
        }
    }
}

fn default_mbox(domain: &str) -> String {
    if is_root(domain) {
        format!("{}.", DEFAULT_MBOX_USER)
    } else {
        format!("{}.{}", DEFAULT_MBOX_USER, domain)
    }
}

/// Serial used when none is configured: current Unix time, saturated to
/// the 32-bit range.
pub fn default_serial() -> u32 {
    let now = chrono::Utc::now().timestamp();
    now.clamp(0, i64::from(u32::MAX)) as u32
}
