#![allow(dead_code)]
use ipdns_domain::{Config, Protocol};

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.domains = vec!["example.com".to_string()];
        config.zone.soa.serial = Some(2024010101);
        Self { config }
    }

    pub fn domains(mut self, domains: &[&str]) -> Self {
        self.config.server.domains = domains.iter().map(|d| d.to_string()).collect();
        self
    }

    pub fn protocols(mut self, protocols: &[Protocol]) -> Self {
        self.config.server.protocols = protocols.to_vec();
        self
    }

    pub fn bind(mut self, address: &str, port: u16) -> Self {
        self.config.server.bind_address = address.to_string();
        self.config.server.port = port;
        self
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.config.zone.ttl = ttl;
        self
    }

    pub fn nameservers(mut self, nameservers: &[&str]) -> Self {
        self.config.zone.nameservers = nameservers.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn mbox(mut self, mbox: &str) -> Self {
        self.config.zone.soa.mbox = Some(mbox.to_string());
        self
    }

    pub fn serial(mut self, serial: Option<u32>) -> Self {
        self.config.zone.soa.serial = serial;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
