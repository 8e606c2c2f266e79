#![allow(dead_code)]
use ipdns_domain::{Query, Question, RecordClass, RecordType, ZoneConfig};
use std::sync::Arc;

pub struct ZoneBuilder {
    zone: ZoneConfig,
}

impl ZoneBuilder {
    pub fn new(domain: &str) -> Self {
        Self {
            zone: ZoneConfig {
                domain: domain.to_string(),
                ttl: 60,
                nameservers: vec![],
                mbox: format!("admin.{}", domain),
                serial: 2024010101,
                refresh: 3600,
                retry: 900,
                expire: 604_800,
                minttl: 3600,
            },
        }
    }

    pub fn ttl(mut self, ttl: u32) -> Self {
        self.zone.ttl = ttl;
        self
    }

    pub fn nameservers(mut self, nameservers: &[&str]) -> Self {
        self.zone.nameservers = nameservers.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn mbox(mut self, mbox: &str) -> Self {
        self.zone.mbox = mbox.to_string();
        self
    }

    pub fn build(self) -> ZoneConfig {
        self.zone
    }

    pub fn shared(self) -> Arc<ZoneConfig> {
        Arc::new(self.zone)
    }
}

/// Class code for CHAOS, which the resolver never serves.
pub const CHAOS: RecordClass = RecordClass::Unknown(3);

pub fn question(name: &str, qtype: RecordType) -> Question {
    Question::internet(name, qtype)
}

pub fn chaos_question(name: &str, qtype: RecordType) -> Question {
    Question::new(name, CHAOS, qtype)
}

pub fn query(id: u16, questions: Vec<Question>) -> Query {
    Query::new(id, questions)
}
