use super::RecordType;
use std::net::Ipv4Addr;

/// Synthesized answer record. `name` always echoes the queried name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    pub name: String,

    pub ttl: u32,

    pub data: RecordData,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordData {
    A(Ipv4Addr),
    NS(String),
    SOA(SoaData),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SoaData {
    /// Primary nameserver (MNAME), the zone's own domain.
    pub authority: String,
    /// Responsible mailbox (RNAME) in name form.
    pub mbox: String,
    pub serial: u32,
    pub refresh: u32,
    pub retry: u32,
    pub expire: u32,
    pub minttl: u32,
}

impl ResourceRecord {
    pub fn a(name: impl Into<String>, ttl: u32, address: Ipv4Addr) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::A(address),
        }
    }

    pub fn ns(name: impl Into<String>, ttl: u32, nameserver: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::NS(nameserver.into()),
        }
    }

    pub fn soa(name: impl Into<String>, ttl: u32, soa: SoaData) -> Self {
        Self {
            name: name.into(),
            ttl,
            data: RecordData::SOA(soa),
        }
    }

    pub fn record_type(&self) -> RecordType {
        match self.data {
            RecordData::A(_) => RecordType::A,
            RecordData::NS(_) => RecordType::NS,
            RecordData::SOA(_) => RecordType::SOA,
        }
    }
}
